use crate::cli::commands::calc::print_result;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Calculate, then save the record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        badge,
        entry,
        exit,
        weekend,
        date: date_arg,
        rounding,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Day type: explicit flag only, but point out a likely mistake
        //
        let day = DayType::from_flag(*weekend);
        if day == DayType::Weekday && DayType::from_date(d) == DayType::Weekend {
            warning(format!(
                "{} is a weekend day; weekday breaks are applied (use --weekend otherwise).",
                d
            ));
        }

        //
        // 3. Calculate (fails on invalid HH:MM, nothing is written)
        //
        let result = Core::calculate(entry, exit, day, cfg, *rounding)?;
        print_result(&result);

        //
        // 4. Save
        //
        let store = open_store(cfg);
        let record = AddLogic::apply(&store, badge, d, &result)?;

        success(format!(
            "Record saved for badge {} on {} ({}-{}, {:.2} h)\n   File: {}",
            record.badge,
            record.date_str(),
            record.entry,
            record.exit,
            record.net_hours,
            store.path().display()
        ));
    }

    Ok(())
}
