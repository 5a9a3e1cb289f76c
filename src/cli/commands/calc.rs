use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours::CalculationResult;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_type::DayType;
use crate::ui::messages::{field, warning};
use crate::utils::colors::colorize_net_hours;
use crate::utils::formatting::{format_hours, mins2readable};

/// Calculate and print, nothing is saved.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        entry,
        exit,
        weekend,
        rounding,
    } = cmd
    {
        let day = DayType::from_flag(*weekend);
        let result = Core::calculate(entry, exit, day, cfg, *rounding)?;
        print_result(&result);
    }
    Ok(())
}

/// Shared by `calc` and `add`.
pub(crate) fn print_result(result: &CalculationResult) {
    let hours = result.net_hours();

    field(
        "Net work time",
        format!(
            "{} h ({})",
            colorize_net_hours(hours, &format_hours(hours)),
            mins2readable(result.net_minutes, false, false)
        ),
    );
    field("Rounded entry", result.rounded_entry);
    field("Rounded exit", result.rounded_exit);
    field(
        "Day type",
        format!("{} ({})", result.day_type.as_str(), result.policy.description()),
    );

    if result.deductions.is_empty() {
        field("Breaks", "none");
    } else {
        for d in &result.deductions {
            let note = if d.fallback { " (default, config invalid)" } else { "" };
            field("Break", format!("{} -{} min{}", d.kind.as_str(), d.minutes, note));
        }
    }

    if result.is_negative() {
        warning("Exit is before entry: the net working time is negative.");
    }
}
