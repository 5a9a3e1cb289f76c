use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().lock().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        badge,
        date: date_str,
        entry,
        exit,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let entry_t = TimeOfDay::parse(entry)?;
        let exit_t = TimeOfDay::parse(exit)?;

        let prompt = format!(
            "Delete the record of badge {} on {} ({}-{})? This action is irreversible.",
            badge.trim(),
            d,
            entry_t,
            exit_t
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = open_store(cfg);
        let removed = DeleteLogic::apply(&store, badge, d, entry_t, exit_t)?;

        if removed == 1 {
            success("Record deleted.");
        } else {
            success(format!("{removed} identical records deleted."));
        }
    }

    Ok(())
}
