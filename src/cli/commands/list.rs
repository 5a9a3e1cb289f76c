use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::store::filter_by_badge;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_badge, colorize_net_hours};
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { badge } = cmd {
        let store = open_store(cfg);
        let all = store.load()?;

        let records = match badge {
            Some(b) => filter_by_badge(&all, b),
            None => all,
        };

        if records.is_empty() {
            match badge {
                Some(b) => info(format!("No records found for badge {}.", b.trim())),
                None => info("No records found."),
            }
            return Ok(());
        }

        match badge {
            Some(b) => header(format!("Records for badge {}", b.trim())),
            None => header("All records"),
        }
        println!("{}", render(&records));
        println!("📄 {}", store.path().display());
    }
    Ok(())
}

fn render(records: &[Record]) -> String {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Badge"),
        Column::new("Date"),
        Column::new("Entry"),
        Column::new("Exit"),
        Column::new("Net hours"),
    ]);

    for (i, r) in records.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            colorize_badge(&r.badge),
            r.date_str(),
            r.entry.to_string(),
            r.exit.to_string(),
            colorize_net_hours(r.net_hours, &format_hours(r.net_hours)),
        ]);
    }

    table.render()
}
