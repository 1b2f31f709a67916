use super::{open_book, oplog};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::SaveOutcome;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::format_hours;
use crate::utils::table::{Column, Table};

/// `save` and `saved`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Save { auto } => {
            let mut book = open_book(cfg, None)?;

            let outcome = if *auto {
                book.save_for_today()?
            } else {
                book.save_manual()?
            };

            if let SaveOutcome::Saved(id) = outcome {
                let day = book.aggregator().saved_day(id).cloned();
                if let Some(day) = day {
                    let mode = if *auto { "auto" } else { "manual" };
                    oplog(
                        &book,
                        "save",
                        &day.date,
                        &format!("{} h saved ({})", format_hours(day.total_hours), mode),
                    );
                }
            }
        }

        Commands::Saved => {
            let book = open_book(cfg, None)?;

            if book.saved_days().is_empty() {
                info("No saved totals yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("#"),
                Column::left("Date"),
                Column::right("Total hours"),
            ])
            .with_separator(cfg.separator());

            for (i, day) in book.saved_days().iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    day.date.clone(),
                    format_hours(day.total_hours),
                ]);
            }

            println!("{}", table.render());
        }

        _ => {}
    }

    Ok(())
}
