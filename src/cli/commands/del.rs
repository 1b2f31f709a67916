use super::{ask_confirmation, entry_id, finish, open_book, oplog, saved_day_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Del {
            identifier,
            entry,
            yes,
        } => {
            let mut book = open_book(cfg, None)?;
            let id = entry_id(&book, identifier, *entry)?;

            //
            // Confirmation prompt
            //
            if !*yes {
                let prompt = match book.repository().entry(id) {
                    Some((_, e)) => format!(
                        "Delete entry #{} of {} ({} h on {})? This action is irreversible.",
                        entry,
                        identifier.trim(),
                        format_hours(e.hours),
                        e.date
                    ),
                    None => format!("Delete entry #{} of {}?", entry, identifier.trim()),
                };
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            //
            // Execute deletion
            //
            book.delete_record(id)?;
            oplog(
                &book,
                "del",
                identifier.trim(),
                &format!("entry #{} deleted", entry),
            );
            finish(&mut book, cfg)?;
        }

        Commands::Unsave { position, yes } => {
            let mut book = open_book(cfg, None)?;
            let id = saved_day_id(&book, *position)?;

            if !*yes {
                let prompt = format!(
                    "Delete saved total #{}? This action is irreversible.",
                    position
                );
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            let removed = book.delete_saved_day(id)?;
            oplog(
                &book,
                "unsave",
                &removed.date,
                &format!("{} h snapshot deleted", format_hours(removed.total_hours)),
            );
        }

        _ => {}
    }

    Ok(())
}
