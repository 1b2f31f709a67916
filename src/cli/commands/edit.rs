use super::{entry_id, finish, open_book, oplog};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::parse_hours;
use crate::errors::AppResult;
use crate::utils::format_hours;

/// `hours` and `rename`: in-place edits of existing data.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Hours {
            identifier,
            entry,
            hours,
        } => {
            let new_hours = parse_hours(hours)?;
            let mut book = open_book(cfg, None)?;

            let id = entry_id(&book, identifier, *entry)?;
            book.update_hours(id, new_hours)?;

            oplog(
                &book,
                "edit",
                identifier.trim(),
                &format!("entry #{} set to {} h", entry, format_hours(new_hours)),
            );
            finish(&mut book, cfg)?;
        }

        Commands::Rename {
            identifier,
            new_identifier,
            kind,
        } => {
            let mut book = open_book(cfg, *kind)?;

            let vehicle = book.find_vehicle(identifier)?.id;
            book.update_identifier(vehicle, new_identifier)?;

            oplog(
                &book,
                "rename",
                identifier.trim(),
                &format!("renamed to {}", new_identifier.trim()),
            );
            finish(&mut book, cfg)?;
        }

        _ => {}
    }

    Ok(())
}
