use super::{finish, open_book, oplog};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::parse_hours;
use crate::errors::AppResult;
use crate::utils::format_hours;

/// Log hours for a vehicle.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        identifier,
        hours,
        date,
        kind,
    } = cmd
    {
        //
        // 1. Parse hours before touching the database
        //
        let hours = parse_hours(hours)?;

        //
        // 2. Open store
        //
        let mut book = open_book(cfg, *kind)?;

        //
        // 3. Execute logic (identifier validated inside)
        //
        let (vehicle, _) = book.add_record(identifier, hours, date.as_deref())?;

        let name = book
            .repository()
            .vehicle(vehicle)
            .map(|v| v.identifier.to_string())
            .unwrap_or_default();
        let day = date.clone().unwrap_or_else(|| book.today());
        oplog(
            &book,
            "add",
            &name,
            &format!("{} h on {}", format_hours(hours), day),
        );

        finish(&mut book, cfg)?;
    }

    Ok(())
}
