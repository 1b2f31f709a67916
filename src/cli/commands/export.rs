use super::{open_book, oplog};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let book = open_book(cfg, None)?;
        let path = expand_tilde(file);

        let doc = ExportLogic::build(
            book.repository().to_stored(),
            book.aggregator().to_stored(),
        );
        ExportLogic::write_json(&path, &doc, *force)?;

        success(format!("JSON export completed: {}", path.display()));
        oplog(
            &book,
            "export",
            &path.display().to_string(),
            &format!(
                "{} vehicle(s), {} saved day(s)",
                doc.car_database.len(),
                doc.saved_hours.len()
            ),
        );
    }
    Ok(())
}
