use crate::db::pool::DbPool;
use crate::db::{kv, log, migrate};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA VERSION
    //
    let version = migrate::schema_version(&pool.conn)?;
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        version,
        migrate::latest_version()
    );

    //
    // 3) STORED COLLECTIONS
    //
    let keys = kv::list_keys(&pool.conn)?;
    println!("{}• Collections:{}", CYAN, RESET);
    if keys.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, size, updated_at) in keys {
        println!(
            "    {}{:<12}{} {:>8} bytes  {}updated {}{}",
            GREEN, key, RESET, size, GREY, updated_at, RESET
        );
    }

    //
    // 4) LOG ROWS
    //
    let log_rows = log::count(&pool.conn)?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
