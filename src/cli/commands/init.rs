use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::migrate::latest_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Configuration
    //
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rMotoHours…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2. Open DB
    //
    let pool = DbPool::new(&db_path)?;

    //
    // 3. Tables + migrations
    //
    let applied = init_db(&pool.conn)?;

    println!(
        "✅ Database initialized at {} (schema v{}, {} migration(s) applied)",
        &db_path,
        latest_version(),
        applied
    );

    //
    // 4. Internal log (non blocking)
    //
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rMotoHours initialization completed!");
    Ok(())
}
