use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::Store;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (prod or test mode)
/// and then tries to reach the configured MongoDB instance.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.uri.clone(), cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(uri) = &cli.uri {
        cfg.mongo_uri = uri.clone();
    }
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }

    println!("⚙️  Initializing tuna-backfill…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}/{}", cfg.mongo_uri, cfg.database);

    // Reachability probe, non-blocking: the dev instance may simply
    // not be running yet.
    match Store::connect(&cfg.mongo_uri, &cfg.database) {
        Ok(store) => {
            let version = store.server_version()?;
            println!("✅ Connected to MongoDB {}", version);
        }
        Err(e) => {
            eprintln!("⚠️ MongoDB not reachable yet: {}", e);
        }
    }

    println!("🎉 tuna-backfill initialization completed!");
    Ok(())
}
