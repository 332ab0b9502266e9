use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::Store;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = Store::connect(&cfg.mongo_uri, &cfg.database)?;
        BackupLogic::backup(&store, file, *compress)?;
    }

    Ok(())
}
