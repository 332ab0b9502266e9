use crate::config::Config;
use crate::db::stats;
use crate::db::store::Store;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::connect(&cfg.mongo_uri, &cfg.database)?;
    stats::print_db_info(&store, cfg)
}
