use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        pending,
        force,
    } = cmd
    {
        let dest = Path::new(file);

        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let store = Store::connect(&cfg.mongo_uri, &cfg.database)?;
        let timers = queries::fetch_timers(&store, *pending)?;

        match format {
            ExportFormat::Csv => write_csv(dest, &timers)?,
            ExportFormat::Json => write_json(dest, &timers)?,
        }

        notify_export_success(format.as_str(), dest);
        println!("   {} timer(s) exported", timers.len());
    }

    Ok(())
}
