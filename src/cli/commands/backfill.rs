use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::backfill::run_backfill;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backfill { dry_run } = cmd {
        let store = Store::connect(&cfg.mongo_uri, &cfg.database)?;

        if *dry_run {
            println!("{}▶ Backfill (dry run) on {}/timers…{}", CYAN, cfg.database, RESET);
        } else {
            println!("{}▶ Backfilling {}/timers…{}", CYAN, cfg.database, RESET);
        }

        let report = run_backfill(&store, *dry_run)?;

        if report.matched == 0 {
            println!("{}✔ Nothing to backfill.{}\n", GREEN, RESET);
            return Ok(());
        }

        let verb = if *dry_run { "would update" } else { "updated" };
        println!(
            "{}✔ Backfill completed:{} {} matched, {} {}, {} skipped\n",
            GREEN, RESET, report.matched, report.updated, verb, report.skipped
        );

        if report.skipped > 0 {
            println!(
                "{}⚠ {} timer(s) left untouched, fix their minutes field and re-run.{}\n",
                YELLOW, report.skipped, RESET
            );
        }
    }

    Ok(())
}
