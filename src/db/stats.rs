use crate::config::Config;
use crate::db::queries;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_pending};

pub fn print_db_info(store: &Store, cfg: &Config) -> AppResult<()> {
    println!();

    //
    // 1) SERVER
    //
    let version = store.server_version()?;
    println!("{}• Server:{} {}{}{}", CYAN, RESET, YELLOW, cfg.mongo_uri, RESET);
    println!("{}• MongoDB version:{} {}", CYAN, RESET, version);
    println!("{}• Database:{} {}", CYAN, RESET, cfg.database);

    //
    // 2) TIMER COUNTS
    //
    let total = queries::count_all(store)?;
    let pending = queries::count_pending(store)?;
    let filled = total.saturating_sub(pending);

    println!(
        "{}• Total timers:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    println!(
        "{}• Pending backfill:{} {}{}{}",
        CYAN,
        RESET,
        color_for_pending(pending),
        pending,
        RESET
    );
    println!("{}• Backfilled:{} {}", CYAN, RESET, filled);

    //
    // 3) DATE RANGE
    //
    let (first, last) = queries::created_at_range(store)?;

    let fmt = |dt: Option<bson::DateTime>| {
        dt.map(|d| d.to_chrono().format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Created range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
