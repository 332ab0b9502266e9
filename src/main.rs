//! tuna-backfill main entrypoint.

use tuna_backfill::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
