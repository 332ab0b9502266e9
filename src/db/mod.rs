pub mod backfill;
pub mod queries;
pub mod stats;
pub mod store;

pub use backfill::run_backfill;
pub use store::Store;
