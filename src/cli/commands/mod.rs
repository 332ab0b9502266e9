pub mod backfill;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod status;
