//! MongoDB connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::models::timer::Timer;
use bson::{Document, doc};
use mongodb::sync::{Client, Collection, Database};

pub const TIMERS_COLLECTION: &str = "timers";

pub struct Store {
    pub db: Database,
}

impl Store {
    /// Connect to the given URI and select the database.
    /// The sync client connects lazily, so ping right away to fail fast.
    pub fn connect(uri: &str, database: &str) -> AppResult<Self> {
        let client = Client::with_uri_str(uri)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).run()?;
        Ok(Self { db })
    }

    /// Raw document handle on the timers collection.
    pub fn timers(&self) -> Collection<Document> {
        self.db.collection(TIMERS_COLLECTION)
    }

    /// Typed handle on the timers collection, used for export.
    pub fn typed_timers(&self) -> Collection<Timer> {
        self.db.collection(TIMERS_COLLECTION)
    }

    /// MongoDB server version, for `status`.
    pub fn server_version(&self) -> AppResult<String> {
        let info = self.db.run_command(doc! { "buildInfo": 1 }).run()?;
        Ok(info.get_str("version").unwrap_or("unknown").to_string())
    }
}
