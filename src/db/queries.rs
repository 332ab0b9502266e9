//! Query layer for the timers collection.

use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::timer::Timer;
use bson::{Bson, Document, doc};
use mongodb::sync::Cursor;

/// Filter matching timers still waiting for backfill.
/// BSON null equality matches both null-valued and absent fields,
/// the same semantics the original mongo-shell filter had.
pub fn pending_filter() -> Document {
    doc! { "actual_minutes": Bson::Null }
}

pub fn find_pending(store: &Store) -> AppResult<Cursor<Document>> {
    let cursor = store.timers().find(pending_filter()).run()?;
    Ok(cursor)
}

pub fn count_pending(store: &Store) -> AppResult<u64> {
    let n = store.timers().count_documents(pending_filter()).run()?;
    Ok(n)
}

pub fn count_all(store: &Store) -> AppResult<u64> {
    let n = store.timers().count_documents(doc! {}).run()?;
    Ok(n)
}

/// Persist a timer by full replacement keyed on its identity.
pub fn replace_timer(store: &Store, id: &Bson, timer: &Document) -> AppResult<()> {
    store
        .timers()
        .replace_one(doc! { "_id": id.clone() }, timer.clone())
        .run()?;
    Ok(())
}

/// Fetch timers as typed models, oldest first.
pub fn fetch_timers(store: &Store, pending_only: bool) -> AppResult<Vec<Timer>> {
    let filter = if pending_only {
        pending_filter()
    } else {
        doc! {}
    };

    let cursor = store
        .typed_timers()
        .find(filter)
        .sort(doc! { "created_at": 1 })
        .run()?;

    let mut timers = Vec::new();
    for item in cursor {
        timers.push(item?);
    }
    Ok(timers)
}

/// Fetch every raw timer document, for backup dumps.
pub fn fetch_raw_timers(store: &Store) -> AppResult<Vec<Document>> {
    let cursor = store.timers().find(doc! {}).run()?;

    let mut docs = Vec::new();
    for item in cursor {
        docs.push(item?);
    }
    Ok(docs)
}

/// Earliest and latest `created_at` over the whole collection.
pub fn created_at_range(store: &Store) -> AppResult<(Option<bson::DateTime>, Option<bson::DateTime>)> {
    let first = store
        .timers()
        .find_one(doc! {})
        .sort(doc! { "created_at": 1 })
        .run()?;
    let last = store
        .timers()
        .find_one(doc! {})
        .sort(doc! { "created_at": -1 })
        .run()?;

    let pick = |d: Option<Document>| {
        d.and_then(|doc| match doc.get("created_at") {
            Some(Bson::DateTime(dt)) => Some(*dt),
            _ => None,
        })
    };

    Ok((pick(first), pick(last)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_filter_uses_bson_null() {
        let filter = pending_filter();
        assert_eq!(filter.get("actual_minutes"), Some(&Bson::Null));
        assert_eq!(filter.len(), 1);
    }
}
