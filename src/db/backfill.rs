//! One-time backfill of `actual_minutes` and `edits` on timer documents.
//!
//! Timers created before time edits existed carry only `minutes`. For each
//! timer where `actual_minutes` is unset, this sets `actual_minutes` to the
//! integer truncation of `minutes` (stored as int32) and `edits` to an empty
//! array, then replaces the document by `_id`. Re-running matches nothing.

use crate::db::queries;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use bson::{Bson, Document};

#[derive(Debug, Default, Clone, Copy)]
pub struct BackfillReport {
    pub matched: u64,
    pub updated: u64,
    pub skipped: u64,
}

/// Truncate a numeric BSON value to int32, the way the original
/// mongo-shell script applied `NumberInt(timer.minutes)`.
pub fn truncated_minutes(value: &Bson) -> Option<i32> {
    match value {
        Bson::Int32(v) => Some(*v),
        Bson::Int64(v) => i32::try_from(*v).ok(),
        Bson::Double(v) if v.is_finite() => Some(v.trunc() as i32),
        _ => None,
    }
}

/// Apply the in-memory mutation to a single timer document.
/// Returns the backfilled value, or None when `minutes` is unusable.
pub fn apply_backfill(timer: &mut Document) -> Option<i32> {
    let minutes = truncated_minutes(timer.get("minutes").unwrap_or(&Bson::Null))?;
    timer.insert("actual_minutes", Bson::Int32(minutes));
    timer.insert("edits", Bson::Array(Vec::new()));
    Some(minutes)
}

/// Run the backfill pass: sequential, one replace per document,
/// not transactional with respect to concurrent writers.
pub fn run_backfill(store: &Store, dry_run: bool) -> AppResult<BackfillReport> {
    let mut report = BackfillReport::default();

    for item in queries::find_pending(store)? {
        let mut timer = item?;
        report.matched += 1;

        let id = match timer.get("_id") {
            Some(id) => id.clone(),
            None => {
                warning("skipping a timer without _id");
                report.skipped += 1;
                continue;
            }
        };

        match apply_backfill(&mut timer) {
            Some(_) => {
                if !dry_run {
                    queries::replace_timer(store, &id, &timer)?;
                }
                report.updated += 1;
            }
            None => {
                warning(format!(
                    "skipping timer {}: minutes is missing or not numeric",
                    id
                ));
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn truncates_doubles_towards_zero() {
        assert_eq!(truncated_minutes(&Bson::Double(14.9)), Some(14));
        assert_eq!(truncated_minutes(&Bson::Double(15.0)), Some(15));
        assert_eq!(truncated_minutes(&Bson::Double(0.4)), Some(0));
    }

    #[test]
    fn passes_integers_through() {
        assert_eq!(truncated_minutes(&Bson::Int32(42)), Some(42));
        assert_eq!(truncated_minutes(&Bson::Int64(42)), Some(42));
    }

    #[test]
    fn rejects_non_numeric_minutes() {
        assert_eq!(truncated_minutes(&Bson::Null), None);
        assert_eq!(truncated_minutes(&Bson::String("20".into())), None);
        assert_eq!(truncated_minutes(&Bson::Double(f64::NAN)), None);
        assert_eq!(truncated_minutes(&Bson::Int64(i64::MAX)), None);
    }

    #[test]
    fn apply_backfill_sets_both_fields() {
        let mut timer = doc! {
            "task_name": "deploy",
            "minutes": 20.5,
        };

        assert_eq!(apply_backfill(&mut timer), Some(20));
        assert_eq!(timer.get("actual_minutes"), Some(&Bson::Int32(20)));
        assert_eq!(timer.get("edits"), Some(&Bson::Array(vec![])));
        // untouched
        assert_eq!(timer.get_str("task_name").unwrap(), "deploy");
        assert_eq!(timer.get("minutes"), Some(&Bson::Double(20.5)));
    }

    #[test]
    fn apply_backfill_leaves_doc_alone_when_minutes_unusable() {
        let mut timer = doc! { "task_name": "deploy" };

        assert_eq!(apply_backfill(&mut timer), None);
        assert!(!timer.contains_key("actual_minutes"));
        assert!(!timer.contains_key("edits"));
    }
}
