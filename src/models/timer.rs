use super::time_edit::TimeEdit;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A timer document from the `timers` collection.
///
/// Field renames follow the bson tags of the original tuna-timer models.
/// `minutes` is numeric in the store (int32, int64 or double depending on
/// which code path wrote it); serde coerces all three into f64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default, rename = "project_ext_name")]
    pub project_external_name: String,
    #[serde(default, rename = "project_ext_id")]
    pub project_external_id: String,
    #[serde(default)]
    pub team_user_id: String,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_hash: String,

    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub finished_at: Option<bson::DateTime>,
    #[serde(default)]
    pub deleted_at: Option<bson::DateTime>,

    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub actual_minutes: Option<i32>,
    #[serde(default)]
    pub edits: Option<Vec<TimeEdit>>,
}

impl Timer {
    pub fn id_str(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }

    pub fn created_at_str(&self) -> String {
        Self::fmt_date(self.created_at)
    }

    pub fn finished_at_str(&self) -> String {
        Self::fmt_date(self.finished_at)
    }

    pub fn edits_count(&self) -> usize {
        self.edits.as_ref().map(Vec::len).unwrap_or(0)
    }

    fn fmt_date(dt: Option<bson::DateTime>) -> String {
        dt.and_then(|d| d.try_to_rfc3339_string().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn deserializes_a_legacy_document() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "team_id": "T1234",
            "team_user_id": "U5678",
            "task_name": "write docs",
            "minutes": 25,
        };

        let timer: Timer = bson::from_document(doc).unwrap();
        assert_eq!(timer.task_name, "write docs");
        assert_eq!(timer.minutes, 25.0);
        assert_eq!(timer.actual_minutes, None);
        assert_eq!(timer.edits_count(), 0);
        assert_eq!(timer.finished_at_str(), "");
    }

    #[test]
    fn deserializes_a_backfilled_document() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "task_name": "deploy",
            "minutes": 40.7,
            "actual_minutes": 40,
            "edits": [],
        };

        let timer: Timer = bson::from_document(doc).unwrap();
        assert_eq!(timer.minutes, 40.7);
        assert_eq!(timer.actual_minutes, Some(40));
        assert_eq!(timer.edits_count(), 0);
        assert!(timer.edits.is_some());
    }

    #[test]
    fn id_str_is_the_hex_oid() {
        let id = ObjectId::new();
        let timer: Timer = bson::from_document(doc! { "_id": id, "minutes": 1 }).unwrap();
        assert_eq!(timer.id_str(), id.to_hex());
    }
}
