use crate::errors::AppResult;
use crate::models::timer::Timer;
use csv::Writer;
use std::path::Path;

/// Write timers as CSV to the given file.
pub fn write_csv(path: &Path, timers: &[Timer]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "task_name",
        "team_user_id",
        "project",
        "created_at",
        "finished_at",
        "minutes",
        "actual_minutes",
        "edits",
    ])?;

    for timer in timers {
        wtr.write_record(&[
            timer.id_str(),
            timer.task_name.clone(),
            timer.team_user_id.clone(),
            timer.project_external_name.clone(),
            timer.created_at_str(),
            timer.finished_at_str(),
            timer.minutes.to_string(),
            timer
                .actual_minutes
                .map(|m| m.to_string())
                .unwrap_or_default(),
            timer.edits_count().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
