use crate::errors::AppResult;
use crate::models::timer::Timer;
use std::path::Path;

/// Write timers as pretty-printed JSON to the given file.
pub fn write_json(path: &Path, timers: &[Timer]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(timers)?;
    std::fs::write(path, json)?;
    Ok(())
}
