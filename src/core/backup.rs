use crate::db::queries;
use crate::db::store::Store;
use crate::errors::AppResult;
use bson::Bson;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Dump the timers collection to a JSON file (relaxed extended JSON),
    /// optionally gzip-compressed.
    pub fn backup(store: &Store, dest_file: &str, compress: bool) -> AppResult<()> {
        let dest = Path::new(dest_file);

        // 1️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // ⛔ 2️⃣ If destination file exists → ask confirmation
        if dest.exists() {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                dest.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(());
            }
            println!();
        }

        // 3️⃣ Dump documents as extended JSON
        let docs = queries::fetch_raw_timers(store)?;
        let count = docs.len();
        let values: Vec<serde_json::Value> = docs
            .into_iter()
            .map(|d| Bson::Document(d).into_relaxed_extjson())
            .collect();
        let json = serde_json::to_string_pretty(&values)?;

        fs::write(dest, &json)?;
        println!("✅ Backup created: {} ({} timers)", dest.display(), count);

        // 4️⃣ Optional compression
        if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }
        }

        Ok(())
    }
}

/// Gzip the dump next to it, returning the new path (`<file>.gz`).
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let mut gz_path = path.as_os_str().to_owned();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);

    let content = fs::read(path)?;
    let file = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());

    use std::io::Write;
    encoder.write_all(&content)?;
    encoder.finish()?;

    println!("✅ Compressed backup: {}", gz_path.display());
    Ok(gz_path)
}
