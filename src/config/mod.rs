use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_mongo_uri")]
    pub mongo_uri: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "tuna_timer_dev".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: default_mongo_uri(),
            database: default_database(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tuna-backfill")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tuna-backfill")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tuna-backfill.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(custom_uri: Option<String>, custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            mongo_uri: custom_uri.unwrap_or_else(default_mongo_uri),
            database: custom_db.unwrap_or_else(default_database),
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ MongoDB URI: {}", config.mongo_uri);
        println!("✅ Database:    {}", config.database);

        Ok(())
    }

    /// Report config keys missing from the file on disk (they fall back to defaults).
    pub fn missing_keys() -> io::Result<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| io::Error::other(e.to_string()))?;

        let mut missing = Vec::new();
        for key in ["mongo_uri", "database"] {
            if value.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dev_instance() {
        let cfg = Config::default();
        assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(cfg.database, "tuna_timer_dev");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: other_db\n").unwrap();
        assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(cfg.database, "other_db");
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.mongo_uri, cfg.mongo_uri);
        assert_eq!(back.database, cfg.database);
    }
}
