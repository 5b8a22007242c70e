use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_work_duration_to_minutes;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Expected work per day, e.g. "8h", "7h30" or plain minutes.
    #[serde(default = "default_expected_work")]
    pub expected_work_duration: String,
    /// Dates (YYYY-MM-DD) on which every punch is rejected.
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_expected_work() -> String {
    "8h".to_string()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            expected_work_duration: default_expected_work(),
            holidays: Vec::new(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchbank")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchbank")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchbank.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchbank.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Expected minutes per day, parsed from the policy string.
    pub fn expected_minutes(&self) -> AppResult<i64> {
        parse_work_duration_to_minutes(&self.expected_work_duration)
    }

    /// Holiday strings parsed into calendar dates.
    pub fn holiday_dates(&self) -> AppResult<BTreeSet<NaiveDate>> {
        let mut out = BTreeSet::new();
        for s in &self.holidays {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.clone()))?;
            out.insert(d);
        }
        Ok(out)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode to keep the user's file intact)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(())
    }
}
