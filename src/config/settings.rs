//! User settings for BillTrack
//!
//! Manages user preferences persisted to config.json. Every field carries a
//! serde default so older config files keep loading after upgrades.

use serde::{Deserialize, Serialize};

use super::paths::BillTrackPaths;
use crate::error::{BillTrackError, BillTrackResult};
use crate::models::ReminderFrequency;

/// User settings for BillTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reminder frequency applied when a bill doesn't specify one
    #[serde(default)]
    pub default_reminder_frequency: ReminderFrequency,

    /// Whether initial setup (demo data seeding) has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_reminder_frequency: ReminderFrequency::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &BillTrackPaths) -> BillTrackResult<Self> {
        let path = paths.settings_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            BillTrackError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            BillTrackError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BillTrackPaths) -> BillTrackResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BillTrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BillTrackError::Config(format!("Failed to write settings: {}", e))
        })
    }
}
