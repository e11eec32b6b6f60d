use crate::error::{DocwatchError, Result};
use crate::model::parse_alert_lead_days;
use crate::view::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ALERT_DAYS: u32 = 30;

pub const CONFIG_KEYS: [&str; 2] = ["default-alert-days", "default-sort"];

/// Configuration for docwatch, stored as config.json next to the documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocwatchConfig {
    /// Alert lead time used when `add` is not given one
    #[serde(default = "default_alert_days")]
    pub default_alert_days: u32,

    /// Ordering used by `list` when no `--sort` is given
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_alert_days() -> u32 {
    DEFAULT_ALERT_DAYS
}

impl Default for DocwatchConfig {
    fn default() -> Self {
        Self {
            default_alert_days: DEFAULT_ALERT_DAYS,
            default_sort: SortKey::default(),
        }
    }
}

impl DocwatchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocwatchError::Io)?;
        let config: DocwatchConfig =
            serde_json::from_str(&content).map_err(DocwatchError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocwatchError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocwatchError::Serialization)?;
        fs::write(config_path, content).map_err(DocwatchError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-alert-days" => Some(self.default_alert_days.to_string()),
            "default-sort" => Some(self.default_sort.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-alert-days" => {
                self.default_alert_days = parse_alert_lead_days(value)?;
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(DocwatchError::Config)?;
            }
            other => {
                return Err(DocwatchError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
