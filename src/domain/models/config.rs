use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Main configuration structure for breedcache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static breed table: breed name -> ordered sub-breed names
    ///
    /// An empty table is not serialized, so a loader seeded from defaults
    /// lets the configured table replace the sample one as a whole.
    #[serde(default = "default_breeds", skip_serializing_if = "BTreeMap::is_empty")]
    pub breeds: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            breeds: default_breeds(),
        }
    }
}

fn default_breeds() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        breed_entry("akita", &[]),
        breed_entry(
            "hound",
            &["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"],
        ),
        breed_entry("retriever", &["chesapeake", "curly", "flatcoated", "golden"]),
        breed_entry("terrier", &["border", "cairn", "fox", "irish", "scottish", "welsh"]),
    ])
}

fn breed_entry(breed: &str, sub_breeds: &[&str]) -> (String, Vec<String>) {
    (
        breed.to_string(),
        sub_breeds.iter().map(|s| (*s).to_string()).collect(),
    )
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a log file (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
