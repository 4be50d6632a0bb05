use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use screener_core::models::language::Language;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// What to do with a submission that leaves questions unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletenessPolicy {
    /// Reject it with the list of unanswered questions.
    #[default]
    Strict,
    /// Score what was answered; unanswered questions contribute nothing.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub completeness: CompletenessPolicy,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
    /// IANA zone name for export dates. `None` uses the system zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_language: Language::default(),
            completeness: CompletenessPolicy::default(),
            log_level: default_log_level(),
            json_logs: false,
            time_zone: None,
        }
    }
}

impl ScreenerConfig {
    /// The zone export dates are rendered in.
    pub fn resolve_time_zone(&self) -> Result<TimeZone, jiff::Error> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name),
            None => Ok(TimeZone::system()),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("screener"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from the platform config directory, or the defaults if
/// none has been saved yet.
pub fn load_config() -> eyre::Result<ScreenerConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ScreenerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ScreenerConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreenerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: the language menu stored its display name under "language";
    // resolve it to a tag under "default_language", and pin strict scoring.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(legacy) = obj.remove("language") {
            let name = legacy
                .as_str()
                .ok_or_else(|| eyre::eyre!("config field 'language' is not a string"))?;
            let language = Language::from_tag(name)?;
            obj.entry("default_language")
                .or_insert(serde_json::to_value(language)?);
        }
        obj.entry("completeness")
            .or_insert(serde_json::to_value(CompletenessPolicy::Strict)?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (default_language, completeness)");
    }

    Ok(json)
}

pub fn save_config(config: &ScreenerConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    save_config_to(&dir.join("config.json"), config)
}

pub fn save_config_to(path: &Path, config: &ScreenerConfig) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
