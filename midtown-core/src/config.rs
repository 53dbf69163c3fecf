//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "app": { "defaultRows": 12, "maxRows": 24, ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: i64 = 12;
pub const MAX_ROWS: i64 = 24;
/// Hard ceiling for `maxRows`, whatever settings.json or the environment say
pub const MAX_ROWS_LIMIT: i64 = 100;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_rows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_rows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_player_one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_player_two: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// MidTown configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub default_rows: i64,
    pub max_rows: i64,
    pub default_player_one: Option<String>,
    pub default_player_two: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rows: DEFAULT_ROWS,
            max_rows: MAX_ROWS,
            default_player_one: None,
            default_player_two: None,
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// The row limit can be overridden with MIDTOWN_MAX_ROWS and never
    /// exceeds MAX_ROWS_LIMIT. A missing or unreadable settings file falls
    /// back to defaults.
    pub fn load(app_dir: &Path) -> Result<Self> {
        let raw = read_settings(app_dir)?;

        let max_rows = max_rows_override(
            raw.app.max_rows.unwrap_or(MAX_ROWS),
            std::env::var("MIDTOWN_MAX_ROWS").ok().as_deref(),
        );
        let default_rows = raw.app.default_rows.unwrap_or(DEFAULT_ROWS).clamp(1, max_rows);

        Ok(Self {
            default_rows,
            max_rows,
            default_player_one: raw.app.default_player_one,
            default_player_two: raw.app.default_player_two,
        })
    }

    /// Save the player names to settings.json
    ///
    /// Row settings are left as written (the loaded values may come from
    /// MIDTOWN_MAX_ROWS) and keys the app doesn't manage are preserved.
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");
        let mut settings = read_settings(app_dir)?;

        settings.app.default_player_one = self.default_player_one.clone();
        settings.app.default_player_two = self.default_player_two.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }
}

/// Apply the MIDTOWN_MAX_ROWS value, ignoring anything that isn't a number
fn max_rows_override(configured: i64, env_value: Option<&str>) -> i64 {
    env_value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(configured)
        .clamp(1, MAX_ROWS_LIMIT)
}

fn read_settings(app_dir: &Path) -> Result<SettingsFile> {
    let settings_path = app_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_rows, DEFAULT_ROWS);
        assert!(config.default_player_one.is_none());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_rows, DEFAULT_ROWS);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"theme":"dark","defaultRows":5},"window":{"width":1100}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_rows, 5);
        config.default_player_one = Some("Ada".to_string());
        config.save(dir.path()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(raw["app"]["theme"], "dark");
        assert_eq!(raw["app"]["defaultRows"], 5);
        assert_eq!(raw["app"]["defaultPlayerOne"], "Ada");
        assert_eq!(raw["window"]["width"], 1100);
    }

    #[test]
    fn test_save_leaves_row_limit_alone() {
        let dir = tempdir().unwrap();
        let config = Config {
            max_rows: 60,
            default_player_two: Some("Grace".to_string()),
            ..Config::default()
        };
        config.save(dir.path()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert!(raw["app"].get("maxRows").is_none());
        assert_eq!(raw["app"]["defaultPlayerTwo"], "Grace");
    }

    #[test]
    fn test_max_rows_env_override() {
        assert_eq!(max_rows_override(24, None), 24);
        assert_eq!(max_rows_override(24, Some(" 50 ")), 50);
        assert_eq!(max_rows_override(24, Some("lots")), 24);
        assert_eq!(max_rows_override(24, Some("0")), 1);
    }

    #[test]
    fn test_max_rows_capped_at_limit() {
        assert_eq!(max_rows_override(24, Some("4000000000")), MAX_ROWS_LIMIT);
        assert_eq!(max_rows_override(i64::MAX, None), MAX_ROWS_LIMIT);

        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"maxRows":9223372036854775807,"defaultRows":500}}"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.max_rows, MAX_ROWS_LIMIT);
        assert_eq!(config.default_rows, MAX_ROWS_LIMIT);
    }

    #[test]
    fn test_default_rows_clamped_to_max() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"defaultRows":40,"maxRows":10}}"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.max_rows, 10);
        assert_eq!(config.default_rows, 10);
    }
}
