use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use fractrio_core::{EvalParams, Variant, MAX_ITER};

/// Startup configuration. Only window geometry, the step budget and the
/// variant selected at launch live here; the zoom and the variant chosen
/// during a session are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Per-pixel step budget. Must be >= 1.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default)]
    pub default_variant: Variant,
}

fn default_window_width() -> f32 {
    1280.0
}
fn default_window_height() -> f32 {
    720.0
}
fn default_max_iterations() -> u32 {
    MAX_ITER
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            max_iterations: default_max_iterations(),
            default_variant: Variant::default(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read preferences file: {e}");
                Self::default()
            }
        }
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// Validated evaluation parameters; an invalid budget falls back to the
    /// default with an error logged.
    pub fn eval_params(&self) -> EvalParams {
        EvalParams::new(self.max_iterations).unwrap_or_else(|e| {
            error!("Ignoring configured max_iterations: {e}");
            EvalParams::default()
        })
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let prefs: AppPreferences =
            serde_json::from_str(r#"{"default_variant":"perturbed"}"#).unwrap();
        assert_eq!(prefs.default_variant, Variant::Perturbed);
        assert_eq!(prefs.max_iterations, MAX_ITER);
        assert_eq!(prefs.window_width, 1280.0);
    }

    #[test]
    fn zero_budget_falls_back() {
        let prefs = AppPreferences {
            max_iterations: 0,
            ..AppPreferences::default()
        };
        assert_eq!(prefs.eval_params(), EvalParams::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join("fractrio_test_prefs");
        let path = dir.join("preferences.json");
        let prefs = AppPreferences {
            window_width: 900.0,
            max_iterations: 250,
            default_variant: Variant::BurningShip,
            ..AppPreferences::default()
        };
        prefs.save_to(&path);
        assert_eq!(AppPreferences::load_from(&path), prefs);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unparsable_file_gives_defaults() {
        let dir = std::env::temp_dir().join("fractrio_test_prefs_bad");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
