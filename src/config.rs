//! Server configuration.
//!
//! Settings come from the client's `initializationOptions` when it
//! sends any, otherwise from an optional `symtags.toml` at the
//! workspace root, otherwise from defaults matching Symfony's
//! conventional layout.

use std::path::Path;

use serde::Deserialize;

/// Name of the optional per-workspace config file.
pub const CONFIG_FILE: &str = "symtags.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directories (relative to the workspace root) scanned for YAML
    /// service files when building the service index.
    pub service_dirs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // `config/` for current Symfony, `app/config/` for legacy projects.
            service_dirs: vec!["config".to_string(), "app/config".to_string()],
        }
    }
}

impl Settings {
    /// Parse settings from LSP `initializationOptions`. Returns `None`
    /// when the options are missing or not settings-shaped, so the
    /// caller can fall through to the config file.
    pub fn from_initialization_options(options: serde_json::Value) -> Option<Settings> {
        serde_json::from_value(options).ok()
    }

    /// Load settings from `symtags.toml` at the workspace root,
    /// falling back to defaults if the file is absent or malformed.
    pub fn load(workspace_root: &Path) -> Settings {
        let path = workspace_root.join(CONFIG_FILE);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Settings::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }
}
