//! Application settings

use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured chat server
pub const SERVER_URL_ENV: &str = "BOARD_SERVER_URL";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Ru]
    }
}

/// Grid display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.5,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    #[serde(default)]
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::default(),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the chat server
    pub server_url: String,
    pub grid: GridSettings,
    pub ui: UiSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            grid: GridSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "insightboard", "insightboard")
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = project_dirs() {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("Ignoring malformed {}: {e}", config_path.display()),
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = project_dirs() {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    if let Err(e) = std::fs::write(&config_path, json) {
                        tracing::warn!("Failed to save settings: {e}");
                    }
                }
            }
        }
    }

    /// Server URL after applying the environment override, without a
    /// trailing slash
    pub fn resolved_server_url(&self) -> String {
        let env = std::env::var(SERVER_URL_ENV).ok();
        resolve_url(env.as_deref(), &self.server_url)
    }
}

fn resolve_url(env: Option<&str>, configured: &str) -> String {
    let url = env
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(configured);
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.server_url, "http://localhost:3001");
        assert_eq!(s.ui.language, Language::En);
        assert!(s.grid.visible);
    }

    #[test]
    fn test_missing_language_defaults() {
        let json = r#"{
            "server_url": "http://example.test",
            "grid": { "visible": false, "opacity": 0.2 },
            "ui": { "font_size": 16.0 }
        }"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.ui.language, Language::En);
        assert!(!s.grid.visible);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(resolve_url(None, "http://a:1/"), "http://a:1");
        assert_eq!(resolve_url(Some("http://b:2"), "http://a:1"), "http://b:2");
        assert_eq!(resolve_url(Some("  "), "http://a:1"), "http://a:1");
    }
}
