use log::Level;
use web_sys::window;

const API_BASE_URL_KEY: &str = "salescast_api_base_url";
const LOG_LEVEL_KEY: &str = "salescast_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the forecasting service (e.g., "http://localhost:8000")
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: common::DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_URL_KEY) {
                let url = url.trim().trim_end_matches('/');
                if !url.is_empty() {
                    settings.api_base_url = url.to_string();
                }
            }

            if let Ok(Some(level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = parse_level(&level).unwrap_or(settings.log_level);
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_default_points_at_local_service() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.log_level, Level::Info);
    }
}
