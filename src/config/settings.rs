use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::template::SystemVariables;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppConfig,
}

/// Application identity exposed to templates via the {{app_name}} and
/// {{app_url}} system variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_url")]
    pub url: String,
}

fn default_app_name() -> String {
    "Analytics Hub".to_string()
}

fn default_app_url() -> String {
    "http://localhost:3000".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("app.name", default_app_name())?
            .set_default("app.url", default_app_url())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables: APP_NAME, APP_URL
            .add_source(Environment::default().separator("_").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Snapshot the system variables for one compilation, capturing the
    /// clock once.
    pub fn system_variables(&self) -> SystemVariables {
        SystemVariables::new(
            self.app.name.clone(),
            self.app.url.clone(),
            chrono::Utc::now(),
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            url: default_app_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.name, "Analytics Hub");
        assert_eq!(config.url, "http://localhost:3000");
    }

    #[test]
    fn test_system_variables_snapshot() {
        let settings = Settings {
            app: AppConfig {
                name: "Test Hub".to_string(),
                url: "https://test.example.com".to_string(),
            },
        };

        let system = settings.system_variables();
        let map = system.to_map();
        assert_eq!(map["{{app_name}}"], "Test Hub");
        assert_eq!(map["{{app_url}}"], "https://test.example.com");
        assert!(map.contains_key("{{current_year}}"));
        assert!(map.contains_key("{{current_date}}"));
    }
}
