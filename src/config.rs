use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub status_message_seconds: u32,
    pub ui_config: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://api.bloodlink.org".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            status_message_seconds: 3,
            ui_config: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub chart_bar_max_height_px: u32,
    pub table_short_id_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            chart_bar_max_height_px: 220,
            table_short_id_chars: 6,
        }
    }
}
