use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ViewerError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL shared by both endpoints, without trailing slash
    pub base_url: String,
    /// Path of the key-issuance endpoint (POST)
    pub keys_path: String,
    /// Path of the body list endpoint (GET)
    pub bodies_path: String,
    /// Header carrying the API key on the body request
    pub key_header: String,
    /// Per-request timeout in seconds, 0 disables it
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Append every API call to `api_log_path`
    pub api_logging: bool,
    pub api_log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Scale applied to an item under the pointer
    pub highlight_scale: f64,
    /// Glow (box shadow) applied to an item under the pointer
    pub highlight_glow: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::API_BASE_URL.to_string(),
            keys_path: "/keys".to_string(),
            bodies_path: "/bodies".to_string(),
            key_header: crate::API_KEY_HEADER.to_string(),
            request_timeout_seconds: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            api_logging: false,
            api_log_path: "api_debug.log".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_scale: 1.2,
            highlight_glow: "0 0 25px 15px rgba(255, 255, 255, 0.5)".to_string(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn keys_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.keys_path)
    }

    pub fn bodies_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.bodies_path)
    }
}

impl ViewerConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self> {
        if Path::new(config_path).exists() {
            info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: ViewerConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            info!("📋 Creating default configuration at {}", config_path);
            let config = ViewerConfig::default();
            config.save(config_path)?;
            info!("💡 Edit {} to point at another bodies API", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base = &self.api.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ViewerError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {:?}",
                base
            )));
        }
        for (field, path) in [("keys_path", &self.api.keys_path), ("bodies_path", &self.api.bodies_path)] {
            if !path.starts_with('/') {
                return Err(ViewerError::InvalidConfig(format!("{} must start with '/'", field)));
            }
        }
        if self.api.key_header.trim().is_empty() {
            return Err(ViewerError::InvalidConfig("key_header must not be empty".to_string()));
        }
        if self.display.highlight_scale <= 0.0 {
            return Err(ViewerError::InvalidConfig("highlight_scale must be greater than 0".to_string()));
        }
        if self.logging.api_logging && self.logging.api_log_path.trim().is_empty() {
            return Err(ViewerError::InvalidConfig(
                "api_log_path must be set when api_logging is enabled".to_string(),
            ));
        }

        info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        info!("📋 Configuration Summary:");
        info!("   🌐 Keys endpoint: {}", self.api.keys_url());
        info!("   🪐 Bodies endpoint: {}", self.api.bodies_url());
        info!("   🔑 Key header: {}", self.api.key_header);
        if self.api.request_timeout_seconds > 0 {
            info!("   ⏰ Request timeout: {}s", self.api.request_timeout_seconds);
        }
        if self.logging.api_logging {
            info!("   📝 API log: {}", self.logging.api_log_path);
        }
    }
}
