//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_AUDIT_BUFFER: usize = 200;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Capacity of the audit event queue
    pub audit_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "registrar".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            audit_buffer: DEFAULT_AUDIT_BUFFER,
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            audit_buffer: lookup("AUDIT_BUFFER")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.audit_buffer),
        }
    }

    /// Lấy địa chỉ bind đầy đủ
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
