//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! console service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the console service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Locations of the managed config files.
    pub files: ConfigFilesConfig,

    /// Subscriber store settings.
    pub database: DatabaseConfig,

    /// Credentials substituted when a create omits them.
    pub subscriber_defaults: SubscriberDefaultsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request hardening settings.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3001".to_string(),
        }
    }
}

/// Locations of the two flat config files the service edits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigFilesConfig {
    /// Path to the gNB configuration carrying the PLMN fields.
    pub plmn_path: String,

    /// Path to the SIB8 warning-message template.
    pub sib8_path: String,
}

impl Default for ConfigFilesConfig {
    fn default() -> Self {
        Self {
            plmn_path: "config/gnb.conf".to_string(),
            sib8_path: "config/sib8.conf".to_string(),
        }
    }
}

/// Subscriber store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "config/subscribers.db".to_string(),
        }
    }
}

/// Default credential pair for subscribers created without keys.
///
/// Shared by every defaulted subscriber. Override per deployment rather
/// than relying on the built-in lab values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SubscriberDefaultsConfig {
    /// Default permanent key (K), 32 hex characters.
    pub permanent_key: String,

    /// Default OPc, 32 hex characters.
    pub opc_key: String,
}

impl Default for SubscriberDefaultsConfig {
    fn default() -> Self {
        Self {
            permanent_key: "5686e601f3a1942d4c5cd262ba6b4b20".to_string(),
            opc_key: "aeb1cabd8ed7a09b48d17eb3d8af172c".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
