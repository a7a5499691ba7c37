//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the homeFix.lk
//! booking engine. It provides concrete implementations for the two
//! collaborator interfaces the core consumes:
//!
//! - **Database**: MySQL booking store using SQLx, with a transactional
//!   conditional insert guarding the slot exclusivity rules
//! - **Notify**: WhatsApp notification sinks (deep link and Cloud API)
//!   plus a mock for development

// Re-export core error types for convenience
pub use hf_core::errors::*;

/// Database module - MySQL booking store using SQLx
pub mod database;

/// Notification module - WhatsApp sinks and the development mock
pub mod notify;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles database connection settings and notification channel
    //! credentials, loaded from the environment.

    use serde::{Deserialize, Serialize};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Notification channel configuration
        pub notify: NotifyConfig,
    }

    /// Database connection configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct DatabaseConfig {
        /// MySQL connection URL
        pub url: String,
        /// Maximum pool connections
        pub max_connections: u32,
        /// Connection acquire timeout in seconds
        pub connect_timeout_secs: u64,
    }

    /// Notification channel configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct NotifyConfig {
        /// Channel provider ("wa-link", "whatsapp-api", "mock")
        pub provider: String,
        /// Business WhatsApp number, digits only (e.g. 94769363695)
        pub business_number: String,
    }

    impl Default for DatabaseConfig {
        fn default() -> Self {
            Self {
                url: "mysql://root@localhost/homefix".to_string(),
                max_connections: 10,
                connect_timeout_secs: 30,
            }
        }
    }

    impl DatabaseConfig {
        /// Load from environment variables, falling back to defaults
        pub fn from_env() -> Self {
            let defaults = Self::default();
            Self {
                url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                connect_timeout_secs: std::env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.connect_timeout_secs),
            }
        }
    }

    impl Default for NotifyConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                business_number: "94769363695".to_string(),
            }
        }
    }

    impl NotifyConfig {
        /// Load from environment variables, falling back to defaults
        pub fn from_env() -> Self {
            let defaults = Self::default();
            Self {
                provider: std::env::var("NOTIFY_PROVIDER").unwrap_or(defaults.provider),
                business_number: std::env::var("NOTIFY_BUSINESS_NUMBER")
                    .unwrap_or(defaults.business_number),
            }
        }
    }

    impl InfrastructureConfig {
        /// Load the full infrastructure configuration from the environment
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok(); // Load .env file if present
            Self {
                database: DatabaseConfig::from_env(),
                notify: NotifyConfig::from_env(),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification channel error
    #[error("Notification error: {0}")]
    Notify(String),
}
