//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured process fails at startup instead of on the first request.
//!
//! # Example
//!
//! ```rust
//! use draft_order_admin::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AdminConfig`](crate::AdminConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a Shopify Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2025-10') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field (or environment variable).
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code '{code}'. Expected a 3-letter ISO 4217 code (e.g., 'PLN').")]
    InvalidCurrencyCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// Bind address does not parse as `host:port`.
    #[error("Invalid bind address '{addr}'. Expected 'ip:port' (e.g., '0.0.0.0:8080').")]
    InvalidBindAddress {
        /// The invalid address that was provided.
        addr: String,
    },
}
