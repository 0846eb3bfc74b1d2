//! Configuration for the draft order admin service.
//!
//! # Overview
//!
//! - [`AdminConfig`]: validated settings shared by the API client and the web layer
//! - [`AdminConfigBuilder`]: builder for [`AdminConfig`], also seeded from the environment
//! - [`AccessToken`], [`ShopDomain`], [`HostUrl`], [`CurrencyCode`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version to call
//!
//! # Environment
//!
//! | Variable                   | Default          |
//! |----------------------------|------------------|
//! | `SHOPIFY_SHOP`             | required         |
//! | `SHOPIFY_ACCESS_TOKEN`     | required         |
//! | `SHOPIFY_API_VERSION`      | latest stable    |
//! | `SHOPIFY_API_HOST`         | `https://{shop}` |
//! | `SHOPIFY_DEFAULT_CURRENCY` | `PLN`            |
//! | `SHOPIFY_USER_AGENT_PREFIX`| none             |
//! | `BIND_ADDR`                | `0.0.0.0:8080`   |
//! | `LOG_JSON`                 | `false`          |
//!
//! # Example
//!
//! ```rust
//! use draft_order_admin::{AccessToken, AdminConfig, ShopDomain};
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("print-shop").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.bind_addr().port(), 8080);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, CurrencyCode, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

/// Settings for one shop's admin panel.
///
/// `AdminConfig` is cheap to clone and `Send + Sync`. It is built once at
/// startup and handed to [`AppState`](crate::web::AppState).
#[derive(Clone, Debug)]
pub struct AdminConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    default_currency: CurrencyCode,
    bind_addr: SocketAddr,
    log_json: bool,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::default()
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AdminConfigBuilder::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        AdminConfigBuilder::from_env()?.build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API origin override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the currency used for new line items and blank prices.
    #[must_use]
    pub const fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// Returns the HTTP listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns whether logs are emitted as JSON lines.
    #[must_use]
    pub const fn log_json(&self) -> bool {
        self.log_json
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for [`AdminConfig`].
///
/// `shop` and `access_token` are required. Everything else has a default.
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    default_currency: Option<CurrencyCode>,
    bind_addr: Option<SocketAddr>,
    log_json: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Seeds a builder from the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Seeds a builder from an arbitrary variable lookup.
    ///
    /// Unset or blank variables leave the corresponding field unset; set
    /// variables must be valid.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::default();
        if let Some(shop) = var("SHOPIFY_SHOP") {
            builder = builder.shop(ShopDomain::new(shop)?);
        }
        if let Some(token) = var("SHOPIFY_ACCESS_TOKEN") {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(version) = var("SHOPIFY_API_VERSION") {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = var("SHOPIFY_API_HOST") {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        if let Some(currency) = var("SHOPIFY_DEFAULT_CURRENCY") {
            builder = builder.default_currency(CurrencyCode::new(currency)?);
        }
        if let Some(prefix) = var("SHOPIFY_USER_AGENT_PREFIX") {
            builder = builder.user_agent_prefix(prefix.trim());
        }
        if let Some(addr) = var("BIND_ADDR") {
            let parsed = addr
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddress { addr })?;
            builder = builder.bind_addr(parsed);
        }
        if let Some(flag) = var("LOG_JSON") {
            builder = builder.log_json(matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
        Ok(builder)
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes Admin API calls to `host` instead of the shop's own domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the default currency.
    #[must_use]
    pub fn default_currency(mut self, currency: CurrencyCode) -> Self {
        self.default_currency = Some(currency);
        self
    }

    /// Sets the listen address.
    #[must_use]
    pub const fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Switches JSON log output on or off.
    #[must_use]
    pub const fn log_json(mut self, enabled: bool) -> Self {
        self.log_json = Some(enabled);
        self
    }

    /// Sets the user agent prefix for outbound requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the shop or the
    /// access token is not set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let shop = self.shop.ok_or(ConfigError::MissingRequiredField {
            field: "SHOPIFY_SHOP",
        })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "SHOPIFY_ACCESS_TOKEN",
        })?;

        Ok(AdminConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            default_currency: self.default_currency.unwrap_or_default(),
            bind_addr: self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR),
            log_json: self.log_json.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
