//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a value that made
//! it into an [`AdminConfig`](super::AdminConfig) is known to be well formed.

use crate::error::ConfigError;
use std::fmt;

/// A Shopify Admin API access token.
///
/// The token was issued to the app out of band (custom app install or a
/// completed OAuth flow); this crate only forwards it. The `Debug`
/// implementation masks the value so it never lands in logs.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Shopify shop domain, normalized to `name.myshopify.com`.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::ShopDomain;
///
/// let domain = ShopDomain::new("Print-Shop").unwrap();
/// assert_eq!(domain.as_ref(), "print-shop.myshopify.com");
/// assert_eq!(domain.shop_name(), "print-shop");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty,
    /// has a foreign suffix, or contains characters Shopify does not allow.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let shop_name = match domain.strip_suffix(Self::SUFFIX) {
            Some(name) => name.to_string(),
            None if domain.contains('.') => {
                return Err(ConfigError::InvalidShopDomain { domain });
            }
            None => domain,
        };

        let valid = !shop_name.is_empty()
            && !shop_name.starts_with('-')
            && !shop_name.ends_with('-')
            && shop_name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        let full_domain = format!("{shop_name}{}", Self::SUFFIX);
        if !valid {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

/// A validated URL used to override the Admin API origin.
///
/// Used when the API is reached through a proxy or, in tests, a local fake
/// server. Only the origin (scheme, host and port) is used for requests.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:4010/ignored/path").unwrap();
/// assert_eq!(url.origin(), "http://127.0.0.1:4010");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme, a
    /// non-alphabetic scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        let host_end = url[host_start..authority_end]
            .find(':')
            .map_or(authority_end, |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self { url, authority_end })
    }

    /// Returns `scheme://host[:port]`, without any path or query.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A three-letter currency code, stored upper-case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new validated currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurrencyCode`] unless the code is
    /// exactly three ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrencyCode { code });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("PLN".to_string())
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_blank() {
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat_secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AccessToken(*****)");
        assert!(!debug.contains("shpat_secret"));
    }

    #[test]
    fn test_shop_domain_normalizes_short_format() {
        let domain = ShopDomain::new("my-store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_accepts_full_format() {
        let domain = ShopDomain::new("MY-STORE.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new("my store").is_err());
        assert!(ShopDomain::new("my_store").is_err());
        assert!(ShopDomain::new("-my-store").is_err());
        assert!(ShopDomain::new("my-store-").is_err());
        assert!(ShopDomain::new("my-store.example.com").is_err());
        assert!(ShopDomain::new(".myshopify.com").is_err());
    }

    #[test]
    fn test_host_url_splits_origin_from_path() {
        let url = HostUrl::new("https://proxy.example.com/admin").unwrap();
        assert_eq!(url.origin(), "https://proxy.example.com");

        let url = HostUrl::new("http://localhost:3000?x=1").unwrap();
        assert_eq!(url.origin(), "http://localhost:3000");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("http://:8080").is_err());
    }

    #[test]
    fn test_currency_code_is_uppercased() {
        assert_eq!(CurrencyCode::new("eur").unwrap().as_ref(), "EUR");
        assert_eq!(CurrencyCode::default().as_ref(), "PLN");
    }

    #[test]
    fn test_currency_code_rejects_wrong_shape() {
        assert!(CurrencyCode::new("EURO").is_err());
        assert!(CurrencyCode::new("E1R").is_err());
        assert!(CurrencyCode::new("").is_err());
    }
}
