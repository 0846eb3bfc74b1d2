//! The [`Session`] type.

use crate::config::{AccessToken, AdminConfig, ShopDomain};

/// An authenticated connection to one shop's Admin API.
///
/// Sessions are immutable once created. The service builds a single offline
/// session at startup and shares it through the GraphQL client. Offline
/// tokens do not expire.
#[derive(Clone, Debug)]
pub struct Session {
    /// Unique identifier for this session.
    pub id: String,

    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token sent as `X-Shopify-Access-Token`.
    pub access_token: AccessToken,
}

impl Session {
    /// Creates an offline session, the kind issued to custom apps.
    #[must_use]
    pub fn offline(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self {
            id: Self::offline_id(&shop),
            shop,
            access_token,
        }
    }

    /// Creates the offline session described by `config`.
    #[must_use]
    pub fn from_config(config: &AdminConfig) -> Self {
        Self::offline(config.shop().clone(), config.access_token().clone())
    }

    /// Returns the conventional id for a shop's offline session.
    #[must_use]
    pub fn offline_id(shop: &ShopDomain) -> String {
        format!("offline_{}", shop.as_ref())
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
