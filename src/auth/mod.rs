//! Authentication state for Admin API calls.
//!
//! The access token is issued outside this service (custom app install or a
//! completed OAuth handshake) and arrives through configuration. This module
//! only wraps it in a [`Session`] that the HTTP client reads its credentials
//! from.
//!
//! # Example
//!
//! ```rust
//! use draft_order_admin::{AccessToken, Session, ShopDomain};
//!
//! let session = Session::offline(
//!     ShopDomain::new("print-shop").unwrap(),
//!     AccessToken::new("shpat_123").unwrap(),
//! );
//!
//! assert_eq!(session.id, "offline_print-shop.myshopify.com");
//! assert_eq!(session.access_token.as_ref(), "shpat_123");
//! ```

pub mod session;

pub use session::Session;
