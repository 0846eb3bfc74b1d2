//! # Draft Order Admin
//!
//! A server-rendered admin panel for Shopify draft orders. It lists draft
//! orders from the Admin GraphQL API with cursor pagination, renders an
//! editable copy of one order's line items, and saves the edited list back
//! through a single `draftOrderUpdate` mutation.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - Validated newtypes for credentials, domains and currency codes
//! - An offline [`Session`] built from an already-issued access token
//! - An async Admin API [`GraphqlClient`] with typed error reporting
//! - Draft order listing, detail and update operations in [`draft_orders`]
//! - Pure, copy-on-write line item editing in [`editor`]
//! - An `axum` router serving the HTML views in [`web`]
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_order_admin::{AccessToken, AdminConfig, ApiVersion, ShopDomain};
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("print-shop").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "print-shop.myshopify.com");
//! ```
//!
//! ## Serving the panel
//!
//! ```rust,ignore
//! use draft_order_admin::web::{self, AppState};
//!
//! let config = AdminConfig::from_env()?;
//! let state = AppState::from_config(&config);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! web::serve(listener, state, std::future::pending()).await?;
//! ```
//!
//! ## Editing line items
//!
//! ```rust
//! use draft_order_admin::editor::LineItems;
//! use draft_order_admin::CurrencyCode;
//!
//! let items = LineItems::default()
//!     .add_line_item(&CurrencyCode::default(), 1_700_000_000_000)
//!     .set_quantity(0, "3")
//!     .unwrap();
//!
//! assert_eq!(items.as_slice()[0].quantity, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is built once and injected via [`web::AppState`]
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Explicit editor states**: [`editor::EditorState`] names every transition
//! - **Thread-safe**: shared types are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod draft_orders;
pub mod editor;
pub mod error;
pub mod web;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use clients::{GraphqlClient, GraphqlError, HttpError};
pub use config::{
    AccessToken, AdminConfig, AdminConfigBuilder, ApiVersion, CurrencyCode, HostUrl, ShopDomain,
};
pub use draft_orders::{DraftOrderError, DraftOrderId, PageCursor};
pub use editor::{EditError, EditorSession};
pub use error::ConfigError;
