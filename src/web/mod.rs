//! HTTP surface of the admin panel.
//!
//! | Method | Path         | Handler                    |
//! |--------|--------------|----------------------------|
//! | GET    | `/`          | redirect to `/app`         |
//! | GET    | `/app`       | draft order list           |
//! | GET    | `/app/draft` | line item editor           |
//! | POST   | `/app/draft` | apply edits or save        |
//! | GET    | `/healthz`   | liveness check             |
//!
//! # Example
//!
//! ```rust,ignore
//! use draft_order_admin::web::{self, AppState};
//!
//! let state = AppState::from_config(&config);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! web::serve(listener, state, async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

mod draft;
mod errors;
mod list;
pub mod render;
mod trace;

use std::future::Future;
use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::auth::Session;
use crate::clients::GraphqlClient;
use crate::config::{AdminConfig, CurrencyCode};

pub use draft::FormIntent;
pub use errors::AppError;

/// Shared handler state, built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Admin API client shared by every request.
    pub client: Arc<GraphqlClient>,
    /// Currency for new line items and missing prices.
    pub default_currency: CurrencyCode,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
};

impl AppState {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: GraphqlClient, default_currency: CurrencyCode) -> Self {
        Self {
            client: Arc::new(client),
            default_currency,
        }
    }

    /// Builds the client from an offline session for the configured shop.
    #[must_use]
    pub fn from_config(config: &AdminConfig) -> Self {
        let session = Session::from_config(config);
        Self::new(
            GraphqlClient::new(&session, Some(config)),
            config.default_currency().clone(),
        )
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/app") }))
        .route("/app", get(list::list_draft_orders))
        .route(
            "/app/draft",
            get(draft::show_draft_order).post(draft::submit_draft_order),
        )
        .route("/healthz", get(|| async { "ok" }))
        .layer(middleware::from_fn(trace::trace_requests))
        .with_state(state)
}

/// Serves the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
