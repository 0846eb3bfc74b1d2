//! Draft order operations against the Admin GraphQL API.
//!
//! - [`list_draft_orders`]: one page of summaries, newest id first
//! - [`fetch_draft_order`]: one order with its first 10 line items
//! - [`update_line_items`]: replace all line items in one mutation
//!
//! Nothing is cached; every call is one round trip.
//!
//! # Example
//!
//! ```rust,ignore
//! use draft_order_admin::draft_orders::{list_draft_orders, fetch_draft_order};
//!
//! let page = list_draft_orders(&client, None).await?;
//! for order in &page.orders {
//!     println!("{} {}", order.name, order.status);
//! }
//!
//! if let Some(first) = page.orders.first() {
//!     let detail = fetch_draft_order(&client, &first.id, &CurrencyCode::default()).await?;
//!     println!("{} line items", detail.line_items.len());
//! }
//! ```

mod detail;
mod errors;
mod listing;
mod model;
mod queries;
mod update;

pub use detail::fetch_draft_order;
pub use errors::DraftOrderError;
pub use listing::{list_draft_orders, PAGE_SIZE};
pub use model::{
    Attribute, DraftOrderDetail, DraftOrderId, DraftOrderPage, DraftOrderStatus,
    DraftOrderSummary, LineItem, MoneyV2, PageCursor, UserError,
};
pub use update::{update_line_items, UpdateOutcome};
