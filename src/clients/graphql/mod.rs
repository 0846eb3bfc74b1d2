//! GraphQL client for the Shopify Admin API.
//!
//! - [`GraphqlClient`]: `query()` for raw responses, `execute()` for typed data
//! - [`GraphqlError`]: HTTP failures, top-level `errors`, and shape mismatches
//!
//! Operations are posted to `{origin}/admin/api/{version}/graphql.json` with a
//! `{"query", "variables"}` JSON body. Each call is a single attempt.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
