//! Admin API client layer.
//!
//! - [`HttpClient`]: authenticated HTTP transport bound to one shop
//! - [`HttpRequest`] / [`HttpResponse`]: request builder and parsed response
//! - [`graphql::GraphqlClient`]: GraphQL operations on top of [`HttpClient`]
//!
//! There is no retry, timeout or cancellation policy: a failed call surfaces
//! to the caller on the first attempt.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, APP_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
