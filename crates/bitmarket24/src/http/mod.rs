/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod query;
pub mod trade;
pub mod user;

pub use error::{Bitmarket24Error, Result};
pub use query::QueryParams;

pub use client::{Bitmarket24Client, ClientConfig, Credentials};
