/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bitmarket24 client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Claims, TokenSigner};

// Re-export commonly used types from http
pub use http::{
    Bitmarket24Client,
    Bitmarket24Error,
    ClientConfig,
    Credentials,
    QueryParams,
    Result,
};

// Re-export all types
pub use types::*;
