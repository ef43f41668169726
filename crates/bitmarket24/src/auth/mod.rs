/*
[INPUT]:  Client id and signing secret
[OUTPUT]: Short-lived HS256 bearer tokens
[POS]:    Auth layer - handles Bitmarket24 API authentication
[UPDATE]: When token claims or signing scheme change
*/

pub mod token;

pub use token::{Claims, TOKEN_TTL_SECONDS, TokenSigner, verify_token};
