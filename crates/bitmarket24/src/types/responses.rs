/*
[INPUT]:  Raw HTTP status and body from the transport
[OUTPUT]: Response wrapper for endpoints that hand back the raw reply
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When response handling for POST/DELETE endpoints changes
*/

use serde::de::DeserializeOwned;

use crate::http::Result;

/// Status and body of a reply, returned as-is for caller inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON regardless of status
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_range() {
        let ok = RawResponse { status: 202, body: String::new() };
        let redirect = RawResponse { status: 302, body: String::new() };
        let missing = RawResponse { status: 404, body: String::new() };

        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_json_body() {
        let raw = RawResponse {
            status: 400,
            body: r#"{"error":"insufficient funds"}"#.to_string(),
        };
        let value: serde_json::Value = raw.json().unwrap();
        assert_eq!(value["error"], "insufficient funds");

        let broken = RawResponse { status: 200, body: "<html>".to_string() };
        assert!(broken.json::<serde_json::Value>().is_err());
    }
}
