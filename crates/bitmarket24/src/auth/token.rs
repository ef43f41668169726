/*
[INPUT]:  Client id, client secret and a unix timestamp
[OUTPUT]: HS256 JWT strings and decoded claims
[POS]:    Auth layer - bearer token minting and verification
[UPDATE]: When claim set, lifetime or signing algorithm change
*/

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::http::{Bitmarket24Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of a freshly minted token. The server rejects anything older.
pub const TOKEN_TTL_SECONDS: i64 = 3;

const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Header {
    fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Payload carried by every bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for a token issued at `now` (unix seconds)
    pub fn issued_at(client_id: &str, now: i64) -> Self {
        Self {
            sub: client_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        }
    }

    /// A token is no longer valid once `now` reaches `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Mints tokens for one client id / secret pair
#[derive(Clone)]
pub struct TokenSigner<'a> {
    client_id: &'a str,
    secret: &'a str,
}

impl<'a> TokenSigner<'a> {
    pub fn new(client_id: &'a str, secret: &'a str) -> Self {
        Self { client_id, secret }
    }

    /// Sign a token issued at `now`
    ///
    /// Format: base64url(header).base64url(claims).base64url(hmac_sha256)
    pub fn sign_at(&self, now: i64) -> Result<String> {
        let mut mac = keyed_mac(self.secret)?;

        let header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&Header::hs256())?);
        let claims = Claims::issued_at(self.client_id, now);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signing_input = format!("{header}.{payload}");

        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }

    /// Sign a token issued at the current wall clock second
    pub fn sign(&self) -> Result<String> {
        self.sign_at(chrono::Utc::now().timestamp())
    }
}

impl std::fmt::Debug for TokenSigner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Check signature and expiry of `token` as seen at `now`
pub fn verify_token(token: &str, secret: &str, now: i64) -> Result<Claims> {
    let mut parts = token.trim().split('.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Bitmarket24Error::Credential(
            "token must have three dot-separated parts".to_string(),
        ));
    };

    let header: Header = serde_json::from_slice(&decode_segment(header_b64)?)?;
    if header.alg != ALGORITHM {
        return Err(Bitmarket24Error::Credential(format!(
            "unsupported token algorithm {}",
            header.alg
        )));
    }

    let mut mac = keyed_mac(secret)?;
    mac.update(format!("{header_b64}.{payload_b64}").as_bytes());
    mac.verify_slice(&decode_segment(signature_b64)?)
        .map_err(|_| Bitmarket24Error::InvalidSignature)?;

    let claims: Claims = serde_json::from_slice(&decode_segment(payload_b64)?)?;
    if claims.is_expired_at(now) {
        return Err(Bitmarket24Error::TokenExpired);
    }

    Ok(claims)
}

fn keyed_mac(secret: &str) -> Result<HmacSha256> {
    if secret.is_empty() {
        return Err(Bitmarket24Error::Credential(
            "client secret is empty".to_string(),
        ));
    }
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Bitmarket24Error::Credential(format!("invalid client secret: {e}")))
}

fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| Bitmarket24Error::Credential(format!("invalid token encoding: {e}")))
}
