/*
[INPUT]:  HTTP configuration (base URLs, timeouts), credentials, default market
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::TokenSigner;
use crate::http::{Bitmarket24Error, Result};
use crate::types::{MarketId, RawResponse};

/// Base URL for the versioned REST API
const API_BASE_URL: &str = "https://bitmarket24.pl/api/v1";
/// Base URL for per-market status documents (`{base}/{MARKET}/status.json`)
const STATUS_BASE_URL: &str = "https://bitmarket24.pl/api";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API credentials used to sign bearer tokens
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Bitmarket24Error::Credential("client id is empty".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(Bitmarket24Error::Credential(
                "client secret is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Bitmarket24 API
#[derive(Debug, Clone)]
pub struct Bitmarket24Client {
    http_client: Client,
    api_base_url: String,
    status_base_url: String,
    credentials: Credentials,
    default_market: Option<MarketId>,
}

impl Bitmarket24Client {
    /// Create a new client with default configuration
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials::new(client_id, client_secret),
            ClientConfig::default(),
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(credentials, config, API_BASE_URL, STATUS_BASE_URL)
    }

    /// Create a client against non-default hosts (mock servers, staging)
    pub fn with_config_and_base_urls(
        credentials: Credentials,
        config: ClientConfig,
        api_base_url: &str,
        status_base_url: &str,
    ) -> Result<Self> {
        credentials.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_base_url: normalize_base_url(api_base_url)?,
            status_base_url: normalize_base_url(status_base_url)?,
            credentials,
            default_market: None,
        })
    }

    /// Use `market` whenever a call does not name one
    pub fn with_default_market(mut self, market: MarketId) -> Self {
        self.default_market = Some(market);
        self
    }

    /// Replace or clear the default market
    pub fn set_default_market(&mut self, market: Option<MarketId>) {
        self.default_market = market;
    }

    pub fn default_market(&self) -> Option<&MarketId> {
        self.default_market.as_ref()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Explicit market first, then the client default
    pub fn resolve_market(&self, market: Option<&MarketId>) -> Result<MarketId> {
        market
            .or(self.default_market.as_ref())
            .cloned()
            .ok_or_else(Bitmarket24Error::no_market)
    }

    /// Mint a fresh bearer token, valid for three seconds
    pub fn sign_token(&self) -> Result<String> {
        TokenSigner::new(&self.credentials.client_id, &self.credentials.client_secret).sign()
    }

    fn bearer_header(&self) -> Result<HeaderValue> {
        let token = self.sign_token()?;
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Bitmarket24Error::Credential(format!("token is not a valid header: {e}")))
    }

    /// Build full URL for API endpoints
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.api_base_url, endpoint))?)
    }

    /// Build full URL for a market status document
    fn status_url(&self, market: &MarketId) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}/status.json",
            self.status_base_url,
            market.status_code()
        ))?)
    }

    /// Build request builder for public API endpoints
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder carrying a freshly signed bearer token
    pub(crate) fn authed_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let header = self.bearer_header()?;
        Ok(self.public_request(method, endpoint)?.header(AUTHORIZATION, header))
    }

    pub(crate) fn status_request(&self, market: &MarketId) -> Result<RequestBuilder> {
        let url = self.status_url(market)?;
        Ok(self.http_client.get(url))
    }

    /// Send a request and decode a successful JSON body
    ///
    /// Non-2xx statuses become [`Bitmarket24Error::Api`], a 2xx body that
    /// does not decode becomes [`Bitmarket24Error::InvalidResponse`].
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let raw = self.send_raw(builder).await?;
        if !raw.is_success() {
            return Err(Bitmarket24Error::Api {
                status: raw.status,
                body: raw.body,
            });
        }
        serde_json::from_str(&raw.body).map_err(|e| {
            Bitmarket24Error::InvalidResponse(format!(
                "status {} body is not the expected JSON: {e}",
                raw.status
            ))
        })
    }

    /// Send a request and hand back status and body untouched
    pub async fn send_raw(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let authenticated = request.headers().contains_key(AUTHORIZATION);
        debug!(%method, %path, authenticated, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!(%method, %path, status = status.as_u16(), "request completed");
        } else {
            warn!(%method, %path, status = status.as_u16(), "request returned non-success status");
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| {
        Bitmarket24Error::Configuration(format!("invalid base url {base_url}: {e}"))
    })?;
    Ok(trimmed.to_string())
}
