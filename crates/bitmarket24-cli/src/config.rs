/*
[INPUT]:  YAML configuration file
[OUTPUT]: Validated credentials and client settings
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use bitmarket24::{Bitmarket24Client, ClientConfig, Credentials, MarketId};
use serde::Deserialize;

/// Top-level configuration for the command line client
#[derive(Clone, Deserialize)]
pub struct CliConfig {
    /// API client id
    pub client_id: String,
    /// API signing secret
    pub client_secret: String,
    /// Market used when a command does not pass `--market`
    #[serde(default)]
    pub default_market: Option<MarketId>,
    /// Overall request timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            bail!("client_id must not be empty");
        }
        if self.client_secret.is_empty() {
            bail!("client_secret must not be empty");
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Build a client, with `market_override` taking precedence over the file
    pub fn build_client(&self, market_override: Option<MarketId>) -> Result<Bitmarket24Client> {
        let mut client = Bitmarket24Client::with_config(
            Credentials::new(&self.client_id, &self.client_secret),
            self.client_config(),
        )
        .context("build bitmarket24 client")?;
        client.set_default_market(market_override.or_else(|| self.default_market.clone()));
        Ok(client)
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("default_market", &self.default_market)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
