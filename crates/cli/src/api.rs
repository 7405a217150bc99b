use std::time::Duration;

use anyhow::Context;
use keebtrack_inventory::{Snapshot, StoreRequest};
use reqwest::{Client, Url};

use crate::config::Config;
use crate::util::{self, ResponseExt};

static APP_USER_AGENT: &str = concat!("keebtrack", "/", env!("CARGO_PKG_VERSION"),);

/// The remote inventory: one read that returns everything, one write endpoint
/// that takes an action envelope.
///
/// Implementations do not retry and do not cache.
pub trait InventoryStore {
    /// Fetches the whole inventory.
    async fn fetch_all(&self) -> anyhow::Result<Snapshot>;

    /// Posts `request` and waits for the store's acknowledgement.
    async fn submit(&self, request: &StoreRequest) -> anyhow::Result<serde_json::Value>;
}

pub fn build_client(timeout: Option<Duration>) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(APP_USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("failed to build HTTP client")
}

/// [`InventoryStore`] over HTTP, talking to the single store URL.
#[derive(Debug, Clone)]
pub struct ClientApi {
    url: Url,
    client: Client,
}

impl ClientApi {
    pub fn new(url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let url = util::parse_store_url(url)?;
        let client = build_client(timeout)?;
        Ok(Self { url, client })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.store_url()?, config.request_timeout())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl InventoryStore for ClientApi {
    async fn fetch_all(&self) -> anyhow::Result<Snapshot> {
        tracing::debug!(url = %self.url, "fetching inventory");
        let res = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.url))?;
        res.json_or_error().await
    }

    async fn submit(&self, request: &StoreRequest) -> anyhow::Result<serde_json::Value> {
        tracing::debug!(url = %self.url, action = request.action(), "posting write");
        tracing::trace!(body = %serde_json::to_string(request)?, "write body");
        let res = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.url))?;
        res.json_or_error().await
    }
}
