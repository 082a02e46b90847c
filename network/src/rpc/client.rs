use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::ErrorKind;
use crate::network::{HostSelector, NetworkConfig, RandomSelector};
use crate::rpc::{FromNetworkConfig, NodeApi};
use crate::Result;

/// Status a masternode reports from `/ping` when it is up.
const ONLINE_STATUS: &str = "online";

#[derive(Debug, Deserialize)]
struct PingResponse {
    status: Option<String>,
}

/// HTTP client for the lamden masternode API.
#[derive(Clone)]
pub struct Client {
    hosts: Vec<String>,
    http: reqwest::Client,
    timeout: Duration,
    selector: Arc<dyn HostSelector>,
}

impl Client {
    pub(crate) fn new(hosts: &[String], timeout: Duration) -> Result<Self> {
        if hosts.is_empty() {
            return Err(ErrorKind::Config.message("node api client requires at least one host"));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ErrorKind::Rpc.full("failed to build http client", e))?;

        Ok(Self {
            // Protocols are not checked here; that is left to the network itself.
            hosts: hosts.iter().map(|host| host.to_lowercase()).collect(),
            http,
            timeout,
            selector: Arc::new(RandomSelector),
        })
    }

    /// Replace how the masternode for each request is picked. Defaults to
    /// [`RandomSelector`]. This is separate from
    /// [`Network::with_selector`](crate::Network::with_selector), which only
    /// governs the hosts the network hands out.
    pub fn with_selector(mut self, selector: impl HostSelector + 'static) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn host(&self) -> &str {
        let idx = self.selector.select(self.hosts.len()) % self.hosts.len();
        &self.hosts[idx]
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let host = self.host();
        let url = format!("{}/{}", host.trim_end_matches('/'), path);
        Url::parse(&url)
            .map_err(|e| ErrorKind::DataConversion.full(format!("invalid masternode url {url}"), e))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("hosts", &self.hosts)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromNetworkConfig for Client {
    fn from_config(config: &NetworkConfig) -> Result<Self> {
        Self::new(&config.hosts, config.request_timeout()?)
    }
}

#[async_trait]
impl NodeApi for Client {
    async fn ping_server(&self) -> Result<bool> {
        let url = self.endpoint("ping")?;
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ErrorKind::Rpc.full(format!("failed to ping {url}"), e))?;

        let body: PingResponse = resp.json().await.map_err(|e| {
            ErrorKind::DataConversion.full(format!("malformed ping response from {url}"), e)
        })?;

        Ok(body.status.as_deref() == Some(ONLINE_STATUS))
    }
}
