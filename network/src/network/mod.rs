mod config;
mod events;
mod info;
mod kind;
mod selector;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use crate::error::ErrorKind;
use crate::rpc::{Client, FromNetworkConfig, NodeApi};
use crate::Result;

pub use self::config::{
    NetworkConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_NAME, DEFAULT_TIMEOUT, MAINNET_URL,
    MOCKCHAIN_URL, TESTNET_URL,
};
pub use self::events::{Events, NetworkEvent};
pub use self::info::NetworkInfo;
pub use self::kind::{NetworkKind, NETWORK_TYPES};
pub use self::selector::{HostSelector, RandomSelector, SeededSelector};

const PROTOCOLS: [&str; 2] = ["https://", "http://"];

/// A lamden network: the set of masternodes to talk to, what kind of network
/// they belong to, and whether the network was reachable the last time it was
/// pinged.
///
/// Everything except the online status is fixed at construction. Concurrent
/// calls to [`Network::ping`] race on the online status and the last one to
/// finish wins.
pub struct Network<C = Client> {
    name: String,
    kind: NetworkKind,
    currency_symbol: String,
    lamden: bool,
    block_explorer: Option<String>,
    hosts: Vec<String>,
    online: AtomicBool,
    client: C,
    events: Events,
    selector: Box<dyn HostSelector>,
}

impl Network {
    /// Build a network that talks to its masternodes over HTTP.
    pub fn new(config: NetworkConfig) -> Result<Self> {
        Self::from_config(config)
    }

    /// Build a network out of a JSON network info record.
    /// See [`NetworkConfig::from_value`] for the accepted keys.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_config(NetworkConfig::from_value(value)?)
    }
}

impl<C> Network<C>
where
    C: NodeApi + FromNetworkConfig,
{
    /// Build a network with a custom node API client.
    ///
    /// Validation happens in a fixed order: required fields, then construction of
    /// the client, then host protocols, and only then the network type.
    pub fn from_config(config: NetworkConfig) -> Result<Self> {
        if config.hosts.is_empty() {
            return Err(ErrorKind::Config.message("HOSTS required (type: array)"));
        }
        if config.network_type.is_empty() {
            return Err(ErrorKind::Config.message("network type required (type: string)"));
        }
        let network_type = config.network_type.to_lowercase();

        let client = C::from_config(&config).map_err(|err| {
            ErrorKind::ApiClient.full(format!("failed to construct node api client: {err}"), err)
        })?;
        let hosts = validate_hosts(&config.hosts)?;
        let kind: NetworkKind = network_type.parse()?;

        let network = Self {
            name: config.name_or_default(),
            kind,
            currency_symbol: config.currency_symbol_or_default(),
            lamden: config.lamden.unwrap_or(false),
            block_explorer: config.block_explorer_or_none(),
            hosts,
            online: AtomicBool::new(false),
            client,
            events: Events::new(),
            selector: Box::new(RandomSelector),
        };

        debug!(
            target: "lamden_network",
            name = %network.name,
            kind = %network.kind,
            hosts = network.hosts.len(),
            "network created"
        );
        Ok(network)
    }

    /// Ping the network, storing and publishing whether it is online.
    pub async fn ping(&self) -> Result<bool> {
        self.ping_and_notify(None::<fn(bool)>).await
    }

    /// Same as [`Network::ping`], additionally handing the result to `callback`
    /// once the `online` event has been published.
    pub async fn ping_with<F>(&self, callback: F) -> Result<bool>
    where
        F: FnOnce(bool),
    {
        self.ping_and_notify(Some(callback)).await
    }

    async fn ping_and_notify<F>(&self, callback: Option<F>) -> Result<bool>
    where
        F: FnOnce(bool),
    {
        let online = match self.client.ping_server().await {
            Ok(online) => online,
            Err(err) => {
                warn!(target: "lamden_network", name = %self.name, "ping failed: {err}");
                let msg = format!("failed to ping {}: {err}", self.name);
                return Err(ErrorKind::Probe.full(msg, err));
            }
        };

        debug!(target: "lamden_network", name = %self.name, online, "pinged network");
        self.online.store(online, Ordering::SeqCst);
        self.events.emit(NetworkEvent::Online(online));
        if let Some(callback) = callback {
            callback(online);
        }

        Ok(online)
    }
}

impl<C> Network<C> {
    /// Replace how hosts are picked by [`Network::host`], [`Network::url`] and
    /// [`Network::info`]. Defaults to [`RandomSelector`]. The node API client picks
    /// its own request targets; see [`Client::with_selector`].
    pub fn with_selector(mut self, selector: impl HostSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Name of the network itself
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NetworkKind {
        self.kind
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Whether this is one of the official lamden networks.
    pub fn is_lamden(&self) -> bool {
        self.lamden
    }

    pub fn block_explorer(&self) -> Option<&str> {
        self.block_explorer.as_deref()
    }

    /// All masternode urls, lowercased and in configured order.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Result of the last successful ping. `false` until the network is pinged.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    pub fn is_mainnet(&self) -> bool {
        self.kind == NetworkKind::Mainnet
    }

    pub fn is_testnet(&self) -> bool {
        self.kind == NetworkKind::Testnet
    }

    pub fn is_mockchain(&self) -> bool {
        self.kind == NetworkKind::Mockchain
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Subscribe to the events this network publishes.
    pub fn subscribe(&self) -> broadcast::Receiver<NetworkEvent> {
        self.events.subscribe()
    }

    /// Pick one of the hosts to send a request to.
    pub fn host(&self) -> &str {
        let idx = self.selector.select(self.hosts.len()) % self.hosts.len();
        trace!(target: "lamden_network", idx, host = %self.hosts[idx], "selected host");
        &self.hosts[idx]
    }

    /// Alias of [`Network::host`].
    pub fn url(&self) -> &str {
        self.host()
    }

    /// Snapshot of the network. `url` is freshly selected on every call.
    pub fn info(&self) -> NetworkInfo {
        NetworkInfo {
            name: self.name.clone(),
            lamden: self.lamden,
            kind: self.kind,
            hosts: self.hosts.clone(),
            url: self.url().into(),
            online: self.is_online(),
            mainnet: self.is_mainnet(),
            testnet: self.is_testnet(),
            mockchain: self.is_mockchain(),
        }
    }
}

impl<C> fmt::Debug for Network<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("hosts", &self.hosts)
            .field("online", &self.is_online())
            .finish()
    }
}

fn validate_hosts(hosts: &[String]) -> Result<Vec<String>> {
    hosts.iter().map(|host| validate_protocol(host.to_lowercase())).collect()
}

/// Hosts must include `http://` or `https://`.
fn validate_protocol(host: String) -> Result<String> {
    if PROTOCOLS.iter().any(|protocol| host.contains(protocol)) {
        return Ok(host);
    }
    Err(ErrorKind::HostProtocol.message(format!(
        "host string must include http:// or https://, got {host}"
    )))
}
