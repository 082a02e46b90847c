//! Seams to the remote masternode API a [`Network`](crate::Network) fronts.

pub(crate) mod client;

use async_trait::async_trait;

use crate::network::NetworkConfig;
use crate::Result;

pub use self::client::Client;

/// Calls a network makes into a masternode.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Check whether the masternode is currently responding.
    async fn ping_server(&self) -> Result<bool>;
}

/// Construct a node API client out of the same configuration the network is
/// built from. Any error returned here fails the construction of the network.
pub trait FromNetworkConfig: Sized {
    fn from_config(config: &NetworkConfig) -> Result<Self>;
}
