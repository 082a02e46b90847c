use serde::Serialize;

use crate::network::NetworkKind;

/// Point in time snapshot of a [`Network`](crate::Network), as returned by
/// [`Network::info`](crate::Network::info).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    /// Name of the network itself
    pub name: String,
    pub lamden: bool,
    #[serde(rename = "type")]
    pub kind: NetworkKind,
    /// Every normalized masternode url, in configured order.
    pub hosts: Vec<String>,
    /// One of `hosts`, freshly selected when the snapshot was taken.
    pub url: String,
    pub online: bool,
    pub mainnet: bool,
    pub testnet: bool,
    pub mockchain: bool,
}
