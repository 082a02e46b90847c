//! Lamden network descriptors.
//!
//! A [`Network`] is built once out of a [`NetworkConfig`] (or a JSON network info
//! record), validating its masternode hosts and network type. After that it hands
//! out hosts for requests, and tracks whether the network is online by pinging it
//! through a [`NodeApi`](rpc::NodeApi) client, publishing every result as a
//! [`NetworkEvent`].

mod result;

pub mod error;
pub mod network;
pub mod prelude;
pub mod rpc;

pub use self::error::{Error, ErrorKind};
pub use self::network::{
    Events, HostSelector, Network, NetworkConfig, NetworkEvent, NetworkInfo, NetworkKind,
};
pub use self::result::Result;
