//! Convenient imports for working with lamden networks.
//!
//! ```
//! use lamden_network::prelude::*;
//! ```

pub use crate::network::{HostSelector, NetworkConfig, NetworkEvent, NetworkKind};
pub use crate::rpc::{FromNetworkConfig, NodeApi};
pub use crate::Network;
