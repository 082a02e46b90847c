use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Every network type string a [`Network`](crate::Network) can be built with.
pub const NETWORK_TYPES: [&str; 3] = ["mockchain", "testnet", "mainnet"];

/// Classification of what a lamden network is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local simulation of a network.
    Mockchain,
}

impl NetworkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Mockchain => "mockchain",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "mockchain" => Ok(Self::Mockchain),
            other => Err(ErrorKind::UnsupportedNetworkType.message(format!(
                "{other} not in lamden network types: {NETWORK_TYPES:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("MAINNET".parse::<NetworkKind>().ok(), Some(NetworkKind::Mainnet));
        assert_eq!("TestNet".parse::<NetworkKind>().ok(), Some(NetworkKind::Testnet));
        assert_eq!("mockchain".parse::<NetworkKind>().ok(), Some(NetworkKind::Mockchain));
    }

    #[test]
    fn test_parse_unknown_names_value_and_valid_set() {
        let err = "devnet".parse::<NetworkKind>().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedNetworkType));
        let msg = err.to_string();
        assert!(msg.contains("devnet"));
        for ty in NETWORK_TYPES {
            assert!(msg.contains(ty), "{ty} missing from `{msg}`");
        }
    }
}
