//! Configuration record a [`Network`](crate::Network) is built out of. It can be
//! assembled directly in code, parsed from a JSON value with the same keys the
//! lamden wallets use, or loaded from a JSON file on disk.
//
// NOTE: required fields (`hosts`, `type`) are rejected when malformed, while the
// optional ones silently fall back to their defaults when they have the wrong shape.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::ErrorKind;
use crate::Result;

/// Name given to a network when none is configured.
pub const DEFAULT_NAME: &str = "lamden network";

/// Currency symbol given to a network when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "TAU";

/// URL to the mainnet masternode provided by lamden.io.
pub const MAINNET_URL: &str = "https://masternode-01.lamden.io";

/// URL to the testnet masternode provided by lamden.io.
pub const TESTNET_URL: &str = "https://testnet-master-1.lamden.io";

/// URL a locally running mockchain listens on by default.
pub const MOCKCHAIN_URL: &str = "http://localhost:8000";

/// Timeout for requests to a masternode when neither the config nor
/// `LAMDEN_RPC_TIMEOUT_MS` specify one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Masternode urls. Must be non-empty.
    pub hosts: Vec<String>,
    /// One of `mainnet`, `testnet` or `mockchain`, in any casing.
    pub network_type: String,
    pub currency_symbol: Option<String>,
    pub name: Option<String>,
    /// Marks one of the official lamden networks.
    pub lamden: Option<bool>,
    pub block_explorer: Option<String>,
    /// Request timeout used by the node API client.
    pub timeout: Option<Duration>,
}

impl NetworkConfig {
    pub fn new<I, S>(hosts: I, network_type: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
            network_type: network_type.into(),
            currency_symbol: None,
            name: None,
            lamden: None,
            block_explorer: None,
            timeout: None,
        }
    }

    /// Official lamden mainnet.
    pub fn mainnet() -> Self {
        Self::new([MAINNET_URL], "mainnet")
            .name("Lamden Mainnet")
            .lamden(true)
            .block_explorer("https://mainnet.lamden.io")
    }

    /// Official lamden testnet.
    pub fn testnet() -> Self {
        Self::new([TESTNET_URL], "testnet")
            .name("Lamden Testnet")
            .currency_symbol("dTAU")
            .lamden(true)
            .block_explorer("https://testnet.lamden.io")
    }

    /// A mockchain running on this machine.
    pub fn mockchain() -> Self {
        Self::new([MOCKCHAIN_URL], "mockchain").name("Lamden Mockchain")
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    pub fn lamden(mut self, lamden: bool) -> Self {
        self.lamden = Some(lamden);
        self
    }

    pub fn block_explorer(mut self, url: &str) -> Self {
        self.block_explorer = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Parse a configuration out of a JSON record with the keys `hosts`, `type`,
    /// `currencySymbol`, `name`, `lamden`, `blockExplorer` and `timeout` (milliseconds).
    pub fn from_value(value: Value) -> Result<Self> {
        let ty = json_type(&value);
        let Value::Object(map) = value else {
            return Err(ErrorKind::Config.message(format!(
                "expected network info object and got type: {ty}"
            )));
        };
        if map.is_empty() {
            return Err(ErrorKind::Config
                .message("expected network info object and got an empty object"));
        }

        Ok(Self {
            hosts: required_hosts(&map)?,
            network_type: required_type(&map)?,
            currency_symbol: non_empty_str(&map, "currencySymbol"),
            name: non_empty_str(&map, "name"),
            lamden: map.get("lamden").and_then(Value::as_bool),
            block_explorer: non_empty_str(&map, "blockExplorer"),
            timeout: map
                .get("timeout")
                .and_then(Value::as_u64)
                .map(Duration::from_millis),
        })
    }

    /// Load a configuration from a JSON file. See [`NetworkConfig::from_value`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            ErrorKind::Io.full(format!("failed to open network config {}", path.display()), err)
        })?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| ErrorKind::DataConversion.custom(err))?;

        Self::from_value(value)
    }

    // Empty strings count as unset, the same as in `from_value`.
    pub(crate) fn name_or_default(&self) -> String {
        non_empty(&self.name).unwrap_or_else(|| DEFAULT_NAME.into())
    }

    pub(crate) fn currency_symbol_or_default(&self) -> String {
        non_empty(&self.currency_symbol).unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.into())
    }

    pub(crate) fn block_explorer_or_none(&self) -> Option<String> {
        non_empty(&self.block_explorer)
    }

    /// Request timeout for the node API client. `LAMDEN_RPC_TIMEOUT_MS` is consulted
    /// when the config does not set one, falling back to [`DEFAULT_TIMEOUT`].
    pub fn request_timeout(&self) -> Result<Duration> {
        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => match std::env::var("LAMDEN_RPC_TIMEOUT_MS") {
                Ok(val) => val
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|err| {
                        ErrorKind::DataConversion
                            .full(format!("invalid LAMDEN_RPC_TIMEOUT_MS={val}"), err)
                    })?,
                Err(_err) => DEFAULT_TIMEOUT,
            },
        };

        if timeout.is_zero() {
            return Err(ErrorKind::Config.message("request timeout must be greater than zero"));
        }
        Ok(timeout)
    }
}

impl TryFrom<Value> for NetworkConfig {
    type Error = crate::error::Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn required_hosts(map: &Map<String, Value>) -> Result<Vec<String>> {
    let hosts = match map.get("hosts") {
        Some(Value::Array(hosts)) if !hosts.is_empty() => hosts,
        _ => return Err(ErrorKind::Config.message("HOSTS required (type: array)")),
    };

    hosts
        .iter()
        .map(|host| {
            host.as_str().map(Into::into).ok_or_else(|| {
                ErrorKind::Config.message(format!("HOSTS must only contain strings, got {host}"))
            })
        })
        .collect()
}

fn required_type(map: &Map<String, Value>) -> Result<String> {
    match map.get("type") {
        Some(Value::String(ty)) if !ty.is_empty() => Ok(ty.clone()),
        _ => Err(ErrorKind::Config.message("network type required (type: string)")),
    }
}

fn non_empty_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(Into::into)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
