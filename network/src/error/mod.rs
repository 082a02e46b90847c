//! All errors that can occur within lamden-network, including but not limited to
//! the following: configuration, host validation, node API and liveness probe errors.

mod impls;

use std::borrow::Cow;

/// Error type that lamden-network will make use of for all the errors
/// returned from this library
#[derive(Debug)]
pub struct Error {
    repr: ErrorRepr,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The network configuration record was missing or malformed.
    #[error("Config")]
    Config,
    /// The node API client could not be constructed from the configuration.
    #[error("ApiClient")]
    ApiClient,
    /// A host string did not carry an `http://` or `https://` protocol.
    #[error("HostProtocol")]
    HostProtocol,
    /// The network type is not one of the recognized lamden network types.
    #[error("UnsupportedNetworkType")]
    UnsupportedNetworkType,
    /// The liveness probe failed before it could produce a result.
    #[error("Probe")]
    Probe,
    /// Transport level failure while talking to a masternode.
    #[error("Rpc")]
    Rpc,
    /// Data conversion error, such as parsing a config file or a response body.
    #[error("DataConversion")]
    DataConversion,
    /// An IO error occurred while reading a config file.
    #[error("Io")]
    Io,
}

#[derive(Debug, thiserror::Error)]
enum ErrorRepr {
    #[error("{0}")]
    Simple(ErrorKind),
    #[error("{message}")]
    Message {
        kind: ErrorKind,
        message: Cow<'static, str>,
    },
    #[error("{error}")]
    Custom {
        kind: ErrorKind,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{message}")]
    Full {
        kind: ErrorKind,
        message: Cow<'static, str>,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}
