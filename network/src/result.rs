//! Result type used throughout lamden-network.

pub type Result<T, E = crate::error::Error> = core::result::Result<T, E>;
