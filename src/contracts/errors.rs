use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while configuring the wallet or querying the node.
///
/// Every variant is terminal for a CLI run, there is no local recovery.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The node endpoint could not be built from the template.
    #[error("Invalid node endpoint {endpoint}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: BoxedSource,
    },

    /// An RPC call or a contract call failed.
    #[error("Could not {operation}")]
    Query {
        operation: &'static str,
        #[source]
        source: BoxedSource,
    },

    /// A required configuration key is absent from both the environment and the env file.
    #[error("{key} is not set")]
    MissingConfig { key: &'static str },

    /// The env file exists but could not be read or parsed.
    #[error("Could not load env file {path}")]
    ConfigFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    /// An address is not a 20-byte hexadecimal string.
    #[error("Invalid address {value:?}")]
    InvalidAddress {
        value: String,
        #[source]
        source: BoxedSource,
    },
}

impl WalletError {
    pub(crate) fn query<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query {
            operation,
            source: Box::new(source),
        }
    }

    /// Returns `true` for configuration errors, i.e. ones raised before any network call.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig { .. } | Self::ConfigFile { .. })
    }
}
