use crate::contracts::{parse_address, WalletError};
use alloy::{primitives::Address, transports::http::reqwest::Url};
use std::{collections::HashMap, env, path::Path};

/// Environment key of the node API key.
pub const ETH_API_KEY: &str = "ETH_API_KEY";
/// Environment key of the token contract address.
pub const UNIETH_TOKEN_ADDRESS: &str = "UNIETH_TOKEN_ADDRESS";
/// Environment key of the account whose balances are shown.
pub const USER_ADDRESS: &str = "USER_ADDRESS";
/// Environment key of the node endpoint template.
pub const RPC_URL_TEMPLATE: &str = "RPC_URL_TEMPLATE";

/// Endpoint used when no template is configured.
pub const DEFAULT_RPC_URL_TEMPLATE: &str = "https://eth.w3node.com/{api_key}/api";

const API_KEY_PLACEHOLDER: &str = "{api_key}";

/// Reads a key from the process environment, treating empty values as absent.
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Key-value pairs of an env file, with the process environment on top.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    file: HashMap<String, String>,
    loaded: bool,
}

impl ConfigSource {
    /// Reads the env file at `path` without touching the process environment.
    ///
    /// A missing file is not an error, since every key may come from the environment;
    /// the source is then empty and [`Self::is_loaded`] returns `false`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let to_config_error = |source| WalletError::ConfigFile {
            path: path.display().to_string(),
            source,
        };

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() => return Ok(Self::default()),
            Err(err) => return Err(to_config_error(err)),
        };
        let file = iter
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(to_config_error)?;

        Ok(Self { file, loaded: true })
    }

    /// Whether an env file was found and read.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the value of `key`, from the environment first and from the file otherwise.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_with(key, env_lookup)
    }

    /// Same as [`Self::get`], with `env` standing in for the process environment.
    ///
    /// Empty values count as absent on both sides.
    pub fn get_with<F>(&self, key: &str, env: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        env(key).filter(|value| !value.is_empty()).or_else(|| {
            self.file
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        })
    }
}

/// Returns the value of `key` or a [`WalletError::MissingConfig`].
fn require<F>(lookup: &F, key: &'static str) -> Result<String, WalletError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(WalletError::MissingConfig { key })
}

/// Reads the token contract address on its own, for commands that take the account from flags.
pub fn token_address_from<F>(lookup: F) -> Result<Address, WalletError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_address(&require(&lookup, UNIETH_TOKEN_ADDRESS)?)
}

/// Wallet configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// API key of the node provider.
    pub api_key: String,
    /// Address of the uniETH token contract.
    pub token_address: Address,
    /// Account whose balances are queried.
    pub user_address: Address,
}

impl WalletConfig {
    pub fn new(api_key: String, token_address: Address, user_address: Address) -> Self {
        Self {
            api_key,
            token_address,
            user_address,
        }
    }

    /// Creates the config from the given key-value lookup.
    ///
    /// Required keys:
    /// - `ETH_API_KEY`
    /// - `UNIETH_TOKEN_ADDRESS`
    /// - `USER_ADDRESS`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require(&lookup, ETH_API_KEY)?;
        let token_address = require(&lookup, UNIETH_TOKEN_ADDRESS)?;
        let user_address = require(&lookup, USER_ADDRESS)?;

        Ok(Self::new(
            api_key,
            parse_address(&token_address)?,
            parse_address(&user_address)?,
        ))
    }

    /// Creates the config from an env file source, environment values taking precedence.
    pub fn from_source(source: &ConfigSource) -> Result<Self, WalletError> {
        Self::from_lookup(|key| source.get(key))
    }
}

/// Template of the node endpoint, where `{api_key}` is replaced by the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate(String);

impl Default for EndpointTemplate {
    fn default() -> Self {
        Self(DEFAULT_RPC_URL_TEMPLATE.to_string())
    }
}

impl EndpointTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Builds the endpoint URL for the given API key.
    ///
    /// The key is percent-encoded, so it can only ever fill the placeholder.
    pub fn render(&self, api_key: &str) -> Result<Url, WalletError> {
        let endpoint = self
            .0
            .replace(API_KEY_PLACEHOLDER, &urlencoding::encode(api_key));
        Url::parse(&endpoint).map_err(|e| WalletError::InvalidEndpoint {
            // keep the key out of error reports
            endpoint: self.0.clone(),
            source: Box::new(e),
        })
    }
}

impl std::fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
