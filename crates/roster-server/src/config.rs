use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use roster_store::StoreConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound (inclusive) for generated record ids.
    pub id_space: u64,
    pub max_id_attempts: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080),
            id_space: StoreConfig::DEFAULT_ID_SPACE,
            max_id_attempts: StoreConfig::DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> ServerResult<()> {
        if self.id_space == 0 {
            return Err(ServerError::Config("id_space must be at least 1".into()));
        }
        if self.max_id_attempts == 0 {
            return Err(ServerError::Config(
                "max_id_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Store settings derived from this config.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            id_space: self.id_space,
            max_id_attempts: self.max_id_attempts,
            seed: None,
        }
    }
}
