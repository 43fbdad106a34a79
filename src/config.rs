//! Loading a group descriptor from configuration.
//!
//! Parameters are decimal integers. Sources, lowest to highest priority:
//!
//! 1. `.env` file (if present)
//! 2. TOML file at `SCHNORR_CONFIG_PATH`, default `config/group.toml`
//! 3. Environment variables prefixed with `SCHNORR_`
//!
//! ```toml
//! [default]
//! modulus = "23"
//! generator = "5"
//! order = "22"
//! ```
//!
//! When neither `modulus` nor `generator` is configured the RFC 5114 2048-bit
//! group is used. A configured group without `order` gets `p - 1`.
//!
//! Values too large for a machine integer must be quoted when set through the
//! environment (`SCHNORR_MODULUS='"1234..."'`).

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{rfc5114, Error, GroupEngine, Integer, ModpGroup, Result};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "SCHNORR_CONFIG_PATH";

const DEFAULT_CONFIG_PATH: &str = "config/group.toml";

/// Parameters of a prime-field group.
///
/// The default (everything unset) builds the RFC 5114 group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Prime modulus `p`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulus: Option<Integer>,
    /// Generator `g`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Integer>,
    /// Order of `g`. Defaults to `p - 1` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Integer>,
}

impl GroupConfig {
    /// Loads the configuration from `.env`, the TOML file and the environment.
    ///
    /// A missing `.env` or TOML file is skipped silently.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// SCHNORR_CONFIG_PATH=/etc/schnorr/group.toml
    /// SCHNORR_MODULUS=23
    /// SCHNORR_GENERATOR=5
    /// ```
    ///
    /// # Errors
    /// Returns an error if a source is malformed.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Figment::new()
            .merge(Toml::file(&config_path).nested())
            .merge(Env::prefixed("SCHNORR_"))
            .extract()
    }

    /// Builds the group descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if a parameter is malformed or out of
    /// range, or if only one of `modulus` and `generator` is configured.
    pub fn build(&self) -> Result<ModpGroup> {
        let reference = rfc5114();

        let group = match (&self.modulus, &self.generator) {
            (None, None) if self.order.is_none() => reference.clone(),
            (Some(p), Some(g)) => ModpGroup::from_encoded(p.clone(), g.clone(), self.order.clone())?,
            _ => {
                return Err(Error::InvalidParams(
                    "modulus and generator must be configured together".to_string(),
                ))
            }
        };

        let group = if group.modulus() == reference.modulus()
            && group.generator() == reference.generator()
            && group.order() == reference.order()
        {
            group.with_name(reference.name())
        } else {
            group
        };

        debug!(group = group.name(), "loaded group configuration");
        Ok(group)
    }
}
