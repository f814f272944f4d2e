//! # Configuration
//!
//! [`AttributeConfig`] collects the few process-level switches that affect
//! how attributes are declared. It is plain data: nothing reads it behind
//! the caller's back. Hand it to
//! [`AttributeFactory::from_config`](crate::factory::AttributeFactory::from_config).
//!
//! Loading is handled by [`confique`], layered in priority order:
//! 1. **Environment variables** (table below).
//! 2. **TOML file**, when a path is given to [`AttributeConfig::load`].
//! 3. **Compiled defaults** via `#[config(default = ...)]`.
//!
//! | Variable | Key | Default |
//! |----------|-----|---------|
//! | `COLLECTABLE_ENFORCE_STATES_ENABLED` | `enforce_states_enabled` | `false` |
//! | `COLLECTABLE_TRACE_EVENTS` | `trace_events` | `false` |
//! | `COLLECTABLE_FIRST_INDEX` | `first_index` | global counter |
//!
//! The struct also derives `serde` traits so hosts can nest it in their own
//! configuration.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_ENFORCE_STATES_ENABLED: &str = "COLLECTABLE_ENFORCE_STATES_ENABLED";
pub const ENV_TRACE_EVENTS: &str = "COLLECTABLE_TRACE_EVENTS";
pub const ENV_FIRST_INDEX: &str = "COLLECTABLE_FIRST_INDEX";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load attribute configuration: {0}")]
    Load(#[from] confique::Error),
}

/// Switches for attribute declaration.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AttributeConfig {
    /// Build every state variable enabled, whatever its declaration says.
    #[config(env = "COLLECTABLE_ENFORCE_STATES_ENABLED", default = false)]
    pub enforce_states_enabled: bool,

    /// Log attribute events through `tracing` instead of dropping them.
    #[config(env = "COLLECTABLE_TRACE_EVENTS", default = false)]
    pub trace_events: bool,

    /// Seed for a private ordering counter. Absent uses the global counter.
    #[config(env = "COLLECTABLE_FIRST_INDEX")]
    pub first_index: Option<u64>,
}

impl AttributeConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::builder().env().load()?)
    }

    /// Reads the environment, then `file` for anything the environment
    /// left unset.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
