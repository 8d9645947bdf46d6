use crate::constants::UPPERCASE_MARKER;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub documents: DocumentsConfig,
    pub casing: CasingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Log output settings consumed by the logger at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// Document validator knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Reject CPFs made of one repeated digit (`111.111.111-11`).
    /// The checksum alone accepts them.
    pub reject_repeated_cpf: bool,
}

/// Case normalization settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CasingConfig {
    /// Field-name fragments preserved in addition to the built-in list.
    pub extra_preserve_fragments: Vec<String>,
    /// Period of the fallback sweep, in milliseconds.
    pub sweep_interval_ms: u64,
    /// Attribute a field must carry to be touched by the sweep.
    pub opt_in_marker: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, max_files: 10 }
    }
}

impl Default for CasingConfig {
    fn default() -> Self {
        Self {
            extra_preserve_fragments: Vec::new(),
            sweep_interval_ms: 500,
            opt_in_marker: UPPERCASE_MARKER.to_owned(),
        }
    }
}
