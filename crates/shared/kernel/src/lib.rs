//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and, behind the `server`
//! feature, the Axum state/router plumbing every slice plugs into.
//!
//! ## Config loading
//! ```rust,no_run
//! use cadastro_kernel::config::load_config;
//! use cadastro_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use cadastro_domain as domain;

/// Commonly used kernel items.
pub mod prelude {
    pub use crate::config::{ConfigError, load_config};
    #[cfg(feature = "server")]
    pub use crate::server::{ApiError, ApiState, ApiStateError};
}
