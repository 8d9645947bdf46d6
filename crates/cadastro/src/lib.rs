//! Facade crate for the cadastro features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `cadastro` with the `server` feature for the REST surface.
//! - Call `cadastro::init` to build every feature slice from the loaded config.

pub use cadastro_domain as domain;
use cadastro_domain::config::ApiConfig;
use cadastro_domain::registry::InitializedSlice;
pub use cadastro_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use cadastro_kernel::server::router::system_router;
        use cadastro_kernel::server::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        /// System routes plus the routes of every feature slice.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router::<ApiState>()
                .merge(cadastro_documents::server::router())
                .merge(cadastro_casing::server::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use cadastro_casing as casing;
    pub use cadastro_documents as documents;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "documents",
        "casing",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![
        // Document validators
        features::documents::init(&config.documents)?,
        // Case normalization
        features::casing::init(&config.casing)?,
    ];

    Ok(slices)
}
