//! Case Normalization slice.
//!
//! One [`CasePolicy`] decides per field whether user input is upper-cased. It is reached
//! through two call shapes ([`normalize_value`] and [`normalize_event`], unified by
//! [`transform_field_value`]) and by the fallback [`Sweeper`] for opted-in fields of a
//! live form.
//!
//! ```rust
//! use cadastro_casing::{FieldUpdate, transform_field_value};
//!
//! let value = transform_field_value(FieldUpdate::Direct { name: "razaoSocial", value: "acme" });
//! assert_eq!(value.as_deref(), Some("ACME"));
//!
//! let value = transform_field_value(FieldUpdate::Direct { name: "email", value: "Ana@Mail.com" });
//! assert_eq!(value.as_deref(), Some("Ana@Mail.com"));
//! ```

pub mod dispatch;
mod error;
pub mod policy;
#[cfg(feature = "server")]
pub mod server;
pub mod sweep;

pub use crate::dispatch::{
    ChangeEvent, EventTarget, FieldUpdate, Setter, normalize_event, normalize_form, normalize_value,
    transform_field_value,
};
pub use crate::error::{CasingError, CasingErrorExt};
pub use crate::policy::{CasePolicy, FieldClass, FieldDescriptor, FieldKind, PRESERVE_FRAGMENTS};
pub use crate::sweep::{
    DocumentMutation, FormDocument, InputElement, Selection, SweepHandle, SweepReport, SweepState,
    Sweeper,
};

use cadastro_kernel::domain::config::CasingConfig;
use cadastro_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;
use std::time::Duration;

/// Casing feature state
#[cadastro_derive::cadastro_slice]
pub struct Casing {
    pub policy: Arc<CasePolicy>,
    pub opt_in_marker: String,
    pub sweep_interval: Duration,
}

impl Casing {
    /// A sweeper over `document` sharing this slice's policy.
    #[must_use]
    pub fn sweeper(&self, document: FormDocument) -> Sweeper {
        Sweeper::new(document, Arc::clone(&self.policy))
            .with_marker(self.opt_in_marker.clone())
            .with_interval(self.sweep_interval)
    }
}

/// Initialize the casing feature.
///
/// # Errors
/// Returns [`CasingError::Config`] when the sweep interval is zero or the opt-in
/// marker is blank.
pub fn init(config: &CasingConfig) -> Result<InitializedSlice, CasingError> {
    if config.sweep_interval_ms == 0 {
        return Err(CasingError::Config {
            message: "sweep_interval_ms must be greater than zero".into(),
            context: Some("casing".into()),
        });
    }
    let marker = config.opt_in_marker.trim();
    if marker.is_empty() {
        return Err(CasingError::Config {
            message: "opt_in_marker must not be blank".into(),
            context: Some("casing".into()),
        });
    }

    let policy = CasePolicy::default().with_extra_fragments(&config.extra_preserve_fragments);
    let inner = CasingInner {
        policy: Arc::new(policy),
        opt_in_marker: marker.to_owned(),
        sweep_interval: Duration::from_millis(config.sweep_interval_ms),
    };

    tracing::info!(
        fragments = inner.policy.fragments().count(),
        marker = %inner.opt_in_marker,
        interval_ms = config.sweep_interval_ms,
        "Casing slice initialized"
    );

    Ok(InitializedSlice::new(Casing::new(inner)))
}
