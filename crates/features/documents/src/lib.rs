//! Document Validator slice: Brazilian CPF/CNPJ check digits, e-mail and CEP shape checks.
//!
//! The predicates are pure and never fail; malformed input simply yields `false`.
//!
//! ```rust
//! use cadastro_documents::{validate_cep, validate_cnpj, validate_cpf, validate_email};
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert!(validate_cnpj("11.222.333/0001-81"));
//! assert!(validate_email("user@example.com"));
//! assert!(!validate_cep("1234"));
//! ```

mod checksum;
mod client;
pub mod cnpj;
mod contact;
pub mod cpf;
mod error;
mod format;
mod kind;
#[cfg(feature = "server")]
pub mod server;

pub use crate::client::{ClientDraft, validate_client};
pub use crate::cnpj::validate_cnpj;
pub use crate::contact::{CEP_LEN, validate_cep, validate_email};
pub use crate::cpf::{validate_cpf, validate_cpf_strict};
pub use crate::error::{DocumentError, DocumentErrorExt};
pub use crate::format::{format_cep, format_cnpj, format_cpf};
pub use crate::kind::{DocumentKind, validate};

use cadastro_kernel::domain::config::DocumentsConfig;
use cadastro_kernel::domain::registry::InitializedSlice;

/// Documents feature state
#[cadastro_derive::cadastro_slice]
pub struct Documents {
    pub reject_repeated_cpf: bool,
}

impl Documents {
    /// Validates `input` as `kind`, applying the configured CPF strictness.
    #[must_use]
    pub fn check(&self, kind: DocumentKind, input: &str) -> bool {
        match kind {
            DocumentKind::Cpf if self.reject_repeated_cpf => validate_cpf_strict(input),
            other => validate(other, input),
        }
    }
}

/// Initialize the documents feature.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(config: &DocumentsConfig) -> Result<InitializedSlice, DocumentError> {
    let inner = DocumentsInner { reject_repeated_cpf: config.reject_repeated_cpf };
    let slice = Documents::new(inner);

    tracing::info!(reject_repeated_cpf = config.reject_repeated_cpf, "Documents slice initialized");

    Ok(InitializedSlice::new(slice))
}
