use crate::checksum::ascii_digits;
use crate::cnpj::{CNPJ_LEN, validate_cnpj};
use crate::contact::{CEP_LEN, validate_cep, validate_email};
use crate::cpf::{CPF_LEN, validate_cpf};
use crate::format::{format_cep, format_cnpj, format_cpf};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// The kinds of value the validator understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    Email,
    Cep,
}

impl DocumentKind {
    /// Guesses the kind from the input shape: `@` means e-mail, otherwise the digit count decides.
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        if input.contains('@') {
            return Some(Self::Email);
        }
        match ascii_digits(input).len() {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            CEP_LEN => Some(Self::Cep),
            _ => None,
        }
    }

    /// Display mask for the value, when the kind has one and the digit count fits.
    #[must_use]
    pub fn format(self, input: &str) -> Option<String> {
        match self {
            Self::Cpf => format_cpf(input),
            Self::Cnpj => format_cnpj(input),
            Self::Cep => format_cep(input),
            Self::Email => None,
        }
    }
}

/// Runs the predicate matching `kind`.
#[must_use]
pub fn validate(kind: DocumentKind, input: &str) -> bool {
    match kind {
        DocumentKind::Cpf => validate_cpf(input),
        DocumentKind::Cnpj => validate_cnpj(input),
        DocumentKind::Email => validate_email(input),
        DocumentKind::Cep => validate_cep(input),
    }
}
