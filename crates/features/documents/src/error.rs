use std::borrow::Cow;

/// A specialized [`DocumentError`] enum of this crate.
#[cadastro_derive::cadastro_error]
pub enum DocumentError {
    /// A record failed a business rule (e.g. a client without a name).
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal document error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
