use std::borrow::Cow;

/// A specialized [`CasingError`] enum of this crate.
#[cadastro_derive::cadastro_error]
pub enum CasingError {
    /// Rejected casing configuration.
    #[error("Casing config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal casing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
