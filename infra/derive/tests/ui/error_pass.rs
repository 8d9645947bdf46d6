use cadastro_derive::cadastro_error;
use std::borrow::Cow;

#[cadastro_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    io.context("Reading fixture")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading fixture): boom");

    let err: DemoError = "plain".into();
    assert_eq!(err.to_string(), "Internal error: plain");

    let validation: Result<(), DemoError> =
        Err(DemoError::Validation { message: "name is required".into(), context: None });
    let err = validation.context("client").unwrap_err();
    assert_eq!(err.to_string(), "Validation error (client): name is required");
}
