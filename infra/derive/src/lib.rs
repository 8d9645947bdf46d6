#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`cadastro_error`] turns an enum into a `thiserror` error with context support.
//! * [`cadastro_slice`] turns a struct into an `Arc`-backed feature slice handle.
//! * [`api_handler`] registers an Axum handler with `utoipa`.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant holding a source.
/// * `From<SourceError>` for every variant holding a source.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields (tuple and unit variants are rejected).
/// 3. Variants holding a `source` (by name, `#[source]` or `#[from]`) also declare
///    `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[cadastro_derive::cadastro_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn cadastro_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `cadastro_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[cadastro_derive::cadastro_slice]
/// pub struct Casing {
///     pub policy: CasePolicy,
/// }
///
/// let slice = Casing::new(CasingInner { policy: CasePolicy::default() });
/// ```
#[proc_macro_attribute]
pub fn cadastro_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}

/// Registers an Axum handler with `utoipa::path`.
///
/// Accepts the regular `utoipa::path` arguments and silences
/// `clippy::unused_async` for handlers that never await.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     post,
///     path = "/documents/validate",
///     request_body = ValidateDocumentRequest,
///     responses((status = OK, body = ValidateDocumentResponse)),
///     tag = DOCUMENTS_TAG,
/// )]
/// pub async fn validate_document(Json(req): Json<ValidateDocumentRequest>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::handler::expand(args.into(), input).into()
}
