//! Shared string constants (OpenAPI tags, default markers).

pub const SYSTEM_TAG: &str = "System";
pub const DOCUMENTS_TAG: &str = "Documents";
pub const CASING_TAG: &str = "Casing";

/// Attribute that opts a form field into the fallback upper-case sweep.
pub const UPPERCASE_MARKER: &str = "data-uppercase";

/// Prefix for environment overrides (`CADASTRO__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "CADASTRO";
