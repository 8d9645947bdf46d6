//! Axum plumbing shared by every slice: state registry, API errors and the system router.

mod error;
mod health;
pub mod router;
mod state;

pub use error::ApiError;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
