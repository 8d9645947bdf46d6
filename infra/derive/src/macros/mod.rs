pub mod error;
pub mod handler;
pub mod slice;
