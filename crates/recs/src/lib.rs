mod client;
mod error;
pub mod models;

pub use client::{RecsClient, DEFAULT_TOP_N};
pub use error::RecsError;

pub type Result<T> = std::result::Result<T, RecsError>;
