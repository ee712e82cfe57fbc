mod client;
mod error;
pub mod models;
mod search;

pub use client::{TmdbClient, IMAGE_BASE_URL};
pub use error::TmdbError;
pub use search::SearchMovieParams;

pub type Result<T> = std::result::Result<T, TmdbError>;
