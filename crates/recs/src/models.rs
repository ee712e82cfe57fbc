use serde::{Deserialize, Serialize};

/// Request body for the recommendation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub genre: String,
    pub top_n: u32,
}

/// A single recommended movie as returned by the endpoint.
///
/// The title may carry a trailing year suffix, e.g. `"Inception (2010)"`.
/// `genres` is a pre-joined label string, not a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub genres: String,
}
