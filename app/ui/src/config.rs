use std::env;

/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Recommendation endpoint URL (`RECS_API_URL`). When absent, the
    /// confirm action fails with a missing-configuration error and the UI
    /// stays on the confirmation screen.
    pub recs_api_url: Option<String>,
    /// TMDB API read access token (`TMDB_API_TOKEN`). When absent, backdrop
    /// enrichment is skipped and every movie gets the placeholder image.
    pub tmdb_api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            recs_api_url: nonempty_var("RECS_API_URL"),
            tmdb_api_token: nonempty_var("TMDB_API_TOKEN"),
        }
    }
}

fn nonempty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
