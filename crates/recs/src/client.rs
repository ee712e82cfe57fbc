use reqwest::Client;

use crate::error::RecsError;
use crate::models::{MovieRecord, RecommendRequest};

/// Default number of recommendations requested per confirm.
pub const DEFAULT_TOP_N: u32 = 25;

pub struct RecsClient {
    client: Client,
    endpoint: Option<String>,
}

impl RecsClient {
    /// Create a RecsClient for the given endpoint URL.
    ///
    /// The endpoint is optional so the client can be built unconditionally
    /// at startup; calling [`recommend`](Self::recommend) without one fails
    /// with [`RecsError::Unconfigured`].
    pub fn new(client: Client, endpoint: Option<String>) -> Self {
        Self { client, endpoint }
    }

    /// Fetch recommendations for a genre.
    ///
    /// The endpoint answers a `POST {genre, top_n}` with a plain JSON array
    /// of movie records.
    pub async fn recommend(&self, genre: &str, top_n: u32) -> crate::Result<Vec<MovieRecord>> {
        let endpoint = self.endpoint.as_deref().ok_or(RecsError::Unconfigured)?;
        let request = RecommendRequest {
            genre: genre.to_string(),
            top_n,
        };
        let response = self.client.post(endpoint).json(&request).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RecsError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| RecsError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recommend_without_endpoint_is_unconfigured() {
        let client = RecsClient::new(Client::new(), None);
        let err = client.recommend("Action", DEFAULT_TOP_N).await.unwrap_err();
        assert!(matches!(err, RecsError::Unconfigured));
    }
}
