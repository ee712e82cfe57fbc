use reqwest::Client;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base path prepended to TMDB-relative image paths to form a full URL.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

pub struct TmdbClient {
    client: Client,
    token: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a shared reqwest Client and an API read
    /// access token (sent as a bearer credential).
    pub fn new(client: Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            lang: "en-US".to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Full image URL for a TMDB-relative image path.
    pub fn image_url(path: &str) -> String {
        format!("{}{}", IMAGE_BASE_URL, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_concatenates_base_path() {
        assert_eq!(
            TmdbClient::image_url("/8uO0gUM8aNqYLs1OsTBQiXu0fEv.jpg"),
            "https://image.tmdb.org/t/p/original/8uO0gUM8aNqYLs1OsTBQiXu0fEv.jpg"
        );
    }
}
