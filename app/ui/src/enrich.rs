//! Backdrop enrichment for recommendation results.
//!
//! Each title is looked up against the metadata service concurrently; a
//! failed or empty lookup falls back to the placeholder image without
//! affecting its siblings.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use recs::models::MovieRecord;

use crate::genre::PLACEHOLDER_IMAGE;
use crate::title::clean_title;

/// How many metadata lookups run at once.
const LOOKUP_CONCURRENCY: usize = 8;

/// A recommendation enriched for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub genres: String,
    /// Full backdrop image URL, or the placeholder path when the lookup
    /// failed or returned nothing. `None` only before enrichment.
    pub backdrop: Option<String>,
}

impl Movie {
    /// Backdrop to display, falling back to the placeholder.
    pub fn backdrop(&self) -> &str {
        self.backdrop.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Source of backdrop image URLs, keyed by a cleaned title.
#[async_trait]
pub trait BackdropSource: Send + Sync {
    /// Full image URL for the best match, or `None` when the lookup fails
    /// or finds nothing. Implementations must not propagate errors.
    async fn backdrop_url(&self, title: &str) -> Option<String>;
}

/// TMDB-backed source: the first search result's backdrop, if any.
pub struct TmdbBackdrops {
    client: tmdb::TmdbClient,
}

impl TmdbBackdrops {
    pub fn new(client: tmdb::TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BackdropSource for TmdbBackdrops {
    async fn backdrop_url(&self, title: &str) -> Option<String> {
        let params = tmdb::SearchMovieParams {
            query: title.to_string(),
            ..Default::default()
        };
        match self.client.search_movie(params).await {
            Ok(response) => response
                .results
                .into_iter()
                .next()
                .and_then(|movie| movie.backdrop_path)
                .map(|path| tmdb::TmdbClient::image_url(&path)),
            Err(e) => {
                tracing::warn!("backdrop lookup failed for '{}': {}", title, e);
                None
            }
        }
    }
}

pub struct Enricher {
    source: Option<Arc<dyn BackdropSource>>,
}

impl Enricher {
    /// A `None` source skips lookups entirely; everything falls back to
    /// the placeholder.
    pub fn new(source: Option<Arc<dyn BackdropSource>>) -> Self {
        Self { source }
    }

    /// Attach a backdrop to every record, looking titles up concurrently.
    ///
    /// Output order matches input order. Year suffixes are stripped from
    /// titles before querying so search terms stay clean.
    pub async fn enrich(&self, records: Vec<MovieRecord>) -> Vec<Movie> {
        let lookups = records.into_iter().map(|record| {
            let source = self.source.clone();
            async move {
                let backdrop = match &source {
                    Some(source) => source.backdrop_url(&clean_title(&record.title)).await,
                    None => None,
                };
                Movie {
                    title: record.title,
                    genres: record.genres,
                    backdrop: Some(backdrop.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
                }
            }
        });

        stream::iter(lookups)
            .buffered(LOOKUP_CONCURRENCY)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::sync::Barrier;

    struct MapSource {
        backdrops: HashMap<&'static str, &'static str>,
    }

    #[async_trait]
    impl BackdropSource for MapSource {
        async fn backdrop_url(&self, title: &str) -> Option<String> {
            self.backdrops.get(title).map(|url| url.to_string())
        }
    }

    /// Releases only once both lookups are in flight at the same time.
    struct BarrierSource {
        barrier: Barrier,
    }

    #[async_trait]
    impl BackdropSource for BarrierSource {
        async fn backdrop_url(&self, _title: &str) -> Option<String> {
            self.barrier.wait().await;
            Some("https://image.tmdb.org/t/p/original/x.jpg".to_string())
        }
    }

    fn record(title: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genres: "Action".to_string(),
        }
    }

    #[tokio::test]
    async fn test_enrich_attaches_backdrop_by_clean_title() {
        let source = MapSource {
            backdrops: HashMap::from([(
                "Inception",
                "https://image.tmdb.org/t/p/original/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg",
            )]),
        };
        let enricher = Enricher::new(Some(Arc::new(source)));

        let movies = enricher.enrich(vec![record("Inception (2010)")]).await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception (2010)");
        assert_eq!(
            movies[0].backdrop(),
            "https://image.tmdb.org/t/p/original/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg"
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_falls_back_to_placeholder() {
        let source = MapSource {
            backdrops: HashMap::new(),
        };
        let enricher = Enricher::new(Some(Arc::new(source)));

        let movies = enricher.enrich(vec![record("Unknown Film")]).await;
        assert_eq!(movies[0].backdrop(), PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_per_item_fallback_does_not_affect_siblings() {
        let source = MapSource {
            backdrops: HashMap::from([(
                "Heat",
                "https://image.tmdb.org/t/p/original/heat.jpg",
            )]),
        };
        let enricher = Enricher::new(Some(Arc::new(source)));

        let movies = enricher
            .enrich(vec![record("Unknown Film"), record("Heat (1995)")])
            .await;
        assert_eq!(movies[0].backdrop(), PLACEHOLDER_IMAGE);
        assert_eq!(movies[1].backdrop(), "https://image.tmdb.org/t/p/original/heat.jpg");
    }

    #[tokio::test]
    async fn test_enrich_preserves_input_order() {
        let enricher = Enricher::new(None);
        let movies = enricher
            .enrich(vec![record("A"), record("B"), record("C")])
            .await;
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        // Both lookups wait on the same two-party barrier; the batch can
        // only complete if they are in flight at the same time.
        let source = BarrierSource {
            barrier: Barrier::new(2),
        };
        let enricher = Enricher::new(Some(Arc::new(source)));

        let enriched = tokio::time::timeout(
            Duration::from_secs(5),
            enricher.enrich(vec![record("A"), record("B")]),
        )
        .await
        .expect("lookups did not run concurrently");
        assert_eq!(enriched.len(), 2);
    }

    #[tokio::test]
    async fn test_without_source_everything_gets_placeholder() {
        let enricher = Enricher::new(None);
        let movies = enricher.enrich(vec![record("Inception (2010)")]).await;
        assert_eq!(movies[0].backdrop(), PLACEHOLDER_IMAGE);
    }
}
