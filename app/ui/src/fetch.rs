//! One confirm cycle: recommendation fetch followed by backdrop enrichment.

use std::sync::Arc;

use async_trait::async_trait;

use recs::models::MovieRecord;
use recs::{RecsClient, RecsError};

use crate::enrich::{Enricher, Movie};

/// Source of genre recommendations.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommend(&self, genre: &str, top_n: u32) -> Result<Vec<MovieRecord>, RecsError>;
}

#[async_trait]
impl RecommendationSource for RecsClient {
    async fn recommend(&self, genre: &str, top_n: u32) -> Result<Vec<MovieRecord>, RecsError> {
        RecsClient::recommend(self, genre, top_n).await
    }
}

pub struct Loader {
    source: Arc<dyn RecommendationSource>,
    enricher: Enricher,
}

impl Loader {
    pub fn new(source: Arc<dyn RecommendationSource>, enricher: Enricher) -> Self {
        Self { source, enricher }
    }

    /// Fetch recommendations for a genre and enrich them as one batch.
    ///
    /// A fetch error aborts the cycle; enrichment never fails.
    pub async fn load(&self, genre: &str) -> Result<Vec<Movie>, RecsError> {
        let records = self
            .source
            .recommend(genre, recs::DEFAULT_TOP_N)
            .await?;
        Ok(self.enricher.enrich(records).await)
    }
}
