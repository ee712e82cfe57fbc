use crate::{
    models::{MovieSummary, PaginatedResponse},
    TmdbClient,
};

#[derive(Debug, Default)]
pub struct SearchMovieParams {
    pub query: String,
    /// 1-based page number; zero is treated as the first page.
    pub page: i64,
}

impl TmdbClient {
    pub async fn search_movie(
        &self,
        params: SearchMovieParams,
    ) -> crate::Result<PaginatedResponse<MovieSummary>> {
        let url = self.url("/search/movie");
        let page = params.page.max(1).to_string();

        let response = self
            .get(&url)
            .query(&[
                ("query", params.query.as_str()),
                ("include_adult", "false"),
                ("language", self.lang.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
