//! GNews HTTP client.

use super::{Headline, HeadlinePage, HeadlineProvider};
use crate::errors::NewsError;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Response from the top-headlines endpoint.
#[derive(Debug, Deserialize)]
struct TopHeadlinesResponse {
    #[serde(rename = "totalArticles", alias = "totalResults", default)]
    total_articles: u64,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    description: Option<String>,
    url: String,
    image: Option<String>,
    author: Option<String>,
    published_at: Option<String>,
    source: Option<ArticleSource>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: String,
}

impl From<Article> for Headline {
    fn from(article: Article) -> Self {
        Headline {
            title: article.title.unwrap_or_default(),
            description: article.description.unwrap_or_default(),
            url: article.url,
            image: article.image,
            author: article.author,
            published_at: article.published_at,
            source_name: article.source.map(|s| s.name).unwrap_or_default(),
        }
    }
}

/// Client for the GNews API.
pub struct GNewsClient {
    base_url: String,
    api_key: String,
    country: String,
    lang: String,
    page_size: u32,
    client: Client,
}

impl GNewsClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://gnews.io/api/v4")
    /// * `api_key` - GNews API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            country: crate::constants::DEFAULT_NEWS_COUNTRY.to_string(),
            lang: crate::constants::DEFAULT_NEWS_LANG.to_string(),
            page_size: crate::constants::DEFAULT_NEWS_PAGE_SIZE,
            client: Client::new(),
        }
    }

    pub fn with_region(mut self, country: impl Into<String>, lang: impl Into<String>) -> Self {
        self.country = country.into();
        self.lang = lang.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl HeadlineProvider for GNewsClient {
    fn top_headlines(&self, category: &str, page: u32) -> Result<HeadlinePage, NewsError> {
        debug!("Fetching {} headlines, page {}", category, page);

        let url = format!("{}/top-headlines", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", category.to_string()),
                ("lang", self.lang.clone()),
                ("country", self.country.clone()),
                ("max", self.page_size.to_string()),
                ("page", page.to_string()),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .map_err(NewsError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(NewsError::Status { status, body });
        }

        let parsed: TopHeadlinesResponse = response.json().map_err(|e| {
            NewsError::InvalidResponse(format!("Failed to parse headlines response: {}", e))
        })?;

        debug!(
            "Received {} headlines of {}",
            parsed.articles.len(),
            parsed.total_articles
        );
        Ok(HeadlinePage {
            articles: parsed.articles.into_iter().map(Headline::from).collect(),
            total_results: parsed.total_articles,
        })
    }
}
