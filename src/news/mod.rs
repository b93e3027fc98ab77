//! Headline browser: top headlines by category, title search, paging and
//! favorites.
//!
//! # Module Structure
//!
//! - `gnews`: HTTP client for the GNews top-headlines API
//! - `favorites`: persisted favorite headlines

pub mod favorites;
pub mod gnews;

pub use favorites::Favorites;
pub use gnews::GNewsClient;

use crate::constants::NEWS_TITLE_SUFFIX;
use crate::errors::NewsError;
use serde::{Deserialize, Serialize};

/// One headline as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source_name: String,
}

impl Headline {
    /// Author for display; `Unknown` when the provider gave none.
    pub fn display_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|author| !author.is_empty())
            .unwrap_or("Unknown")
    }
}

/// One page of headlines plus the provider's total result count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlinePage {
    pub articles: Vec<Headline>,
    pub total_results: u64,
}

/// Source of top headlines.
pub trait HeadlineProvider {
    fn top_headlines(&self, category: &str, page: u32) -> Result<HeadlinePage, NewsError>;
}

/// Headlines whose title contains `query`, ignoring case.
///
/// An empty query keeps everything. The input list is left as it was.
pub fn search_headlines(articles: &[Headline], query: &str) -> Vec<Headline> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| article.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Title of the headline view for a category, e.g. `Sports - NeighborGood News`.
pub fn headline_title(category: &str) -> String {
    format!("{} - {}", capitalize_first(category), NEWS_TITLE_SUFFIX)
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Page position within a result set. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_results: u64,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Pagination {
            page: 1,
            page_size,
            total_results: 0,
        }
    }

    /// Number of pages, rounding up. Zero when there are no results.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_results.div_ceil(u64::from(self.page_size))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }

    /// The following page, or unchanged on the last page.
    pub fn next_page(self) -> Self {
        if self.has_next() {
            Pagination {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// The preceding page, or unchanged on the first page.
    pub fn previous_page(self) -> Self {
        if self.has_previous() {
            Pagination {
                page: self.page - 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn with_total(self, total_results: u64) -> Self {
        Pagination {
            total_results,
            ..self
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn headline(title: &str, url: &str) -> Headline {
        Headline {
            title: title.to_string(),
            description: String::new(),
            url: url.to_string(),
            image: None,
            author: None,
            published_at: None,
            source_name: "Wire".to_string(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_and_pure() {
        let articles = vec![
            headline("Rust 2.0 released", "https://a"),
            headline("Local team wins", "https://b"),
            headline("Why RUST matters", "https://c"),
        ];
        let found = search_headlines(&articles, "rust");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].url, "https://a");
        assert_eq!(found[1].url, "https://c");
        assert_eq!(articles.len(), 3);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let articles = vec![headline("One", "https://1"), headline("Two", "https://2")];
        assert_eq!(search_headlines(&articles, ""), articles);
    }

    #[test]
    fn test_headline_title() {
        assert_eq!(headline_title("sports"), "Sports - NeighborGood News");
        assert_eq!(headline_title(""), " - NeighborGood News");
    }

    #[test]
    fn test_display_author() {
        let mut item = headline("t", "u");
        assert_eq!(item.display_author(), "Unknown");
        item.author = Some(String::new());
        assert_eq!(item.display_author(), "Unknown");
        item.author = Some("Ada".to_string());
        assert_eq!(item.display_author(), "Ada");
    }

    #[test]
    fn test_pagination_bounds() {
        let pages = Pagination::new(8).with_total(20);
        assert_eq!(pages.page_count(), 3);
        assert!(!pages.has_previous());
        assert!(pages.has_next());

        let last = pages.next_page().next_page();
        assert_eq!(last.page, 3);
        assert!(!last.has_next());
        assert_eq!(last.next_page().page, 3);

        assert_eq!(last.previous_page().page, 2);
        assert_eq!(pages.previous_page().page, 1);
    }

    #[test]
    fn test_pagination_without_results() {
        let pages = Pagination::new(8);
        assert_eq!(pages.page_count(), 0);
        assert!(!pages.has_next());
        assert!(!pages.has_previous());
    }
}
