//! Browse top headlines with search, paging and favorites.

use crate::errors::{AppResult, NewsError};
use crate::news::{
    headline_title, search_headlines, Favorites, Headline, HeadlineProvider, Pagination,
};
use crate::storage::KeyValueStore;
use tracing::{debug, info};

/// What to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineQuery {
    pub category: String,
    pub page: u32,
    pub page_size: u32,
    /// Title filter applied to the fetched page.
    pub search: Option<String>,
    /// 1-based position in the shown list whose favorite flag to flip.
    pub toggle_favorite: Option<usize>,
}

/// One rendered page of headlines.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineView {
    pub title: String,
    pub pagination: Pagination,
    /// Shown headlines with their favorite flag.
    pub articles: Vec<(Headline, bool)>,
    /// Headline whose favorite flag was flipped, and its new state.
    pub toggled: Option<(Headline, bool)>,
}

/// Fetches a page of headlines and applies search and favorite toggling.
///
/// # Errors
///
/// Returns an error if the provider fails, if `toggle_favorite` does not name a
/// shown headline, or if favorites cannot be saved.
pub fn browse_headlines<P, S>(
    provider: &P,
    store: &mut S,
    query: &HeadlineQuery,
) -> AppResult<HeadlineView>
where
    P: HeadlineProvider + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let page = query.page.max(1);
    let fetched = provider.top_headlines(&query.category, page)?;
    let pagination = Pagination {
        page,
        ..Pagination::new(query.page_size)
    }
    .with_total(fetched.total_results);

    let shown = match query.search.as_deref() {
        Some(needle) => search_headlines(&fetched.articles, needle),
        None => fetched.articles,
    };
    debug!("Showing {} headlines", shown.len());

    let mut favorites = Favorites::load(&*store);
    let toggled = match query.toggle_favorite {
        Some(index) => {
            let headline = index
                .checked_sub(1)
                .and_then(|i| shown.get(i))
                .ok_or(NewsError::NoSuchHeadline {
                    index,
                    available: shown.len(),
                })?;
            let now_favorite = favorites.toggle(headline, store)?;
            info!("Favorite toggled for {}", headline.url);
            Some((headline.clone(), now_favorite))
        }
        None => None,
    };

    let articles = shown
        .into_iter()
        .map(|headline| {
            let favorite = favorites.is_favorite(&headline.url);
            (headline, favorite)
        })
        .collect();

    Ok(HeadlineView {
        title: headline_title(&query.category),
        pagination,
        articles,
        toggled,
    })
}
