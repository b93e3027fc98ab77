//! Favorite headlines, keyed by URL and persisted to the `favoriteHeadlines` slot.

use super::Headline;
use crate::constants::FAVORITES_SLOT;
use crate::errors::{AppResult, StorageError};
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    items: Vec<Headline>,
}

impl Favorites {
    /// Loads saved favorites; absent or malformed data yields none.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let items = match store.get(FAVORITES_SLOT) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed '{}' slot: {}", FAVORITES_SLOT, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read '{}' slot: {}", FAVORITES_SLOT, e);
                Vec::new()
            }
        };
        Favorites { items }
    }

    pub fn is_favorite(&self, url: &str) -> bool {
        self.items.iter().any(|item| item.url == url)
    }

    /// Adds the headline, or removes it if it is already a favorite, then persists.
    ///
    /// Returns whether the headline is a favorite afterwards.
    pub fn toggle<S: KeyValueStore + ?Sized>(
        &mut self,
        headline: &Headline,
        store: &mut S,
    ) -> AppResult<bool> {
        let now_favorite = if self.is_favorite(&headline.url) {
            self.items.retain(|item| item.url != headline.url);
            false
        } else {
            self.items.push(headline.clone());
            true
        };

        let serialized =
            serde_json::to_string(&self.items).map_err(|source| StorageError::Serialize {
                slot: FAVORITES_SLOT.to_string(),
                source,
            })?;
        store.set(FAVORITES_SLOT, &serialized)?;

        debug!("Favorites now hold {} headlines", self.items.len());
        Ok(now_favorite)
    }

    pub fn items(&self) -> &[Headline] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::tests::headline;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::load(&store);
        let item = headline("Story", "https://story");

        assert!(favorites.toggle(&item, &mut store).unwrap());
        assert!(favorites.is_favorite("https://story"));

        assert!(!favorites.toggle(&item, &mut store).unwrap());
        assert!(!favorites.is_favorite("https://story"));
        assert!(favorites.items().is_empty());
    }

    #[test]
    fn test_favorites_survive_reload() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::load(&store);
        favorites
            .toggle(&headline("A", "https://a"), &mut store)
            .unwrap();
        favorites
            .toggle(&headline("B", "https://b"), &mut store)
            .unwrap();

        let reloaded = Favorites::load(&store);
        assert_eq!(reloaded, favorites);
        assert_eq!(reloaded.items()[0].url, "https://a");
    }

    #[test]
    fn test_malformed_favorites_load_empty() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_SLOT, "[{]").unwrap();
        assert!(Favorites::load(&store).items().is_empty());
    }
}
