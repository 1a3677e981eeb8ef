// ── Listing store ──
//
// Holds the full fetched listing set (immutable snapshot, replaced only
// by a fresh fetch) and the currently active filtered subset. There is
// no invalidation: a new full set only arrives on restart.

use std::sync::Arc;

use tracing::debug;

use homeport_api::Listing;

use crate::filter::{FilterCriteria, filter_listings};

/// The full listing set plus its active filtered subset.
///
/// The subset is always recomputed from the full set, never edited
/// incrementally, so it is a consistent cut of the snapshot at all times.
#[derive(Debug, Default)]
pub struct ListingStore {
    all: Arc<Vec<Arc<Listing>>>,
    filtered: Vec<Arc<Listing>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full set with a fresh fetch. The filtered subset is
    /// reinitialized per `criteria` (pass the current criteria so an
    /// already-active filter survives a load).
    pub fn set_all(&mut self, listings: Arc<Vec<Arc<Listing>>>, criteria: FilterCriteria) {
        self.all = listings;
        self.apply(criteria);
    }

    /// Synchronously recompute the filtered subset from the full set.
    /// Replaces the subset wholesale; the full set is untouched.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.filtered = filter_listings(&self.all, criteria);
        debug!(
            total = self.all.len(),
            matched = self.filtered.len(),
            "filter applied"
        );
    }

    /// The full fetched set.
    pub fn all(&self) -> &Arc<Vec<Arc<Listing>>> {
        &self.all
    }

    /// The active filtered subset.
    pub fn filtered(&self) -> &[Arc<Listing>] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filter::PriceBracket;

    fn snapshot(items: Vec<Listing>) -> Arc<Vec<Arc<Listing>>> {
        Arc::new(items.into_iter().map(Arc::new).collect())
    }

    fn listing(id: i64, price: f64) -> Listing {
        Listing {
            id,
            name: format!("Listing {id}"),
            description: String::new(),
            price,
            image_url: None,
            house_type_id: 1,
            house_type: None,
            agent: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn set_all_starts_unfiltered() {
        let mut store = ListingStore::new();
        store.set_all(
            snapshot(vec![listing(1, 100.0), listing(2, 200.0)]),
            FilterCriteria::default(),
        );

        assert_eq!(store.total_count(), 2);
        assert_eq!(store.filtered_count(), 2);
    }

    #[test]
    fn apply_replaces_subset_and_preserves_full_set() {
        let mut store = ListingStore::new();
        store.set_all(
            snapshot(vec![listing(1, 250_000.0), listing(2, 750_000.0)]),
            FilterCriteria::default(),
        );

        store.apply(FilterCriteria {
            house_type: None,
            price: Some(PriceBracket::Under300k),
        });
        assert_eq!(store.filtered_count(), 1);
        assert_eq!(store.filtered()[0].id, 1);
        // Filtering never mutates the full set.
        assert_eq!(store.total_count(), 2);

        // Unset criteria restore the whole snapshot.
        store.apply(FilterCriteria::default());
        assert_eq!(store.filtered_count(), 2);
    }

    #[test]
    fn active_filter_survives_a_load() {
        let mut store = ListingStore::new();
        let criteria = FilterCriteria {
            house_type: None,
            price: Some(PriceBracket::OnePlusMillion),
        };
        store.set_all(
            snapshot(vec![listing(1, 900_000.0), listing(2, 1_100_000.0)]),
            criteria,
        );

        assert_eq!(store.filtered_count(), 1);
        assert_eq!(store.filtered()[0].id, 2);
    }

    #[test]
    fn empty_full_set_yields_empty_subset() {
        let mut store = ListingStore::new();
        store.set_all(snapshot(Vec::new()), FilterCriteria::default());

        assert_eq!(store.total_count(), 0);
        assert!(store.filtered().is_empty());
    }
}
