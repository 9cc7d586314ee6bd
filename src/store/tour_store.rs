//! In-memory tour storage

use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::types::{Tour, TourPatch};

/// Ordered, in-memory tour catalogue.
///
/// Built once from seed data at startup and shared with the handlers.
/// Every operation holds the lock for its whole body, so a mutation is
/// never observed half-applied.
pub struct TourStore {
    tours: RwLock<Vec<Tour>>,
}

impl TourStore {
    /// Create a store from seed data, rejecting duplicate ids
    pub fn new(seed: Vec<Tour>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for tour in &seed {
            if !seen.insert(tour.id) {
                return Err(Error::DuplicateTourId(tour.id));
            }
        }

        Ok(Self {
            tours: RwLock::new(seed),
        })
    }

    /// Snapshot of every tour, in catalogue order
    pub async fn list(&self) -> Vec<Tour> {
        self.tours.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.tours.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tours.read().await.is_empty()
    }

    /// Get a tour by ID
    pub async fn find_by_id(&self, id: u64) -> Result<Tour> {
        let tours = self.tours.read().await;
        tours
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Error::TourNotFound(id.to_string()))
    }

    /// Overwrite the fields present in `patch` on the matching tour
    pub async fn update(&self, id: u64, patch: TourPatch) -> Result<Tour> {
        let mut tours = self.tours.write().await;

        let tour = tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TourNotFound(id.to_string()))?;

        if patch.is_empty() {
            tracing::debug!("Empty patch for tour {}, nothing to change", id);
        } else {
            tour.apply(patch);
            tracing::debug!("Updated tour {}: {:?}", id, tour);
        }

        Ok(tour.clone())
    }

    /// Remove the matching tour, keeping the order of the others
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut tours = self.tours.write().await;

        let index = tours
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::TourNotFound(id.to_string()))?;

        let removed = tours.remove(index);
        tracing::debug!("Deleted tour {} ({})", removed.id, removed.name);

        Ok(())
    }
}

/// Parse a path identifier into a tour id.
///
/// Anything that is not a plain unsigned integer cannot name a tour and is
/// reported as not found.
pub fn parse_tour_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| Error::TourNotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_tours;

    #[tokio::test]
    async fn test_update_price_keeps_name() {
        let store = TourStore::new(default_tours()).unwrap();

        let patch = TourPatch {
            price: Some(149.99),
            ..Default::default()
        };
        let updated = store.update(0, patch).await.unwrap();

        assert_eq!(updated, Tour::new(0, "HoodRiver", 149.99));
        assert_eq!(store.find_by_id(0).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_name_only() {
        let store = TourStore::new(default_tours()).unwrap();

        let patch = TourPatch {
            name: Some("Columbia Gorge".into()),
            ..Default::default()
        };
        store.update(1, patch).await.unwrap();

        let tour = store.find_by_id(1).await.unwrap();
        assert_eq!(tour.name, "Columbia Gorge");
        assert_eq!(tour.price, 149.95);
    }

    #[tokio::test]
    async fn test_empty_patch_is_noop() {
        let store = TourStore::new(default_tours()).unwrap();

        store.update(0, TourPatch::default()).await.unwrap();

        assert_eq!(store.list().await, default_tours());
    }

    #[tokio::test]
    async fn test_update_missing_tour() {
        let store = TourStore::new(default_tours()).unwrap();

        let result = store.update(42, TourPatch::default()).await;
        assert!(matches!(result, Err(Error::TourNotFound(id)) if id == "42"));
        assert_eq!(store.list().await, default_tours());
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let store = TourStore::new(default_tours()).unwrap();

        store.delete(0).await.unwrap();
        let remaining = store.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);

        let again = store.delete(0).await;
        assert!(matches!(again, Err(Error::TourNotFound(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let store = TourStore::new(vec![
            Tour::new(3, "A", 1.0),
            Tour::new(7, "B", 2.0),
            Tour::new(5, "C", 3.0),
        ])
        .unwrap();

        store.delete(7).await.unwrap();

        let ids: Vec<u64> = store.list().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[tokio::test]
    async fn test_list_is_stable() {
        let store = TourStore::new(default_tours()).unwrap();
        assert_eq!(store.list().await, store.list().await);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = TourStore::new(default_tours()).unwrap();

        assert_eq!(store.find_by_id(1).await.unwrap().name, "OregonCoast");
        assert!(store.find_by_id(2).await.is_err());
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let seed = vec![Tour::new(1, "A", 1.0), Tour::new(1, "B", 2.0)];
        assert!(matches!(TourStore::new(seed), Err(Error::DuplicateTourId(1))));
    }

    #[test]
    fn test_parse_tour_id() {
        assert_eq!(parse_tour_id("0").unwrap(), 0);
        assert_eq!(parse_tour_id("17").unwrap(), 17);
        assert!(matches!(parse_tour_id("abc"), Err(Error::TourNotFound(s)) if s == "abc"));
        assert!(parse_tour_id("-1").is_err());
        assert!(parse_tour_id("1.5").is_err());
        assert!(parse_tour_id("").is_err());
    }
}
