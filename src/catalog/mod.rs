//! In-memory listing store.
//!
//! The catalog is seeded once, either from the built-in mock listings or
//! from a JSON file, and is never written back. Deletes and status changes
//! last only as long as the `Catalog` value.

pub mod filter;
pub mod seed;

use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{MarketError, Result};
use crate::forms::ValidatedDraft;
use crate::models::{Listing, ListingStatus};

pub use filter::{FilterForm, ListingFilter, SearchResults, SortKey, NO_RESULTS_MESSAGE};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(MarketError::DuplicateListing(listing.id.clone()));
            }
        }
        Ok(Self { listings })
    }

    /// Catalog of the built-in mock listings
    pub fn seeded() -> Self {
        Self {
            listings: seed::mock_listings(Utc::now()),
        }
    }

    /// Load a JSON array of listings
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading catalog from {}", path.display());

        let raw = tokio::fs::read_to_string(path).await?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;
        let catalog = Self::from_listings(listings)?;

        info!("Loaded {} listings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or_else(|| MarketError::ListingNotFound(id.to_string()))
    }

    pub fn search(&self, filter: &ListingFilter) -> SearchResults<'_> {
        filter.apply(&self.listings)
    }

    pub fn insert(&mut self, listing: Listing) -> Result<()> {
        if self.listings.iter().any(|existing| existing.id == listing.id) {
            return Err(MarketError::DuplicateListing(listing.id));
        }
        self.listings.push(listing);
        Ok(())
    }

    /// Store a validated draft under the next free numeric id
    pub fn publish(&mut self, draft: ValidatedDraft, image_urls: Vec<String>) -> Result<&Listing> {
        let id = self.next_id()?;
        let listing = Listing {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            condition: draft.condition,
            price: draft.price,
            views: 0,
            created_at: Utc::now(),
            purpose: draft.purpose,
            status: ListingStatus::Active,
            images: image_urls,
        };

        info!(id = %id, name = %listing.name, "Published listing");
        self.insert(listing)?;
        self.get(&id)
    }

    pub fn remove(&mut self, id: &str) -> Result<Listing> {
        let index = self
            .listings
            .iter()
            .position(|listing| listing.id == id)
            .ok_or_else(|| MarketError::ListingNotFound(id.to_string()))?;

        debug!(id, "Removed listing");
        Ok(self.listings.remove(index))
    }

    pub fn set_status(&mut self, id: &str, status: ListingStatus) -> Result<()> {
        let listing = self
            .listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or_else(|| MarketError::ListingNotFound(id.to_string()))?;

        debug!(id, %status, "Changed listing status");
        listing.status = status;
        Ok(())
    }

    /// One past the highest numeric id, or the lowest free one once `u64::MAX` is taken
    fn next_id(&self) -> Result<String> {
        let taken: HashSet<u64> = self
            .listings
            .iter()
            .filter_map(|listing| listing.id.parse::<u64>().ok())
            .collect();
        let highest = taken.iter().copied().max().unwrap_or(0);

        highest
            .checked_add(1)
            .or_else(|| (1..=u64::MAX).find(|id| !taken.contains(id)))
            .map(|id| id.to_string())
            .ok_or(MarketError::IdsExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Condition, Purpose};

    fn validated(name: &str) -> ValidatedDraft {
        ValidatedDraft {
            name: name.to_string(),
            description: "Right side AirPod Pro, second generation.".to_string(),
            category: Category::Electronics,
            price: 9_000,
            location: "Lagos".to_string(),
            condition: Condition::UsedGood,
            purpose: Purpose::Sell,
            images: vec![],
        }
    }

    #[test]
    fn test_seeded_ids_unique() {
        let catalog = Catalog::seeded();
        assert!(!catalog.is_empty());
        assert!(Catalog::from_listings(catalog.listings().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let listings = vec![
            Listing::new("1", "Chair", Category::Furniture, Condition::New, 1),
            Listing::new("1", "Table", Category::Furniture, Condition::New, 2),
        ];
        assert!(matches!(
            Catalog::from_listings(listings),
            Err(MarketError::DuplicateListing(id)) if id == "1"
        ));
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::seeded();
        let err = catalog.get("999").unwrap_err();
        assert_eq!(err.to_string(), "Item not found: 999");
    }

    #[test]
    fn test_remove_and_status() {
        let mut catalog = Catalog::seeded();
        let before = catalog.len();

        catalog.set_status("2", ListingStatus::Sold).unwrap();
        assert_eq!(catalog.get("2").unwrap().status, ListingStatus::Sold);

        let removed = catalog.remove("2").unwrap();
        assert_eq!(removed.name, "Electric Drill");
        assert_eq!(catalog.len(), before - 1);
        assert!(catalog.remove("2").is_err());
        assert!(catalog.set_status("2", ListingStatus::Active).is_err());
    }

    #[test]
    fn test_publish_assigns_next_id() {
        let mut catalog = Catalog::seeded();
        let highest = catalog
            .listings()
            .iter()
            .filter_map(|listing| listing.id.parse::<u64>().ok())
            .max()
            .unwrap();

        let listing = catalog
            .publish(validated("Right Airpod Pro"), vec!["http://img/1.png".to_string()])
            .unwrap();

        assert_eq!(listing.id, (highest + 1).to_string());
        assert_eq!(listing.images, vec!["http://img/1.png".to_string()]);
        assert_eq!(listing.status, ListingStatus::Active);
    }

    #[test]
    fn test_publish_skips_gaps_and_non_numeric_ids() {
        let mut catalog = Catalog::from_listings(vec![
            Listing::new("2", "Chair", Category::Furniture, Condition::New, 1),
            Listing::new("lagos-17", "Table", Category::Furniture, Condition::New, 2),
            Listing::new("40", "Lamp", Category::Furniture, Condition::New, 3),
        ])
        .unwrap();

        let id = catalog.publish(validated("Stool"), vec![]).unwrap().id.clone();
        assert_eq!(id, "41");

        let mut words_only = Catalog::from_listings(vec![Listing::new(
            "drill",
            "Drill",
            Category::Tools,
            Condition::New,
            50,
        )])
        .unwrap();
        assert_eq!(words_only.publish(validated("Saw"), vec![]).unwrap().id, "1");
    }

    #[test]
    fn test_publish_after_max_id_reuses_lowest_free() {
        let mut catalog = Catalog::from_listings(vec![
            Listing::new(u64::MAX.to_string(), "Last", Category::Toys, Condition::New, 1),
            Listing::new("1", "First", Category::Toys, Condition::New, 1),
        ])
        .unwrap();

        let listing = catalog.publish(validated("Next"), vec![]).unwrap();
        assert_eq!(listing.id, "2");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_insert_rejects_existing_id() {
        let mut catalog = Catalog::seeded();
        let dup = Listing::new("3", "Other", Category::Toys, Condition::New, 5);
        assert!(catalog.insert(dup).is_err());
    }

    #[test]
    fn test_search_scoped_to_store() {
        let catalog = Catalog::seeded();
        let results = catalog.search(&ListingFilter::new().category(Category::Accessories));
        assert_eq!(results.ids(), vec!["3", "7"]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let listings = Catalog::seeded().listings().to_vec();
        std::fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

        let catalog = Catalog::load(&path).await.unwrap();
        assert_eq!(catalog.listings(), listings.as_slice());
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Catalog::load(&path).await,
            Err(MarketError::MalformedCatalog(_))
        ));
        assert!(matches!(
            Catalog::load(dir.path().join("missing.json")).await,
            Err(MarketError::Io(_))
        ));
    }
}
