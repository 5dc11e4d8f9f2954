use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod labels;

pub use labels::{Category, Condition, ParseLabelError, Purpose};
pub(crate) use labels::parse_labeled;

/// Dashboard state of a listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ListingStatus::Active => "Active",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
        };
        f.write_str(label)
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub condition: Condition,
    /// Whole naira
    pub price: u64,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub purpose: Purpose,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Listing {
    /// Create a listing with empty description, no views and `created_at` set to now.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        condition: Condition,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            location: String::new(),
            condition,
            price,
            views: 0,
            created_at: Utc::now(),
            purpose: Purpose::Sell,
            status: ListingStatus::Active,
            images: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_defaults_from_json() {
        let json = r#"{
            "id": "9",
            "name": "Single Airpod (Left)",
            "description": "Compatible with Airpod 2nd gen.",
            "category": "electronics",
            "location": "Lagos",
            "condition": "used-good",
            "price": 10000,
            "created_at": "2024-05-01T10:00:00Z",
            "purpose": "sell"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.category, Category::Electronics);
        assert_eq!(listing.condition, Condition::UsedGood);
        assert_eq!(listing.views, 0);
        assert_eq!(listing.status, ListingStatus::Active);
        assert!(listing.images.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{
            "id": "1", "name": "x", "description": "", "category": "tools",
            "location": "", "condition": "new", "price": -5,
            "created_at": "2024-05-01T10:00:00Z", "purpose": "sell"
        }"#;

        assert!(serde_json::from_str::<Listing>(json).is_err());
    }
}
