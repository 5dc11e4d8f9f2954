//! Narrowing and ordering of a listing collection.
//!
//! Every active predicate must hold for a listing to be kept. Predicates that
//! are unset impose no constraint, and an empty search term matches every
//! listing. Sorting is stable, so listings with equal keys keep the order
//! they had in the input; without a sort key the input order is returned.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::models::{parse_labeled, Category, Condition, Listing, ParseLabelError};

/// Shown in place of results when nothing matches
pub const NO_RESULTS_MESSAGE: &str = "No items found. Try changing your filters!";

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first
    Newest,
    PriceAsc,
    PriceDesc,
    MostViewed,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::MostViewed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::MostViewed => "most-viewed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::MostViewed => "Most viewed",
        }
    }

    fn sort(&self, items: &mut [&Listing]) {
        match self {
            SortKey::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::PriceAsc => items.sort_by_key(|listing| listing.price),
            SortKey::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::MostViewed => items.sort_by(|a, b| b.views.cmp(&a.views)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled("sort key", s, &SortKey::ALL, |k| {
            let alias = match k {
                SortKey::Newest => "recent",
                SortKey::PriceAsc => "price",
                SortKey::PriceDesc => "price-high",
                SortKey::MostViewed => "views",
            };
            [k.key(), k.label(), alias]
        })
    }
}

/// Typed filter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub search_term: String,
    /// Also match the search term against the description
    pub search_description: bool,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub condition: Option<Condition>,
    pub price_min: u64,
    pub price_max: Option<u64>,
    pub sort: Option<SortKey>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn include_description(mut self) -> Self {
        self.search_description = true;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// A blank location clears the constraint
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn price_min(mut self, min: u64) -> Self {
        self.price_min = min;
        self
    }

    pub fn price_max(mut self, max: u64) -> Self {
        self.price_max = Some(max);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// True when no predicate and no ordering is set
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_none()
            && self.location.is_none()
            && self.condition.is_none()
            && self.price_min == 0
            && self.price_max.is_none()
            && self.sort.is_none()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_needle(listing, &self.search_term.to_lowercase())
    }

    fn matches_needle(&self, listing: &Listing, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || listing.name.to_lowercase().contains(needle)
            || (self.search_description && listing.description.to_lowercase().contains(needle));
        let matches_category = self.category.map_or(true, |c| listing.category == c);
        let matches_location = self
            .location
            .as_deref()
            .map_or(true, |l| listing.location == l);
        let matches_condition = self.condition.map_or(true, |c| listing.condition == c);
        let matches_price = listing.price >= self.price_min
            && self.price_max.map_or(true, |max| listing.price <= max);

        matches_search && matches_category && matches_location && matches_condition && matches_price
    }

    /// Filter and order `listings` without touching the input
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> SearchResults<'a> {
        let needle = self.search_term.to_lowercase();
        let mut items: Vec<&Listing> = listings
            .iter()
            .filter(|listing| self.matches_needle(listing, &needle))
            .collect();

        if let Some(key) = self.sort {
            key.sort(&mut items);
        }

        debug!(
            matched = items.len(),
            total = listings.len(),
            sort = ?self.sort,
            "Applied listing filter"
        );

        SearchResults {
            items,
            total: listings.len(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw filter input as a form submits it, where an empty string means "no filter"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub search: String,
    pub category: String,
    pub location: String,
    pub condition: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort: String,
    pub in_description: bool,
}

impl TryFrom<FilterForm> for ListingFilter {
    type Error = ParseLabelError;

    fn try_from(form: FilterForm) -> Result<Self, Self::Error> {
        fn optional<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
            let value = value.trim();
            if value.is_empty() {
                Ok(None)
            } else {
                value.parse().map(Some)
            }
        }

        Ok(ListingFilter {
            search_term: form.search,
            search_description: form.in_description,
            category: optional(&form.category)?,
            location: non_blank(form.location),
            condition: optional(&form.condition)?,
            price_min: form.min_price.unwrap_or(0),
            price_max: form.max_price,
            sort: optional(&form.sort)?,
        })
    }
}

/// Listings that passed a filter, borrowed from the collection they came from
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    items: Vec<&'a Listing>,
    total: usize,
}

impl<'a> SearchResults<'a> {
    pub fn items(&self) -> &[&'a Listing] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size of the collection the results were drawn from
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|listing| listing.id.as_str()).collect()
    }

    /// "No items found" message when nothing matched
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_RESULTS_MESSAGE)
    }

    pub fn to_owned_listings(&self) -> Vec<Listing> {
        self.items.iter().map(|&listing| listing.clone()).collect()
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.empty_message() {
            Some(message) => f.write_str(message),
            None => write!(f, "Showing {} of {} items", self.len(), self.total),
        }
    }
}
