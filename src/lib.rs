//! Listing catalog for a marketplace of second-hand and single items.
//!
//! The core is [`catalog::ListingFilter`]: a pure filter/search/sort over an
//! in-memory [`catalog::Catalog`]. Around it sit form validation, the image
//! upload client and the dashboard alert inbox.

pub mod alerts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod uploads;

pub use catalog::{Catalog, FilterForm, ListingFilter, SearchResults, SortKey};
pub use error::{MarketError, Result, UploadError, ValidationError};
pub use models::{Category, Condition, Listing, ListingStatus, Purpose};
