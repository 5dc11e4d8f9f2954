//! Form submissions: contacting a seller, setting an alert, listing an item.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::error::{Result, ValidationError};
use crate::models::{Category, Condition, Purpose};

pub const CONTACT_SENT: &str = "Message sent to seller!";
pub const ALERT_CREATED: &str = "Alert Created! We'll notify you when we find a match.";

fn require(field: &'static str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> std::result::Result<(), ValidationError> {
    require("email", value)?;
    match value.trim().split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Message to the seller of a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub listing_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("message", &self.message)
    }

    /// Validate and acknowledge. Nothing is delivered anywhere.
    pub fn submit(&self) -> std::result::Result<&'static str, ValidationError> {
        self.validate()?;
        info!(listing_id = %self.listing_id, email = %self.email, "Contact form submitted");
        Ok(CONTACT_SENT)
    }
}

/// Request to be told when an item shows up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertRequest {
    pub email: String,
    pub item: String,
}

impl AlertRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_email(&self.email)?;
        require("item", &self.item)
    }

    pub fn submit(&self) -> std::result::Result<&'static str, ValidationError> {
        self.validate()?;
        info!(email = %self.email, item = %self.item, "Alert created");
        Ok(ALERT_CREATED)
    }
}

/// New listing exactly as entered, before upload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Empty means free
    pub price: String,
    pub location: String,
    pub condition: String,
    pub purpose: String,
    pub images: Vec<PathBuf>,
}

/// A draft that passed validation and is ready to publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: u64,
    pub location: String,
    pub condition: Condition,
    pub purpose: Purpose,
    pub images: Vec<PathBuf>,
}

impl ListingDraft {
    pub fn validate(&self) -> Result<ValidatedDraft> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        require("category", &self.category)?;
        require("location", &self.location)?;
        require("condition", &self.condition)?;
        require("purpose", &self.purpose)?;

        if self.images.is_empty() {
            return Err(ValidationError::NoImages.into());
        }

        Ok(ValidatedDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.parse()?,
            price: parse_price(&self.price)?,
            location: self.location.trim().to_string(),
            condition: self.condition.parse()?,
            purpose: self.purpose.parse()?,
            images: self.images.clone(),
        })
    }
}

/// Whole naira; thousands separators and a leading ₦ are accepted.
fn parse_price(input: &str) -> std::result::Result<u64, ValidationError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₦')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Ok(0);
    }

    cleaned
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(input.to_string()))
}
