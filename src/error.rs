use thiserror::Error;

use crate::models::ParseLabelError;

/// A submitted form that cannot be accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all required fields. Missing: {0}")]
    MissingField(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please upload at least one image.")]
    NoImages,

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Item not found: {0}")]
    ListingNotFound(String),

    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    #[error("Duplicate listing id: {0}")]
    DuplicateListing(String),

    #[error("No free listing id left")]
    IdsExhausted,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidLabel(#[from] ParseLabelError),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;

/// Failure to upload a single image
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Upload failed: {message}")]
    Rejected { status: u16, message: String },

    #[error("Upload response did not include a url")]
    MissingUrl,

    #[error("Upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not read image: {0}")]
    Io(#[from] std::io::Error),
}
