use std::path::Path;

use async_trait::async_trait;

use crate::error::UploadError;

/// Common trait for image upload targets
/// The batch logic only sees this, so a local stub can stand in for the HTTP endpoint
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload one file and return the URL it is served from
    async fn upload(&self, file: &Path) -> Result<String, UploadError>;

    /// Where uploads are sent
    fn endpoint(&self) -> &str;
}
