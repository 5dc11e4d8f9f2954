pub mod http;
pub mod traits;

pub use http::{HttpUploader, DEFAULT_UPLOAD_URL};
pub use traits::ImageUploader;

use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of uploading a batch of images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
    pub failed: Vec<UploadFailure>,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Percent shown on the progress bar once the uploads are done: 10 at start, up to 70
    pub fn progress(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 10;
        }
        let share = (self.uploaded.len() * 60 + total / 2) / total;
        10 + share as u8
    }
}

impl fmt::Display for UploadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(f, "{}/{} images uploaded.", self.uploaded.len(), self.total())
        } else {
            write!(
                f,
                "Some images failed to upload. Only {}/{} uploaded.",
                self.uploaded.len(),
                self.total()
            )
        }
    }
}

/// Upload files one after another. A failed file is logged and skipped;
/// the rest are still attempted.
pub async fn upload_batch<U>(uploader: &U, files: &[PathBuf]) -> UploadReport
where
    U: ImageUploader + ?Sized,
{
    info!("Uploading {} images to {}", files.len(), uploader.endpoint());
    let mut report = UploadReport::default();

    for file in files {
        match uploader.upload(file).await {
            Ok(url) => {
                info!("✅ Uploaded {} -> {}", file.display(), url);
                report.uploaded.push(url);
            }
            Err(e) => {
                warn!("Image upload failed for {}: {}", file.display(), e);
                report.failed.push(UploadFailure {
                    file: file.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
