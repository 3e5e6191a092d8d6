use url::Url;

use crate::domain::AppError;

/// Port for fetching the installer archive.
pub trait ArchiveDownloader {
    /// Download `url` and return the response body.
    ///
    /// Transport failures, unsuccessful statuses and body read failures are
    /// all `AppError::Network`.
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
