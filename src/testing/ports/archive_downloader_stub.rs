use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveDownloader;

/// Serves a fixed body and counts requests.
#[derive(Default)]
pub struct FakeArchiveDownloader {
    pub body: Vec<u8>,
    pub fail: bool,
    pub requests: Mutex<Vec<Url>>,
}

impl FakeArchiveDownloader {
    pub fn serving(body: Vec<u8>) -> Self {
        Self { body, ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ArchiveDownloader for FakeArchiveDownloader {
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requests.lock().unwrap().push(url.clone());
        if self.fail {
            return Err(AppError::Network {
                url: url.to_string(),
                details: "connection refused".into(),
            });
        }
        Ok(self.body.clone())
    }
}
