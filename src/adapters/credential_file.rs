use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::CredentialStore;

/// Username stored as a plain text file next to SteamCMD.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn save_username(&self, username: &str) -> Result<(), AppError> {
        // `login` may run before SteamCMD has been downloaded.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, username)?;
        Ok(())
    }

    fn load_username(&self) -> Result<String, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::CredentialNotFound),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
