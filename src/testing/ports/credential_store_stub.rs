use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::CredentialStore;

#[derive(Default)]
pub struct MemoryCredentialStore {
    pub username: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(username: &str) -> Self {
        Self { username: Mutex::new(Some(username.to_string())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save_username(&self, username: &str) -> Result<(), AppError> {
        *self.username.lock().unwrap() = Some(username.to_string());
        Ok(())
    }

    fn load_username(&self) -> Result<String, AppError> {
        self.username.lock().unwrap().clone().ok_or(AppError::CredentialNotFound)
    }
}
