use crate::domain::AppError;

/// Port for the persisted Steam username.
pub trait CredentialStore {
    /// Persist `username` verbatim, replacing any previous value.
    fn save_username(&self, username: &str) -> Result<(), AppError>;

    /// Read the stored username as written.
    ///
    /// Returns `AppError::CredentialNotFound` when nothing has been stored.
    fn load_username(&self) -> Result<String, AppError>;
}
