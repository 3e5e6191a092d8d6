//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::archive_client_http::HttpArchiveClient;
use crate::adapters::credential_file::FileCredentialStore;
use crate::adapters::process_command::CommandProcessRunner;
use crate::app::{
    AppContext,
    commands::{ensure_installer, login, start, update},
};
use crate::domain::{LauncherConfig, paths};

pub use crate::app::commands::ensure_installer::InstallerStatus;
pub use crate::app::commands::start::StartOutcome;
pub use crate::domain::AppError;

type SystemContext = AppContext<CommandProcessRunner, FileCredentialStore, HttpArchiveClient>;

/// Create an `AppContext` backed by the real process, file and HTTP adapters.
fn create_context(root: PathBuf, config: LauncherConfig) -> Result<SystemContext, AppError> {
    let credentials = FileCredentialStore::new(paths::username_file(&root, &config));
    let downloader = HttpArchiveClient::new(&config)?;
    Ok(AppContext::new(root, config, CommandProcessRunner::new(), credentials, downloader))
}

fn current_root() -> Result<PathBuf, AppError> {
    std::env::current_dir()
        .map_err(|e| AppError::PathResolution(format!("current directory: {}", e)))
}

/// Install on first run, otherwise launch, in the current directory.
pub fn start() -> Result<StartOutcome, AppError> {
    start_at(current_root()?, LauncherConfig::from_env()?)
}

/// Install on first run, otherwise launch, at the specified path.
pub fn start_at(root: PathBuf, config: LauncherConfig) -> Result<StartOutcome, AppError> {
    let ctx = create_context(root, config)?;
    start::execute(&ctx)
}

/// Update and validate the application in the current directory.
pub fn update() -> Result<(), AppError> {
    update_at(current_root()?, LauncherConfig::from_env()?)
}

/// Update and validate the application at the specified path.
pub fn update_at(root: PathBuf, config: LauncherConfig) -> Result<(), AppError> {
    let ctx = create_context(root, config)?;
    update::execute(&ctx)
}

/// Store `username` and log in to SteamCMD from the current directory.
pub fn login(username: &str, password: Option<&str>) -> Result<(), AppError> {
    login_at(current_root()?, LauncherConfig::from_env()?, username, password)
}

/// Store `username` and log in to SteamCMD at the specified path.
pub fn login_at(
    root: PathBuf,
    config: LauncherConfig,
    username: &str,
    password: Option<&str>,
) -> Result<(), AppError> {
    let ctx = create_context(root, config)?;
    login::execute(&ctx, username, password)
}

/// Download SteamCMD into the installer directory at the specified path if missing.
pub fn ensure_installer_at(
    root: PathBuf,
    config: LauncherConfig,
) -> Result<InstallerStatus, AppError> {
    let ctx = create_context(root, config)?;
    ensure_installer::execute(&ctx)
}
