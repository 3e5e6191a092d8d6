use std::path::{Path, PathBuf};

use crate::domain::{LauncherConfig, paths};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// Application context holding configuration and dependencies for command execution.
pub struct AppContext<R: ProcessRunner, C: CredentialStore, D: ArchiveDownloader> {
    root: PathBuf,
    config: LauncherConfig,
    runner: R,
    credentials: C,
    downloader: D,
}

impl<R: ProcessRunner, C: CredentialStore, D: ArchiveDownloader> AppContext<R, C, D> {
    /// Create a new application context rooted at `root`.
    pub fn new(
        root: PathBuf,
        config: LauncherConfig,
        runner: R,
        credentials: C,
        downloader: D,
    ) -> Self {
        Self { root, config, runner, credentials, downloader }
    }

    /// Working directory the launcher operates in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// `<root>/<installer-dir>/`
    pub fn installer_dir(&self) -> PathBuf {
        paths::installer_dir(&self.root, &self.config)
    }

    /// `<root>/<installer-dir>/steamcmd.exe`
    pub fn steamcmd_exe(&self) -> PathBuf {
        paths::steamcmd_exe(&self.root, &self.config)
    }

    /// `<root>/<installer-dir>/steamapps/common/<App>/<App>.exe`
    pub fn app_exe(&self) -> PathBuf {
        paths::app_exe(&self.root, &self.config)
    }
}
