use std::path::PathBuf;

use url::Url;

use super::AppError;

/// Environment variable overriding the installer archive URL.
pub const STEAMCMD_URL_ENV: &str = "RESOPORT_STEAMCMD_URL";

/// Steam app id of the launched application.
///
/// Compiled in so a fork only has to change these constants.
pub const APP_ID: &str = "2519830";

/// Directory and executable name of the launched application.
pub const APP_NAME: &str = "Resonite";

const DEFAULT_STEAMCMD_URL: &str = "https://steamcdn-a.akamaihd.net/client/installer/steamcmd.zip";

/// Settings shared by every launcher component.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// SteamCMD install directory, relative to the working directory.
    pub installer_dir: PathBuf,
    /// Location of the SteamCMD zip archive.
    pub installer_url: Url,
    /// Steam app id passed to SteamCMD and to the application.
    pub app_id: String,
    /// Folder and executable stem under `steamapps/common/`.
    pub app_name: String,
    /// HTTP timeout for the archive download.
    pub download_timeout_secs: u64,
    /// Where the downloaded archive is staged before extraction.
    pub temp_dir: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            installer_dir: PathBuf::from(".steamcmd"),
            installer_url: default_installer_url(),
            app_id: APP_ID.to_string(),
            app_name: APP_NAME.to_string(),
            download_timeout_secs: default_timeout(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl LauncherConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = std::env::var_os(STEAMCMD_URL_ENV) {
            let raw = raw.to_string_lossy();
            config.installer_url = parse_installer_url(&raw)?;
        }
        Ok(config)
    }
}

fn parse_installer_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim()).map_err(|e| {
        AppError::config_error(format!("Invalid {} value '{}': {}", STEAMCMD_URL_ENV, raw, e))
    })
}

fn default_installer_url() -> Url {
    Url::parse(DEFAULT_STEAMCMD_URL).expect("default SteamCMD URL is valid")
}

fn default_timeout() -> u64 {
    300
}
