pub mod config;
pub mod error;
pub mod installer_args;
pub mod launch_layout;
pub mod paths;

pub use config::{APP_ID, APP_NAME, LauncherConfig, STEAMCMD_URL_ENV};
pub use error::AppError;
pub use installer_args::{InstallerArgs, LOGIN_DIRECTIVE};
pub use launch_layout::LaunchLayout;
