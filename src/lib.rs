//! resoport: portable Resonite launcher driving SteamCMD.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InstallerStatus, StartOutcome, ensure_installer_at, login, login_at, start, start_at, update,
    update_at,
};
pub use domain::{AppError, LauncherConfig};
