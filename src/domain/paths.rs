use std::path::{Path, PathBuf};

use super::LauncherConfig;

/// SteamCMD executable file name.
pub const STEAMCMD_EXE: &str = "steamcmd.exe";

/// Stored username file name.
pub const USERNAME_FILE: &str = "username.txt";

/// `<root>/<installer-dir>/`
pub fn installer_dir(root: &Path, config: &LauncherConfig) -> PathBuf {
    root.join(&config.installer_dir)
}

/// `<installer-dir>/steamcmd.exe`
pub fn steamcmd_exe(root: &Path, config: &LauncherConfig) -> PathBuf {
    installer_dir(root, config).join(STEAMCMD_EXE)
}

/// `<installer-dir>/username.txt`
pub fn username_file(root: &Path, config: &LauncherConfig) -> PathBuf {
    installer_dir(root, config).join(USERNAME_FILE)
}

/// `<installer-dir>/steamapps/common/<App>/`
pub fn app_install_dir(root: &Path, config: &LauncherConfig) -> PathBuf {
    installer_dir(root, config).join("steamapps").join("common").join(&config.app_name)
}

/// `<installer-dir>/steamapps/common/<App>/<App>.exe`
pub fn app_exe(root: &Path, config: &LauncherConfig) -> PathBuf {
    app_install_dir(root, config).join(format!("{}.exe", config.app_name))
}
