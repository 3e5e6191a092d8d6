//! Default flow: bootstrap on first run, otherwise launch.

use log::info;

use crate::app::AppContext;
use crate::app::commands::{installer, launch};
use crate::domain::{AppError, InstallerArgs};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// What the default flow did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The application was not installed yet; SteamCMD installed it.
    Installed,
    /// The application was started and has exited.
    Launched,
}

/// Install the application if its executable is missing, otherwise launch it.
///
/// A run that installs does not go on to launch.
pub fn execute<R, C, D>(ctx: &AppContext<R, C, D>) -> Result<StartOutcome, AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    if !ctx.app_exe().exists() {
        info!("{} is not installed yet, requesting license and installing", ctx.config().app_name);
        let app_id = &ctx.config().app_id;
        installer::execute(ctx, InstallerArgs::first_install(app_id).quit())?;
        return Ok(StartOutcome::Installed);
    }

    launch::execute(ctx)?;
    Ok(StartOutcome::Launched)
}
