//! Run SteamCMD as the stored user.

use log::{error, info};

use crate::app::AppContext;
use crate::app::commands::ensure_installer;
use crate::domain::{AppError, InstallerArgs};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// Tool name used in errors and logs.
pub const STEAMCMD_TOOL: &str = "steamcmd";

/// Usage line for the `login` verb.
pub const LOGIN_USAGE: &str = "Usage: resoport login <username> [password]";

/// Run SteamCMD with `args`, logged in as the stored username.
///
/// Fails with `AppError::CredentialNotFound` before spawning anything when no
/// username has been saved.
pub fn execute<R, C, D>(ctx: &AppContext<R, C, D>, args: InstallerArgs) -> Result<(), AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    ensure_installer::execute(ctx)?;

    let username = match ctx.credentials().load_username() {
        Ok(username) => username,
        Err(err @ AppError::CredentialNotFound) => {
            error!("No stored username found.");
            error!("Please login first using the 'login' command.");
            error!("{}", LOGIN_USAGE);
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let args = args.with_stored_login(&username);
    info!("Running steamcmd with args: {}", args.redacted());

    ctx.runner().run_interactive(STEAMCMD_TOOL, &ctx.steamcmd_exe(), args.as_slice(), ctx.root())
}
