//! Store the Steam username and authenticate once.

use crate::app::AppContext;
use crate::app::commands::installer;
use crate::domain::{AppError, InstallerArgs};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// Save `username`, then run `+login <username> [password] +quit`.
///
/// The password only ever reaches the SteamCMD command line.
pub fn execute<R, C, D>(
    ctx: &AppContext<R, C, D>,
    username: &str,
    password: Option<&str>,
) -> Result<(), AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    ctx.credentials().save_username(username)?;
    installer::execute(ctx, InstallerArgs::login(username, password).quit())
}
