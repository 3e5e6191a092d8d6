//! Update and validate the application files through SteamCMD.

use crate::app::AppContext;
use crate::app::commands::installer;
use crate::domain::{AppError, InstallerArgs};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

pub fn execute<R, C, D>(ctx: &AppContext<R, C, D>) -> Result<(), AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    installer::execute(ctx, InstallerArgs::update(&ctx.config().app_id).quit())
}
