//! Start the installed application.

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, LaunchLayout};
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// Run the application executable with the per-install directory arguments.
pub fn execute<R, C, D>(ctx: &AppContext<R, C, D>) -> Result<(), AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    let layout = LaunchLayout::resolve(ctx.root())?;
    let args = layout.app_args(&ctx.config().app_id);
    let tool = ctx.config().app_name.as_str();

    info!("Launching {} with data directory {}", tool, layout.data);
    ctx.runner().run_interactive(tool, &ctx.app_exe(), &args, ctx.root())
}
