//! Make sure SteamCMD is unpacked in the installer directory.

use std::fs;
use std::io::{ErrorKind, Write};

use log::info;
use tempfile::NamedTempFile;

use crate::adapters::zip_extract::extract_zip;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ArchiveDownloader, CredentialStore, ProcessRunner};

/// Whether SteamCMD was already present or had to be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerStatus {
    Present,
    Downloaded,
}

/// Download and unpack SteamCMD unless `steamcmd.exe` already exists.
pub fn execute<R, C, D>(ctx: &AppContext<R, C, D>) -> Result<InstallerStatus, AppError>
where
    R: ProcessRunner,
    C: CredentialStore,
    D: ArchiveDownloader,
{
    match fs::metadata(ctx.steamcmd_exe()) {
        Ok(_) => return Ok(InstallerStatus::Present),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(AppError::Io(e)),
    }

    let url = &ctx.config().installer_url;
    info!("steamcmd not found, downloading from {}", url);

    let body = ctx.downloader().download(url)?;

    let mut archive = tempfile::Builder::new()
        .prefix("steamcmd")
        .suffix(".zip")
        .tempfile_in(&ctx.config().temp_dir)?;
    write_archive(&mut archive, &body)?;

    let dest = ctx.installer_dir();
    extract_zip(archive.path(), &dest)?;

    info!("steamcmd downloaded and extracted successfully to {}", dest.display());
    Ok(InstallerStatus::Downloaded)
}

fn write_archive(archive: &mut NamedTempFile, body: &[u8]) -> Result<(), AppError> {
    archive.write_all(body)?;
    archive.flush()?;
    Ok(())
}
