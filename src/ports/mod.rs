mod archive_downloader;
mod credential_store;
mod process_runner;

pub use archive_downloader::ArchiveDownloader;
pub use credential_store::CredentialStore;
pub use process_runner::ProcessRunner;
