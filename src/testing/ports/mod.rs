mod archive_downloader_stub;
mod credential_store_stub;

pub use self::archive_downloader_stub::FakeArchiveDownloader;
pub use self::credential_store_stub::MemoryCredentialStore;
pub use self::process_runner_stub::{FakeProcessRunner, RecordedRun};
