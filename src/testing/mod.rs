pub mod ports;

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

#[allow(unused_imports)]
pub use ports::FakeArchiveDownloader;
#[allow(unused_imports)]
pub use ports::FakeProcessRunner;
#[allow(unused_imports)]
pub use ports::MemoryCredentialStore;
#[allow(unused_imports)]
pub use ports::RecordedRun;

/// Build an in-memory zip archive from `(name, contents)` pairs.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
