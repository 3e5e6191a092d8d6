use std::fs;
use std::path::Path;

use zip::ZipArchive;

use crate::domain::AppError;

/// Unpack every entry of `archive` into `dest`, creating `dest` if needed.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), AppError> {
    let extraction_error = |details: String| AppError::Extraction {
        archive: archive.display().to_string(),
        details,
    };

    let file = fs::File::open(archive).map_err(|e| extraction_error(format!("open: {}", e)))?;
    let mut zip =
        ZipArchive::new(file).map_err(|e| extraction_error(format!("read archive: {}", e)))?;

    fs::create_dir_all(dest)
        .map_err(|e| extraction_error(format!("create {}: {}", dest.display(), e)))?;

    zip.extract(dest).map_err(|e| extraction_error(format!("unpack into {}: {}", dest.display(), e)))
}
