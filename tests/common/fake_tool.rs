use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell script standing in for an external executable.
///
/// Every invocation appends its arguments as one line to `log_file`.
pub struct FakeTool {
    pub path: PathBuf,
    pub log_file: PathBuf,
}

impl FakeTool {
    pub fn install(path: &Path, log_file: &Path, exit_code: i32) -> Self {
        fs::create_dir_all(path.parent().expect("tool path has a parent"))
            .expect("Failed to create tool directory");

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{}"
exit {}
"#,
            log_file.to_string_lossy(),
            exit_code
        );
        fs::write(path, script_content).expect("Failed to write fake tool script");

        let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("Failed to set permissions");

        Self { path: path.to_path_buf(), log_file: log_file.to_path_buf() }
    }

    /// Recorded invocations, one argument line per call.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
