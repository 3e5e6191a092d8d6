//! Shared testing utilities for resoport CLI tests.

#![allow(dead_code)]

mod fake_tool;

pub use fake_tool::FakeTool;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Archive URL that nothing listens on, so tests never reach the real CDN.
pub const UNREACHABLE_STEAMCMD_URL: &str = "http://127.0.0.1:9/steamcmd.zip";

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Fully resolved work directory, as the launched process sees it.
    pub fn canonical_work_dir(&self) -> String {
        fs::canonicalize(&self.work_dir)
            .expect("Failed to canonicalize work directory")
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Build a command for invoking the compiled `resoport` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("resoport").expect("Failed to locate resoport binary");
        cmd.current_dir(&self.work_dir)
            .env("RESOPORT_STEAMCMD_URL", UNREACHABLE_STEAMCMD_URL)
            .env_remove("RUST_LOG");
        cmd
    }

    /// `.steamcmd/` inside the work directory.
    pub fn steamcmd_dir(&self) -> PathBuf {
        self.work_dir.join(".steamcmd")
    }

    pub fn username_file(&self) -> PathBuf {
        self.steamcmd_dir().join("username.txt")
    }

    /// Install a fake `steamcmd.exe` that records its arguments and exits with `exit_code`.
    pub fn install_steamcmd(&self, exit_code: i32) -> FakeTool {
        FakeTool::install(
            &self.steamcmd_dir().join("steamcmd.exe"),
            &self.root.path().join("steamcmd.log"),
            exit_code,
        )
    }

    /// Install a fake `Resonite.exe` at its SteamCMD install location.
    pub fn install_app(&self, exit_code: i32) -> FakeTool {
        FakeTool::install(
            &self.steamcmd_dir().join("steamapps/common/Resonite/Resonite.exe"),
            &self.root.path().join("resonite.log"),
            exit_code,
        )
    }

    pub fn write_username(&self, username: &str) {
        fs::create_dir_all(self.steamcmd_dir()).expect("Failed to create .steamcmd");
        fs::write(self.username_file(), username).expect("Failed to write username.txt");
    }

    pub fn read_username(&self) -> Option<String> {
        fs::read_to_string(self.username_file()).ok()
    }
}
