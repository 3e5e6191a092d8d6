use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Runs programs with `std::process::Command` and inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run_interactive(
        &self,
        tool: &str,
        program: &Path,
        args: &[String],
        cwd: &Path,
    ) -> Result<(), AppError> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::ExternalToolError {
                tool: tool.to_string(),
                error: format!("{}: {}", program.display(), e),
            })?;

        if !status.success() {
            return Err(AppError::ProcessExit { tool: tool.to_string(), code: status.code() });
        }

        Ok(())
    }
}
