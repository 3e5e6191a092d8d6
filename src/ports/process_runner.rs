use std::path::Path;

use crate::domain::AppError;

/// Port for running external programs to completion.
pub trait ProcessRunner {
    /// Run `program` with `args` from `cwd`, sharing this process's stdin,
    /// stdout and stderr. Blocks until the child exits.
    ///
    /// `tool` names the program in errors. A non-zero exit is an
    /// `AppError::ProcessExit`.
    fn run_interactive(
        &self,
        tool: &str,
        program: &Path,
        args: &[String],
        cwd: &Path,
    ) -> Result<(), AppError>;
}
