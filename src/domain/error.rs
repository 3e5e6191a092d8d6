use std::io;

use thiserror::Error;

/// Library-wide error type for resoport operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Installer archive could not be fetched.
    #[error("Failed to download {url}: {details}")]
    Network { url: String, details: String },

    /// Installer archive could not be unpacked.
    #[error("Failed to extract {archive}: {details}")]
    Extraction { archive: String, details: String },

    /// No username has been stored yet.
    #[error("Username not found, please login first")]
    CredentialNotFound,

    /// Working directory could not be turned into launch paths.
    #[error("Failed to resolve working directory: {0}")]
    PathResolution(String),

    /// External tool could not be started.
    #[error("Failed to run {tool}: {error}")]
    ExternalToolError { tool: String, error: String },

    /// External tool ran but did not succeed.
    #[error("{tool} exited with {}", describe_exit(.code))]
    ProcessExit { tool: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code for this error.
    ///
    /// A subprocess that exited with a code hands that code through; everything
    /// else exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ProcessExit { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
