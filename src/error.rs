use thiserror::Error;

/// Unified error type for bump-release operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("No version or bump rule given (pass one as an argument or set RELEASE_VERSION)")]
    MissingRequest,

    #[error("Version did not change: {0}")]
    VersionUnchanged(String),

    #[error("'{program} version --short' printed no version")]
    VersionUnreadable { program: String },

    #[error("Command '{command}' failed with exit code {}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Convenience type alias for Results in bump-release
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Process exit status the binary terminates with for this error.
    ///
    /// A failed external command hands back its own exit code untouched.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::MissingRequest => 2,
            BumpError::CommandFailed { code, .. } => code.unwrap_or(1),
            BumpError::Spawn { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                127
            }
            _ => 1,
        }
    }
}
