//! External command execution layer
//!
//! Every tool bump-release drives (the version manager and git) is invoked
//! through the [CommandRunner] trait so the release workflow can be exercised
//! without spawning real processes.
//!
//! - [process::ProcessRunner]: spawns real processes in the repository root
//! - [mock::MockRunner]: records invocations and replays scripted results

pub mod mock;
pub mod process;

pub use mock::{Invocation, MockRunner};
pub use process::ProcessRunner;

use crate::error::Result;

/// Runs external programs synchronously.
///
/// ## Error Handling
///
/// A program that exits unsuccessfully is reported as
/// [crate::error::BumpError::CommandFailed] carrying its exit code; a program
/// that cannot be started is [crate::error::BumpError::Spawn].
pub trait CommandRunner: Send + Sync {
    /// Run a program with inherited stdout and stderr.
    ///
    /// # Returns
    /// * `Ok(())` - The program exited with status 0
    /// * `Err` - The program could not be started or exited non-zero
    fn run(&self, program: &str, args: &[String]) -> Result<()>;

    /// Run a program and return its captured stdout; stderr stays inherited.
    ///
    /// # Returns
    /// * `Ok(String)` - Lossily decoded stdout of a successful run
    /// * `Err` - The program could not be started or exited non-zero
    fn capture(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Render a program and its arguments the way a user would type them.
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    for arg in args {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            parts.push(format!("\"{}\"", arg));
        } else {
            parts.push(arg.clone());
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_plain() {
        let args = vec!["version".to_string(), "--short".to_string()];
        assert_eq!(command_line("poetry", &args), "poetry version --short");
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let args = vec![
            "commit".to_string(),
            "-m".to_string(),
            "Bump version: 1.0.0 -> 1.0.1".to_string(),
        ];
        assert_eq!(
            command_line("git", &args),
            "git commit -m \"Bump version: 1.0.0 -> 1.0.1\""
        );
    }
}
