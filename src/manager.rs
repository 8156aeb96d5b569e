//! Client for the external package-version manager (e.g. `poetry`)

use crate::domain::{BumpRequest, VersionString};
use crate::error::{BumpError, Result};
use crate::exec::CommandRunner;

/// Drives `<program> version` through a [CommandRunner].
pub struct VersionManager<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    program: String,
}

impl<'a, R: CommandRunner + ?Sized> VersionManager<'a, R> {
    pub fn new(runner: &'a R, program: impl Into<String>) -> Self {
        VersionManager {
            runner,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Read the manifest's current version with `version --short`.
    ///
    /// # Returns
    /// * `Ok(VersionString)` - Trimmed version text
    /// * `Err(BumpError::VersionUnreadable)` - If the command printed nothing
    /// * `Err` - If the command failed
    pub fn current(&self) -> Result<VersionString> {
        let args = vec!["version".to_string(), "--short".to_string()];
        let stdout = self.runner.capture(&self.program, &args)?;
        VersionString::from_output(&stdout).ok_or_else(|| BumpError::VersionUnreadable {
            program: self.program.clone(),
        })
    }

    /// Ask the version manager to apply the request with `version <args...>`.
    pub fn apply(&self, request: &BumpRequest) -> Result<()> {
        let mut args = vec!["version".to_string()];
        args.extend(request.to_args());
        self.runner.run(&self.program, &args)
    }
}
