use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{BumpError, Result};
use crate::exec::{command_line, CommandRunner};

/// Spawns real processes with a fixed working directory.
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    /// Creates a runner that starts every command in `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        ProcessRunner {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }
}

fn check_status(status: ExitStatus, program: &str, args: &[String]) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(BumpError::CommandFailed {
            command: command_line(program, args),
            code: status.code(),
        })
    }
}

fn spawn_error(program: &str, source: std::io::Error) -> BumpError {
    BumpError::Spawn {
        program: program.to_string(),
        source,
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let status = self
            .command(program, args)
            .status()
            .map_err(|e| spawn_error(program, e))?;
        check_status(status, program, args)
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String> {
        let output = self
            .command(program, args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| spawn_error(program, e))?;
        check_status(output.status, program, args)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capture_stdout() {
        let runner = ProcessRunner::new(".");
        let out = runner.capture("echo", &args(&["1.2.3"])).unwrap();
        assert_eq!(out.trim(), "1.2.3");
    }

    #[test]
    fn test_run_in_workdir() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new(dir.path());
        runner.run("touch", &args(&["marker"])).unwrap();
        assert!(dir.path().join("marker").exists());
        assert_eq!(runner.workdir(), dir.path());
    }

    #[test]
    fn test_failure_keeps_exit_code() {
        let runner = ProcessRunner::new(".");
        let err = runner.run("sh", &args(&["-c", "exit 7"])).unwrap_err();
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().contains("sh -c \"exit 7\""));
    }

    #[test]
    fn test_missing_program() {
        let runner = ProcessRunner::new(".");
        let err = runner
            .capture("bump-release-no-such-program", &[])
            .unwrap_err();
        assert!(matches!(err, BumpError::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }
}
