use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use crate::error::{BumpError, Result};
use crate::exec::{command_line, CommandRunner};

/// A single recorded call to the mock runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn command_line(&self) -> String {
        command_line(&self.program, &self.args)
    }
}

/// Mock runner for testing without spawning processes
///
/// Captured stdout is replayed from a queue in call order; commands
/// registered with [MockRunner::fail_on] exit with the given code.
pub struct MockRunner {
    invocations: Mutex<Vec<Invocation>>,
    captures: Mutex<VecDeque<String>>,
    failures: HashMap<String, i32>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockRunner {
    /// Create a new mock runner with nothing scripted
    pub fn new() -> Self {
        MockRunner {
            invocations: Mutex::new(Vec::new()),
            captures: Mutex::new(VecDeque::new()),
            failures: HashMap::new(),
        }
    }

    /// Queue the stdout returned by the next `capture` call
    pub fn push_capture(&mut self, stdout: impl Into<String>) {
        lock(&self.captures).push_back(stdout.into());
    }

    /// Make the exact command line exit with `code`
    pub fn fail_on(&mut self, command_line: impl Into<String>, code: i32) {
        self.failures.insert(command_line.into(), code);
    }

    /// All calls made so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        lock(&self.invocations).clone()
    }

    /// All calls made so far rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    fn record(&self, program: &str, args: &[String]) -> Result<()> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        };
        let rendered = invocation.command_line();
        lock(&self.invocations).push(invocation);

        match self.failures.get(&rendered) {
            Some(&code) => Err(BumpError::CommandFailed {
                command: rendered,
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.record(program, args)
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String> {
        self.record(program, args)?;
        Ok(lock(&self.captures).pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mock_records_calls() {
        let runner = MockRunner::new();
        runner.run("git", &args(&["push"])).unwrap();
        runner.run("git", &args(&["tag", "v1.0.0"])).unwrap();

        assert_eq!(runner.command_lines(), vec!["git push", "git tag v1.0.0"]);
        assert_eq!(runner.invocations()[1].program, "git");
    }

    #[test]
    fn test_mock_replays_captures_in_order() {
        let mut runner = MockRunner::new();
        runner.push_capture("1.0.0\n");
        runner.push_capture("1.0.1\n");

        let read = args(&["version", "--short"]);
        assert_eq!(runner.capture("poetry", &read).unwrap(), "1.0.0\n");
        assert_eq!(runner.capture("poetry", &read).unwrap(), "1.0.1\n");
        assert_eq!(runner.capture("poetry", &read).unwrap(), "");
    }

    #[test]
    fn test_mock_failure() {
        let mut runner = MockRunner::new();
        runner.fail_on("git push", 128);

        let err = runner.run("git", &args(&["push"])).unwrap_err();
        assert_eq!(err.exit_code(), 128);
        assert_eq!(runner.command_lines(), vec!["git push"]);
    }

    #[test]
    fn test_mock_runner_default() {
        let runner = MockRunner::default();
        assert!(runner.invocations().is_empty());
    }
}
