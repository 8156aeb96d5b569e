//! Git operations layer
//!
//! Two halves with different jobs:
//!
//! - [SourceControl] drives the `git` command line for every mutating step
//!   (add, commit, push, tag, push tag), so the user sees git's own output
//!   and a failure keeps git's exit code.
//! - The [Repository] trait inspects repository state before anything is
//!   changed. [repository::Git2Repository] reads it with the `git2` crate and
//!   [mock::MockRepository] fakes it for tests.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use crate::exec::CommandRunner;

/// Read-only view of the repository used for preflight warnings
pub trait Repository {
    /// Name of the branch HEAD points to.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - HEAD is on a branch with at least one commit
    /// * `Ok(None)` - HEAD is detached or the branch has no commits yet
    /// * `Err` - If there's a Git error
    fn current_branch(&self) -> Result<Option<String>>;

    /// Whether a tag with this exact name exists locally.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag (e.g., "v1.0.0")
    fn tag_exists(&self, tag_name: &str) -> Result<bool>;
}

/// Runs the git CLI for the release commit and tag.
pub struct SourceControl<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    program: String,
    remote: String,
}

impl<'a, R: CommandRunner + ?Sized> SourceControl<'a, R> {
    pub fn new(runner: &'a R, program: impl Into<String>, remote: impl Into<String>) -> Self {
        SourceControl {
            runner,
            program: program.into(),
            remote: remote.into(),
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.runner.run(&self.program, &args)
    }

    /// `git add <files...>`
    pub fn stage(&self, files: &[String]) -> Result<()> {
        let mut args = vec!["add"];
        args.extend(files.iter().map(String::as_str));
        self.git(&args)
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message])
    }

    /// `git push` of the current branch to its upstream
    pub fn push(&self) -> Result<()> {
        self.git(&["push"])
    }

    /// `git tag <name>` (lightweight tag on HEAD)
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(&["tag", name])
    }

    /// `git push <remote> <name>`
    pub fn push_tag(&self, name: &str) -> Result<()> {
        self.git(&["push", &self.remote, name])
    }
}
