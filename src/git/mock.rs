use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::collections::HashSet;

/// Mock repository for testing without an actual git repository
pub struct MockRepository {
    branch: Option<String>,
    tags: HashSet<String>,
    broken: bool,
}

impl MockRepository {
    /// Create a mock repository on branch `main` with no tags
    pub fn new() -> Self {
        MockRepository {
            branch: Some("main".to_string()),
            tags: HashSet::new(),
            broken: false,
        }
    }

    /// Set the current branch (`None` for a detached HEAD)
    pub fn set_branch(&mut self, branch: Option<&str>) {
        self.branch = branch.map(|b| b.to_string());
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Make every inspection fail as an unreadable repository would
    pub fn break_inspection(&mut self) {
        self.broken = true;
    }

    fn check(&self) -> Result<()> {
        if self.broken {
            Err(BumpError::Git(git2::Error::from_str("repository is unreadable")))
        } else {
            Ok(())
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        self.check()?;
        Ok(self.branch.clone())
    }

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        self.check()?;
        Ok(self.tags.contains(tag_name))
    }
}
