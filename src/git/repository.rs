use crate::error::Result;
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the git repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<Option<String>> {
        if self.repo.head_detached()? {
            return Ok(None);
        }

        match self.repo.head() {
            Ok(head) => Ok(head.shorthand().map(|s| s.to_string())),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BumpError;
    use crate::git::Repository;
    use tempfile::TempDir;

    fn init_with_commit() -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
        }
        (dir, repo)
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let result = Git2Repository::open(dir.path());
        assert!(matches!(result, Err(BumpError::Git(_))));
    }

    #[test]
    fn test_open_from_subdirectory() {
        let (dir, repo) = init_with_commit();
        let branch = repo.head().unwrap().shorthand().unwrap().to_string();
        let sub = dir.path().join("pkg");
        std::fs::create_dir(&sub).unwrap();
        let repo = Git2Repository::open(&sub).unwrap();

        assert_eq!(repo.current_branch().unwrap(), Some(branch));
    }

    #[test]
    fn test_unborn_branch_has_no_current_branch() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let repo = Git2Repository::open(dir.path()).unwrap();
        assert_eq!(repo.current_branch().unwrap(), None);
    }

    #[test]
    fn test_detached_head() {
        let (_dir, repo) = init_with_commit();
        let oid = repo.head().unwrap().target().unwrap();
        repo.set_head_detached(oid).unwrap();

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(repo.current_branch().unwrap(), None);
    }

    #[test]
    fn test_tag_exists() {
        let (_dir, repo) = init_with_commit();
        {
            let head = repo.head().unwrap().peel(git2::ObjectType::Commit).unwrap();
            repo.tag_lightweight("v1.0.0", &head, false).unwrap();
        }

        let repo = Git2Repository::from_git2(repo);
        assert!(repo.tag_exists("v1.0.0").unwrap());
        assert!(!repo.tag_exists("v2.0.0").unwrap());
    }

    #[test]
    fn test_tag_exists_rejects_invalid_ref_name() {
        let (_dir, repo) = init_with_commit();
        let repo = Git2Repository::from_git2(repo);
        assert!(matches!(
            repo.tag_exists("release 1.0.0"),
            Err(BumpError::Git(_))
        ));
    }
}
