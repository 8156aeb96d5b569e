//! Release workflow orchestration
//!
//! Runs the read / bump / read / commit / tag sequence against injected
//! [CommandRunner] and [Repository] implementations, so the binary wires in
//! real processes while tests drive it with mocks.

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpRequest, VersionString};
use crate::error::{BumpError, Result};
use crate::exec::CommandRunner;
use crate::git::{Repository, SourceControl};
use crate::manager::VersionManager;
use crate::ui;

/// Arguments for the bump workflow
///
/// Decoupled from the clap arguments so the workflow can be called
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// What to ask the version manager for
    pub request: BumpRequest,

    /// Directory the tool was started in; manifest and lock file paths are
    /// relative to it
    pub workdir: PathBuf,
}

/// Result of a successful release
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub old_version: VersionString,
    pub new_version: VersionString,
    pub commit_message: String,
    pub tag: String,
    pub remote: String,
    pub staged_files: Vec<String>,
    /// Branch that was pushed, if HEAD was on one
    pub branch: Option<String>,
}

/// Main bump workflow
///
/// 1. Read the current version
/// 2. Apply the bump request
/// 3. Read the resulting version; stop with exit status 1 if unchanged
/// 4. Stage the manifest (and lock file if present), commit, push
/// 5. Tag `v<new>` and push the tag to the remote
///
/// Any failing external command ends the workflow at that step, so the tag
/// is never created unless the commit and push succeeded.
///
/// # Arguments
///
/// * `args` - Bump request and working directory
/// * `config` - Validated configuration
/// * `runner` - Executes the version manager and git
/// * `repo` - Repository state used for preflight warnings
pub fn run_bump_workflow<R, G>(
    args: &BumpWorkflowArgs,
    config: &Config,
    runner: &R,
    repo: &G,
) -> Result<BumpOutcome>
where
    R: CommandRunner + ?Sized,
    G: Repository + ?Sized,
{
    let tag_pattern = config.tag_pattern()?;
    let commit_template = config.commit_message()?;
    let manager = VersionManager::new(runner, config.version_manager.program.clone());
    let git = SourceControl::new(
        runner,
        config.source_control.program.clone(),
        config.source_control.remote.clone(),
    );

    if !args.request.looks_like_semver() {
        let version = args.request.to_args().join(" ");
        ui::display_boundary_warning(&BoundaryWarning::NonSemverVersion { version });
    }

    let old_version = manager.current()?;
    ui::display_request(manager.program(), &old_version, &args.request);

    manager.apply(&args.request)?;
    let new_version = manager.current()?;

    if old_version == new_version {
        return Err(BumpError::VersionUnchanged(new_version.to_string()));
    }
    ui::display_version_change(&old_version, &new_version);

    // The manifest is already rewritten; inspection failures must not stop the commit.
    let branch = match repo.current_branch() {
        Ok(Some(branch)) => Some(branch),
        Ok(None) => {
            ui::display_boundary_warning(&BoundaryWarning::DetachedHead);
            None
        }
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::InspectionFailed {
                reason: e.to_string(),
            });
            None
        }
    };

    let tag = tag_pattern.format(&new_version);
    match repo.tag_exists(&tag) {
        Ok(true) => {
            ui::display_boundary_warning(&BoundaryWarning::TagAlreadyExists { tag: tag.clone() })
        }
        Ok(false) => {}
        Err(e) => ui::display_boundary_warning(&BoundaryWarning::InspectionFailed {
            reason: e.to_string(),
        }),
    }

    let staged_files = release_files(args, config);
    let commit_message = commit_template.render(&old_version, &new_version);

    ui::display_status(&format!("Committing {}", staged_files.join(", ")));
    git.stage(&staged_files)?;
    git.commit(&commit_message)?;
    git.push()?;
    ui::display_success(&format!("Committed and pushed: {}", commit_message));

    ui::display_status(&format!("Creating tag: {}", tag));
    git.tag(&tag)?;
    git.push_tag(&tag)?;
    ui::display_success(&format!("Pushed tag: {} to {}", tag, git.remote()));

    Ok(BumpOutcome {
        old_version,
        new_version,
        commit_message,
        tag,
        remote: git.remote().to_string(),
        staged_files,
        branch,
    })
}

/// Manifest files plus the lock file when it exists in the working directory.
fn release_files(args: &BumpWorkflowArgs, config: &Config) -> Vec<String> {
    let mut files = config.manifest.files.clone();

    if let Some(lock) = config
        .manifest
        .lock_file
        .as_deref()
        .filter(|l| !l.trim().is_empty())
    {
        if args.workdir.join(lock).exists() {
            files.push(lock.to_string());
        } else {
            ui::display_boundary_warning(&BoundaryWarning::LockFileMissing {
                path: lock.to_string(),
            });
        }
    }

    files
}
