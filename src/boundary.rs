use std::fmt;

/// Warnings about conditions that are likely to trip up a release.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// HEAD is detached or on a branch without commits
    DetachedHead,
    /// The release tag already exists locally
    TagAlreadyExists { tag: String },
    /// An explicit target version is not a semantic version
    NonSemverVersion { version: String },
    /// The configured lock file is not present and will not be staged
    LockFileMissing { path: String },
    /// Repository state could not be read with git2
    InspectionFailed { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::DetachedHead => {
                write!(f, "HEAD is not on a branch; 'git push' may fail")
            }
            BoundaryWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists; tagging will fail", tag)
            }
            BoundaryWarning::NonSemverVersion { version } => {
                write!(
                    f,
                    "'{}' is not a semantic version; forwarding it unchanged",
                    version
                )
            }
            BoundaryWarning::LockFileMissing { path } => {
                write!(f, "Lock file '{}' not found; it will not be staged", path)
            }
            BoundaryWarning::InspectionFailed { reason } => {
                write!(f, "Could not inspect repository: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        assert!(BoundaryWarning::DetachedHead
            .to_string()
            .contains("not on a branch"));
        assert_eq!(
            BoundaryWarning::TagAlreadyExists {
                tag: "v1.2.4".to_string()
            }
            .to_string(),
            "Tag 'v1.2.4' already exists; tagging will fail"
        );
        assert!(BoundaryWarning::NonSemverVersion {
            version: "1.0a1".to_string()
        }
        .to_string()
        .contains("'1.0a1'"));
        assert!(BoundaryWarning::LockFileMissing {
            path: "poetry.lock".to_string()
        }
        .to_string()
        .contains("poetry.lock"));
        assert!(BoundaryWarning::InspectionFailed {
            reason: "invalid reference".to_string()
        }
        .to_string()
        .starts_with("Could not inspect repository"));
    }
}
