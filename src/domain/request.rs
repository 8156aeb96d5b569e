use std::fmt;

use crate::error::{BumpError, Result};

/// Environment variable consulted when no request is given on the command line.
pub const RELEASE_VERSION_ENV: &str = "RELEASE_VERSION";

/// Bump rules understood by the default version manager.
const KNOWN_RULES: &[&str] = &[
    "major",
    "minor",
    "patch",
    "premajor",
    "preminor",
    "prepatch",
    "prerelease",
];

/// What the user asked the version manager to do.
///
/// The variant only decides how the request is reported; the arguments
/// forwarded to the version manager are always the ones the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpRequest {
    /// A symbolic rule such as `patch`
    Rule(String),
    /// A literal target version
    Explicit(String),
    /// Options or several arguments forwarded verbatim
    Passthrough(Vec<String>),
}

impl BumpRequest {
    /// Resolve the request from positional arguments, falling back to the
    /// `RELEASE_VERSION` value when no arguments were given.
    ///
    /// # Arguments
    /// * `args` - Positional arguments from the command line
    /// * `env_fallback` - Value of `RELEASE_VERSION`, if set
    ///
    /// # Returns
    /// * `Ok(BumpRequest)` - The classified request
    /// * `Err(BumpError::MissingRequest)` - If neither source supplies anything
    pub fn resolve(args: &[String], env_fallback: Option<&str>) -> Result<Self> {
        match args {
            [] => match env_fallback.map(str::trim) {
                Some(value) if !value.is_empty() => Ok(Self::classify(value)),
                _ => Err(BumpError::MissingRequest),
            },
            [single] => Ok(Self::classify(single)),
            many => Ok(BumpRequest::Passthrough(many.to_vec())),
        }
    }

    /// Resolve the request from positional arguments and the process environment.
    pub fn from_cli(args: &[String]) -> Result<Self> {
        let env_value = std::env::var(RELEASE_VERSION_ENV).ok();
        Self::resolve(args, env_value.as_deref())
    }

    fn classify(arg: &str) -> Self {
        if arg.starts_with('-') {
            BumpRequest::Passthrough(vec![arg.to_string()])
        } else if KNOWN_RULES.contains(&arg) {
            BumpRequest::Rule(arg.to_string())
        } else {
            BumpRequest::Explicit(arg.to_string())
        }
    }

    /// Arguments to append after `version` when invoking the version manager.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            BumpRequest::Rule(value) | BumpRequest::Explicit(value) => vec![value.clone()],
            BumpRequest::Passthrough(args) => args.clone(),
        }
    }

    /// Whether an explicit target parses as a semantic version.
    ///
    /// Rules and passthrough requests are always accepted.
    pub fn looks_like_semver(&self) -> bool {
        match self {
            BumpRequest::Explicit(value) => {
                let bare = value.strip_prefix('v').unwrap_or(value);
                semver::Version::parse(bare).is_ok()
            }
            _ => true,
        }
    }
}

impl fmt::Display for BumpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpRequest::Rule(rule) => write!(f, "rule '{}'", rule),
            BumpRequest::Explicit(version) => write!(f, "version '{}'", version),
            BumpRequest::Passthrough(args) => write!(f, "arguments '{}'", args.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_rule() {
        let req = BumpRequest::resolve(&args(&["patch"]), None).unwrap();
        assert_eq!(req, BumpRequest::Rule("patch".to_string()));
        assert_eq!(req.to_args(), args(&["patch"]));
    }

    #[test]
    fn test_single_explicit_version() {
        let req = BumpRequest::resolve(&args(&["2.0.0"]), None).unwrap();
        assert_eq!(req, BumpRequest::Explicit("2.0.0".to_string()));
        assert!(req.looks_like_semver());
    }

    #[test]
    fn test_argument_wins_over_env() {
        let req = BumpRequest::resolve(&args(&["minor"]), Some("major")).unwrap();
        assert_eq!(req, BumpRequest::Rule("minor".to_string()));
    }

    #[test]
    fn test_env_fallback() {
        let req = BumpRequest::resolve(&[], Some(" 3.1.0 ")).unwrap();
        assert_eq!(req, BumpRequest::Explicit("3.1.0".to_string()));
    }

    #[test]
    fn test_blank_env_is_missing() {
        let err = BumpRequest::resolve(&[], Some("   ")).unwrap_err();
        assert!(matches!(err, BumpError::MissingRequest));
        assert!(matches!(
            BumpRequest::resolve(&[], None),
            Err(BumpError::MissingRequest)
        ));
    }

    #[test]
    fn test_passthrough_keeps_order() {
        let req = BumpRequest::resolve(&args(&["prerelease", "--next-phase"]), None).unwrap();
        assert_eq!(
            req,
            BumpRequest::Passthrough(args(&["prerelease", "--next-phase"]))
        );
        assert_eq!(req.to_args(), args(&["prerelease", "--next-phase"]));
        assert_eq!(req.to_string(), "arguments 'prerelease --next-phase'");
    }

    #[test]
    fn test_single_option_is_passthrough() {
        let req = BumpRequest::resolve(&args(&["--dry-run"]), None).unwrap();
        assert_eq!(req, BumpRequest::Passthrough(args(&["--dry-run"])));
        assert!(req.looks_like_semver());
        assert_eq!(req.to_args(), args(&["--dry-run"]));
    }

    #[test]
    fn test_non_semver_explicit() {
        let req = BumpRequest::Explicit("1.0.0a1".to_string());
        assert!(!req.looks_like_semver());
        assert!(BumpRequest::Explicit("v1.0.0-rc.1".to_string()).looks_like_semver());
        assert!(BumpRequest::Rule("patch".to_string()).looks_like_semver());
    }
}
