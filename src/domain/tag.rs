use crate::domain::VersionString;
use crate::error::{BumpError, Result};

const VERSION_PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a tag pattern, rejecting patterns without a `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(VERSION_PLACEHOLDER) {
            return Err(BumpError::config(format!(
                "Tag pattern '{}' must contain {} placeholder",
                pattern, VERSION_PLACEHOLDER
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &VersionString) -> String {
        self.pattern.replace(VERSION_PLACEHOLDER, version.as_str())
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "v{version}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(s: &str) -> VersionString {
        VersionString::from_output(s).unwrap()
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(TagPattern::default().format(&version("1.2.4")), "v1.2.4");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format(&version("1.2.3")), "release-1.2.3");
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        let err = TagPattern::new("latest").unwrap_err();
        assert!(err.to_string().contains("{version}"));
    }
}
