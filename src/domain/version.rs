use std::fmt;

/// Version token as reported by the version manager.
///
/// The format belongs to the version manager; this type never parses it and
/// only compares two readings for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    /// Build from raw `version --short` output, dropping surrounding whitespace.
    ///
    /// Returns `None` when nothing but whitespace was printed.
    pub fn from_output(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(VersionString(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
