use crate::domain::VersionString;
use crate::error::{BumpError, Result};

/// Template for the release commit message.
///
/// `{old}` and `{new}` are replaced by the versions before and after the bump.
#[derive(Debug, Clone)]
pub struct CommitMessage {
    template: String,
}

impl CommitMessage {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        for placeholder in ["{old}", "{new}"] {
            if !template.contains(placeholder) {
                return Err(BumpError::config(format!(
                    "Commit message '{}' must contain {} placeholder",
                    template, placeholder
                )));
            }
        }
        Ok(CommitMessage { template })
    }

    pub fn render(&self, old: &VersionString, new: &VersionString) -> String {
        self.template
            .replace("{old}", old.as_str())
            .replace("{new}", new.as_str())
    }
}

impl Default for CommitMessage {
    fn default() -> Self {
        CommitMessage {
            template: "Bump version: {old} -> {new}".to_string(),
        }
    }
}
