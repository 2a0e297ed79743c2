//! The substitution context handed to every template.
//!
//! A [`ProjectContext`] holds exactly one value, the project name, exposed to
//! templates as `{{projectName}}`. The name doubles as a directory name and as
//! part of the generated file names, so it is validated on construction:
//!
//! - not empty
//! - not `.` or `..`
//! - no `/` or `\` separators
//! - no control characters (this includes NUL)
//!
//! Names that pass but are not valid C++ identifiers (e.g. `my-list`) are still
//! accepted; the default templates use the name as a class name, so callers are
//! expected to warn about them via [`ProjectContext::is_cpp_identifier`].

use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Key under which the project name is exposed to templates.
pub const PROJECT_NAME_KEY: &str = "projectName";

/// Validated project name plus the data context derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    project_name: String,
}

impl ProjectContext {
    /// Validate `name` and build the context.
    pub fn new(name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            project_name: name.to_string(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Whether the name matches `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn is_cpp_identifier(&self) -> bool {
        let mut chars = self.project_name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// The Handlebars data context: `{ "projectName": <name> }`.
    pub fn data(&self) -> Value {
        serde_json::json!({ PROJECT_NAME_KEY: self.project_name })
    }
}

/// Check that `name` is usable as a project name.
pub fn validate_name(name: &str) -> Result<()> {
    match segment_violation(name) {
        Some(reason) => Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Returns why `s` is not a safe single path segment, or `None` if it is.
pub(crate) fn segment_violation(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        Some("must not be empty")
    } else if s == "." || s == ".." {
        Some("must not be '.' or '..'")
    } else if s.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if s.chars().any(char::is_control) {
        Some("must not contain control characters")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        for name in ["Widget", "SkipList", "red_black_tree", "Trie2", "my-list"] {
            assert!(ProjectContext::new(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejects_empty() {
        let err = ProjectContext::new("").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
    }

    #[test]
    fn test_rejects_dot_segments() {
        assert!(ProjectContext::new(".").is_err());
        assert!(ProjectContext::new("..").is_err());
        // Dots inside a name are fine
        assert!(ProjectContext::new("v1.2").is_ok());
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(ProjectContext::new("a/b").is_err());
        assert!(ProjectContext::new("../escape").is_err());
        assert!(ProjectContext::new("a\\b").is_err());
        assert!(ProjectContext::new("/abs").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(ProjectContext::new("nul\0byte").is_err());
        assert!(ProjectContext::new("line\nbreak").is_err());
        assert!(ProjectContext::new("tab\t").is_err());
    }

    #[test]
    fn test_error_message_names_the_input() {
        let err = validate_name("a/b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid project name 'a/b': must not contain path separators"
        );
    }

    #[test]
    fn test_cpp_identifier() {
        assert!(ProjectContext::new("Widget").unwrap().is_cpp_identifier());
        assert!(ProjectContext::new("_Node2").unwrap().is_cpp_identifier());
        assert!(!ProjectContext::new("2fast").unwrap().is_cpp_identifier());
        assert!(!ProjectContext::new("my-list").unwrap().is_cpp_identifier());
        assert!(!ProjectContext::new("v1.2").unwrap().is_cpp_identifier());
    }

    #[test]
    fn test_data_context() {
        let ctx = ProjectContext::new("Widget").unwrap();
        assert_eq!(ctx.data(), serde_json::json!({ "projectName": "Widget" }));
        assert_eq!(ctx.project_name(), "Widget");
    }
}
