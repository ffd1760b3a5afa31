use thiserror::Error;

/// Errors emitted while building or evaluating mangle expressions.
///
/// Only problems with the patterns themselves are errors. Text that does
/// not match, captures that are absent from a match, and unterminated
/// embed markers all degrade to "nothing found" instead.
#[derive(Debug, Error)]
pub enum MangleError {
    /// A pattern template is unusable, e.g. it has no `%s` slot.
    #[error("Invalid pattern template `{template}`: {reason}")]
    InvalidTemplate {
        template: String,
        reason: &'static str,
    },

    /// The filled-in pattern failed to compile.
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A mangle intent name did not match any known intent.
    #[error("Unknown mangle intent `{0}`")]
    UnknownIntent(String),
}

/// Convenience Result type for mangle operations.
pub type Result<T> = std::result::Result<T, MangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_display() {
        let err = MangleError::InvalidTemplate {
            template: "#foo".to_string(),
            reason: "missing `%s` slot",
        };
        assert_eq!(
            err.to_string(),
            "Invalid pattern template `#foo`: missing `%s` slot"
        );
    }

    #[test]
    fn test_invalid_pattern_from_regex() {
        let regex_err = regex::Regex::new("[unclosed").unwrap_err();
        let err: MangleError = regex_err.into();
        assert!(matches!(err, MangleError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("Invalid regex pattern"));
    }

    #[test]
    fn test_unknown_intent_display() {
        let err = MangleError::UnknownIntent("colors".to_string());
        assert_eq!(err.to_string(), "Unknown mangle intent `colors`");
    }
}
