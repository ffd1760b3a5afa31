//! Pattern templates with a single identifier slot.
//!
//! A template is a regular expression with a `%s` slot where the caller's
//! identifier pattern goes. Because the `regex` crate has no lookaround,
//! boundary assertions are written with two conventions:
//!
//! - the group named [`AHEAD_GROUP`] is a forward assertion: it must match,
//!   but scanning resumes at its start so the next attempt can see it again
//! - backward context is consumed before the identifier; it is still
//!   visible to the next attempt when it was the previous match's `ahead`
//!
//! A logical capture may be split across alternatives as `main_1`,
//! `main_2`, ... (one per quote style, for example). The slot may appear
//! in each of those branches.

use regex::{Regex, RegexBuilder};

use crate::error::{MangleError, Result};

/// Token replaced by the caller-supplied identifier pattern.
pub const PLACEHOLDER: &str = "%s";

/// Name of the group treated as a zero-width forward assertion.
pub const AHEAD_GROUP: &str = "ahead";

/// An immutable regular expression with an identifier slot.
///
/// ## Examples
///
/// ```
/// use mangle_lib::expression::PatternTemplate;
///
/// let template = PatternTemplate::new(r"#(?P<main>%s)").unwrap();
/// assert_eq!(template.fill("[a-z]+"), r"#(?P<main>(?:[a-z]+))");
///
/// assert!(PatternTemplate::new(r"#foo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTemplate {
    source: String,
}

impl PatternTemplate {
    /// Creates a template, rejecting sources without a `%s` slot.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if !source.contains(PLACEHOLDER) {
            return Err(MangleError::InvalidTemplate {
                template: source,
                reason: "missing `%s` slot",
            });
        }

        Ok(Self { source })
    }

    /// The template source, slot included.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitutes `pattern` into every reference to the slot.
    ///
    /// The pattern is wrapped in a non-capturing group so alternations in
    /// it stay local to the slot.
    pub fn fill(&self, pattern: &str) -> String {
        self.source.replace(PLACEHOLDER, &format!("(?:{pattern})"))
    }

    /// Fills the slot and compiles the result.
    pub fn compile(&self, pattern: &str, case_sensitive: bool) -> Result<Regex> {
        let filled = self.fill(pattern);
        let regex = RegexBuilder::new(&filled)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(regex)
    }
}
