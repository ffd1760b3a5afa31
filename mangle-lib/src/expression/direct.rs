//! Single-template expressions.

use std::borrow::Cow;

use tracing::trace;

use super::scan::{Lookup, Matcher, normalize, rewrite_captures};
use super::{MangleExpression, Occurrences, PatternTemplate, ReplacementMapping};
use crate::error::Result;

/// An expression whose capture directly surrounds the identifier.
///
/// Used where fixed markers delimit the identifier, e.g. an ID selector
/// that is preceded by `#` and followed by a selector terminator.
#[derive(Debug, Clone)]
pub struct DirectExpression {
    template: PatternTemplate,
    group: String,
    case_sensitive: bool,
}

impl DirectExpression {
    /// Creates an expression reporting the capture named `group`.
    pub fn new(template: PatternTemplate, group: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            template,
            group: group.into(),
            case_sensitive,
        }
    }

    /// The template this expression compiles on every call.
    pub fn template(&self) -> &PatternTemplate {
        &self.template
    }

    /// Whether identifiers are matched case-sensitively.
    ///
    /// Case-insensitive expressions report lowercased identifiers.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl MangleExpression for DirectExpression {
    fn find_all<'t>(&self, text: &'t str, pattern: &str) -> Result<Occurrences<'t>> {
        let matcher = Matcher::compile(&self.template, pattern, &self.group, self.case_sensitive)?;
        let case_sensitive = self.case_sensitive;

        Ok(Box::new(matcher.scan(text).filter_map(move |hit| {
            hit.capture.map(|range| normalize(&text[range], case_sensitive))
        })))
    }

    fn replace_all<'t>(
        &self,
        text: &'t str,
        mapping: &ReplacementMapping,
    ) -> Result<Cow<'t, str>> {
        if mapping.is_empty() {
            return Ok(Cow::Borrowed(text));
        }

        let lookup = Lookup::new(mapping, self.case_sensitive)?;
        let matcher = Matcher::compile(
            &self.template,
            &lookup.pattern(),
            &self.group,
            self.case_sensitive,
        )?;

        let (result, replaced) = rewrite_captures(&matcher, text, &lookup);
        trace!(replaced, "direct expression replace_all");
        Ok(result)
    }
}
