//! Direct expressions with a fixed replacement decoration.

use std::borrow::Cow;

use tracing::trace;

use super::scan::{Lookup, Matcher, substitute};
use super::template::PLACEHOLDER;
use super::{DirectExpression, MangleExpression, Occurrences, PatternTemplate, ReplacementMapping};
use crate::error::Result;

/// A [`DirectExpression`] whose replacement rewrites the whole consumed match.
///
/// Finding behaves exactly like the direct strategy. When replacing, the
/// text from the start of the match up to the forward assertion is
/// replaced by `decoration`, with `%s` standing for the new identifier.
/// This keeps a fixed marker around the identifier (e.g. always
/// re-prepending `#`) without spelling it out in the mapping.
///
/// ## Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use mangle_lib::expression::{MangleExpression, ParallelExpression, PatternTemplate};
///
/// let template = PatternTemplate::new(r"#\s*(?P<main>%s)(?P<ahead>\{)").unwrap();
/// let expression = ParallelExpression::new(template, "main", "#%s", true);
///
/// let mapping = HashMap::from([("foo".to_string(), "a".to_string())]);
/// assert_eq!(expression.replace_all("# foo{}", &mapping).unwrap(), "#a{}");
/// ```
#[derive(Debug, Clone)]
pub struct ParallelExpression {
    direct: DirectExpression,
    group: String,
    decoration: String,
}

impl ParallelExpression {
    pub fn new(
        template: PatternTemplate,
        group: impl Into<String>,
        decoration: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        let group = group.into();
        Self {
            direct: DirectExpression::new(template, group.clone(), case_sensitive),
            group,
            decoration: decoration.into(),
        }
    }

    fn decorate(&self, replacement: &str) -> String {
        self.decoration.replace(PLACEHOLDER, replacement)
    }
}

impl MangleExpression for ParallelExpression {
    fn find_all<'t>(&self, text: &'t str, pattern: &str) -> Result<Occurrences<'t>> {
        self.direct.find_all(text, pattern)
    }

    fn replace_all<'t>(
        &self,
        text: &'t str,
        mapping: &ReplacementMapping,
    ) -> Result<Cow<'t, str>> {
        if mapping.is_empty() {
            return Ok(Cow::Borrowed(text));
        }

        let case_sensitive = self.direct.is_case_sensitive();
        let lookup = Lookup::new(mapping, case_sensitive)?;
        let matcher = Matcher::compile(
            self.direct.template(),
            &lookup.pattern(),
            &self.group,
            case_sensitive,
        )?;

        let (result, replaced) = substitute(matcher.scan(text), text, |hit| {
            let capture = hit.capture.clone()?;
            let replacement = lookup.get(&text[capture.clone()])?;

            let contains_capture =
                hit.consumed.start <= capture.start && capture.end <= hit.consumed.end;
            let range = if contains_capture {
                hit.consumed.clone()
            } else {
                capture
            };
            Some((range, self.decorate(replacement)))
        });

        trace!(replaced, "parallel expression replace_all");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expression() -> ParallelExpression {
        let template =
            PatternTemplate::new(r"(?s:/\*.*?\*/)|#\s*(?P<main>%s)(?P<ahead>[\s,{])").unwrap();
        ParallelExpression::new(template, "main", "#%s", true)
    }

    fn mapping(pairs: &[(&str, &str)]) -> ReplacementMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_find_matches_direct() {
        let found: Vec<String> = expression()
            .find_all("#foo{} # bar{}", "[a-z]+")
            .unwrap()
            .collect();
        assert_eq!(found, vec!["foo", "bar"]);
    }

    #[test]
    fn test_replace_rewrites_consumed_match() {
        let result = expression()
            .replace_all("# foo, #bar{}", &mapping(&[("foo", "a"), ("bar", "b")]))
            .unwrap();
        assert_eq!(result, "#a, #b{}");
    }

    #[test]
    fn test_replace_keeps_forward_context() {
        let result = expression()
            .replace_all("#foo {}", &mapping(&[("foo", "a")]))
            .unwrap();
        assert_eq!(result, "#a {}");
    }

    #[test]
    fn test_replace_leaves_comments() {
        let result = expression()
            .replace_all("/* #foo{} */#foo{}", &mapping(&[("foo", "a")]))
            .unwrap();
        assert_eq!(result, "/* #foo{} */#a{}");
    }

    #[test]
    fn test_decoration_without_slot_is_literal() {
        let template = PatternTemplate::new(r"#(?P<main>%s)(?P<ahead>\{)").unwrap();
        let expression = ParallelExpression::new(template, "main", "#fixed", true);
        let result = expression
            .replace_all("#foo{}", &mapping(&[("foo", "a")]))
            .unwrap();
        assert_eq!(result, "#fixed{}");
    }
}
