//! Multi-phase expressions for regions holding several identifiers.
//!
//! A single flat pattern cannot enumerate an unbounded number of tokens
//! separated by delimiters that are not fixed relative to the match, such
//! as the whitespace-separated values of a `class` attribute. The outer
//! template finds the whole region (skipping comments as a whole
//! alternative) and the inner template is evaluated only inside it.
//! Further region templates can narrow the outer region before the inner
//! template runs, e.g. start tag, then attribute value, then token.

use std::borrow::Cow;
use std::ops::Range;

use tracing::trace;

use super::scan::{Lookup, Matcher, normalize, rewrite_captures, substitute};
use super::{MangleExpression, Occurrences, PatternTemplate, ReplacementMapping};
use crate::error::Result;

/// An outer region template paired with an inner occurrence template.
///
/// Every template reports the capture named `group`: the region in the
/// outer ones, the identifier in the inner one.
///
/// ## Examples
///
/// ```
/// use mangle_lib::expression::{MangleExpression, NestedExpression, PatternTemplate};
///
/// let outer = PatternTemplate::new(r#"class="(?P<main>[^"]*(?:%s)[^"]*)""#).unwrap();
/// let inner = PatternTemplate::new(r"(?:^|\s)(?P<main>%s)(?P<ahead>\s|$)").unwrap();
/// let expression = NestedExpression::new(outer, inner, "main", true);
///
/// let found: Vec<String> = expression
///     .find_all(r#"class="foo bar""#, "[a-z]+")
///     .unwrap()
///     .collect();
/// assert_eq!(found, vec!["foo", "bar"]);
/// ```
#[derive(Debug, Clone)]
pub struct NestedExpression {
    regions: Vec<PatternTemplate>,
    inner: PatternTemplate,
    group: String,
    case_sensitive: bool,
}

impl NestedExpression {
    /// Creates a two-phase expression.
    ///
    /// ## Arguments
    ///
    /// * `outer` - finds the regions; its `group` capture is the region
    /// * `inner` - runs inside each region; its `group` capture is the identifier
    /// * `group` - the capture name both templates report
    /// * `case_sensitive` - whether identifiers are matched case-sensitively
    pub fn new(
        outer: PatternTemplate,
        inner: PatternTemplate,
        group: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            regions: vec![outer],
            inner,
            group: group.into(),
            case_sensitive,
        }
    }

    /// Narrows every region found so far to the `group` captures of
    /// `region` inside it, before the inner template runs.
    pub fn within(mut self, region: PatternTemplate) -> Self {
        self.regions.push(region);
        self
    }

    fn matchers(&self, pattern: &str) -> Result<(Vec<Matcher>, Matcher)> {
        let regions = self
            .regions
            .iter()
            .map(|template| Matcher::compile(template, pattern, &self.group, self.case_sensitive))
            .collect::<Result<Vec<_>>>()?;
        let inner = Matcher::compile(&self.inner, pattern, &self.group, self.case_sensitive)?;
        Ok((regions, inner))
    }
}

/// Byte ranges of the innermost regions, in document order.
fn regions<'t>(
    matchers: Vec<Matcher>,
    text: &'t str,
) -> Box<dyn Iterator<Item = Range<usize>> + 't> {
    let mut found: Box<dyn Iterator<Item = Range<usize>> + 't> =
        Box::new(std::iter::once(0..text.len()));

    for matcher in matchers {
        found = Box::new(found.flat_map(move |region| {
            let offset = region.start;
            matcher.scan(&text[region]).filter_map(move |hit| {
                hit.capture
                    .map(|range| range.start + offset..range.end + offset)
            })
        }));
    }

    found
}

/// Rewrites the inner captures of every region `levels` narrow down to.
fn rewrite_regions<'t>(
    levels: &[Matcher],
    inner: &Matcher,
    text: &'t str,
    lookup: &Lookup<'_>,
) -> (Cow<'t, str>, usize) {
    let Some((outer, rest)) = levels.split_first() else {
        return rewrite_captures(inner, text, lookup);
    };

    let mut replaced = 0;
    let (result, _) = substitute(outer.scan(text), text, |hit| {
        let range = hit.capture.clone()?;
        let (rewritten, count) = rewrite_regions(rest, inner, &text[range.clone()], lookup);
        replaced += count;
        match rewritten {
            Cow::Owned(region) => Some((range, region)),
            Cow::Borrowed(_) => None,
        }
    });

    (result, replaced)
}

impl MangleExpression for NestedExpression {
    fn find_all<'t>(&self, text: &'t str, pattern: &str) -> Result<Occurrences<'t>> {
        let (outer, inner) = self.matchers(pattern)?;
        let case_sensitive = self.case_sensitive;

        let occurrences = regions(outer, text).flat_map(move |range| {
            let region = &text[range];
            inner.scan(region).filter_map(move |hit| {
                hit.capture.map(|found| normalize(&region[found], case_sensitive))
            })
        });

        Ok(Box::new(occurrences))
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
        let (outer, inner) = self.matchers(&lookup.pattern())?;

        let (result, replaced) = rewrite_regions(&outer, &inner, text, &lookup);
        trace!(levels = outer.len(), replaced, "nested expression replace_all");
        Ok(result)
    }
}
