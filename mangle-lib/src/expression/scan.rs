//! Match walking shared by every expression strategy.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use regex::{Captures, Regex, RegexSet};
use tracing::trace;

use super::ReplacementMapping;
use super::template::{AHEAD_GROUP, PatternTemplate};
use crate::error::Result;

/// One match attempt of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    /// From the match start up to the forward assertion (or match end).
    pub consumed: Range<usize>,
    /// The logical capture, absent when another alternative matched.
    pub capture: Option<Range<usize>>,
}

/// Group indices forming one logical capture plus the forward assertion.
#[derive(Debug)]
struct GroupSelector {
    capture: Vec<usize>,
    ahead: Vec<usize>,
}

impl GroupSelector {
    fn new(regex: &Regex, name: &str) -> Self {
        let mut capture = Vec::new();
        let mut ahead = Vec::new();

        for (index, group) in regex.capture_names().enumerate() {
            let Some(group) = group else { continue };
            if is_branch_of(group, name) {
                capture.push(index);
            } else if is_branch_of(group, AHEAD_GROUP) {
                ahead.push(index);
            }
        }

        if capture.is_empty() {
            trace!(group = name, "capture group absent from pattern");
        }

        Self { capture, ahead }
    }

    fn first(indices: &[usize], captures: &Captures<'_>) -> Option<Range<usize>> {
        indices
            .iter()
            .find_map(|&index| captures.get(index))
            .map(|m| m.range())
    }
}

/// `main`, `main_1`, `main_2`, ... all name the logical group `main`.
fn is_branch_of(group: &str, name: &str) -> bool {
    if group == name {
        return true;
    }

    group
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|suffix| {
            !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
        })
}

/// A compiled template bound to the capture it reports.
#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    regex: Arc<Regex>,
    selector: Arc<GroupSelector>,
}

impl Matcher {
    pub(crate) fn compile(
        template: &PatternTemplate,
        pattern: &str,
        group: &str,
        case_sensitive: bool,
    ) -> Result<Self> {
        let regex = template.compile(pattern, case_sensitive)?;
        let selector = GroupSelector::new(&regex, group);
        Ok(Self {
            regex: Arc::new(regex),
            selector: Arc::new(selector),
        })
    }

    pub(crate) fn scan<'t>(&self, text: &'t str) -> Scanner<'t> {
        Scanner {
            matcher: self.clone(),
            text,
            position: 0,
        }
    }
}

/// Left-to-right, non-overlapping walk over the hits in one text.
#[derive(Debug)]
pub(crate) struct Scanner<'t> {
    matcher: Matcher,
    text: &'t str,
    position: usize,
}

impl Iterator for Scanner<'_> {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        if self.position > self.text.len() {
            return None;
        }

        let captures = self.matcher.regex.captures_at(self.text, self.position)?;
        let whole = captures.get(0)?.range();
        let selector = &self.matcher.selector;

        let mut resume = GroupSelector::first(&selector.ahead, &captures)
            .map(|ahead| ahead.start)
            .unwrap_or(whole.end);

        // Always make progress, even for empty matches.
        if resume <= whole.start {
            resume = match self.text[whole.start..].chars().next() {
                Some(c) => whole.start + c.len_utf8(),
                None => self.text.len() + 1,
            };
        }
        self.position = resume;

        Some(Hit {
            consumed: whole.start..resume.clamp(whole.start, whole.end),
            capture: GroupSelector::first(&selector.capture, &captures),
        })
    }
}

/// Normalizes an identifier the way an expression reports it.
pub(crate) fn normalize(identifier: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        identifier.to_string()
    } else {
        identifier.to_lowercase()
    }
}

/// Mapping view that honours an expression's case sensitivity.
#[derive(Debug)]
pub(crate) struct Lookup<'m> {
    mapping: &'m ReplacementMapping,
    folded: Option<Folded<'m>>,
    keys: Vec<&'m str>,
}

/// Case-insensitive resolution of a matched identifier to its key.
///
/// The regex engine folds with Unicode simple case folding, which is wider
/// than `to_lowercase` (`ſ` matches `s` but lowercases to itself). A match the
/// lowercased index misses is resolved through `keys`, which holds one
/// anchored insensitive pattern per key in disjunction order.
#[derive(Debug)]
struct Folded<'m> {
    lowered: HashMap<String, &'m str>,
    keys: RegexSet,
    replacements: Vec<&'m str>,
}

impl<'m> Lookup<'m> {
    pub(crate) fn new(mapping: &'m ReplacementMapping, case_sensitive: bool) -> Result<Self> {
        // Longest first so the disjunction prefers the most specific key.
        let mut keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let folded = if case_sensitive {
            None
        } else {
            let mut lowered = HashMap::with_capacity(keys.len());
            for key in &keys {
                lowered
                    .entry(key.to_lowercase())
                    .or_insert(mapping[*key].as_str());
            }
            let anchored = keys
                .iter()
                .map(|key| format!("(?i)^(?:{})$", regex::escape(key)));
            Some(Folded {
                lowered,
                keys: RegexSet::new(anchored)?,
                replacements: keys.iter().map(|key| mapping[*key].as_str()).collect(),
            })
        };

        Ok(Self {
            mapping,
            folded,
            keys,
        })
    }

    /// The disjunction of every mapped identifier.
    pub(crate) fn pattern(&self) -> String {
        self.keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|")
    }

    pub(crate) fn get(&self, original: &str) -> Option<&'m str> {
        let Some(folded) = &self.folded else {
            return self.mapping.get(original).map(String::as_str);
        };

        if let Some(replacement) = folded.lowered.get(&original.to_lowercase()) {
            return Some(*replacement);
        }

        folded
            .keys
            .matches(original)
            .iter()
            .next()
            .map(|index| folded.replacements[index])
    }
}

/// Applies `rewrite` to every hit in a single pass.
///
/// Each rewrite names the range it replaces; ranges that would overlap an
/// earlier rewrite are left alone. Returns the new text and how many
/// rewrites were applied.
pub(crate) fn substitute<'t, F>(
    hits: Scanner<'t>,
    text: &'t str,
    mut rewrite: F,
) -> (Cow<'t, str>, usize)
where
    F: FnMut(&Hit) -> Option<(Range<usize>, String)>,
{
    let mut output = String::new();
    let mut last = 0;
    let mut count = 0;

    for hit in hits {
        let Some((range, replacement)) = rewrite(&hit) else {
            continue;
        };
        if range.start < last {
            continue;
        }

        output.push_str(&text[last..range.start]);
        output.push_str(&replacement);
        last = range.end;
        count += 1;
    }

    if count == 0 {
        return (Cow::Borrowed(text), 0);
    }

    output.push_str(&text[last..]);
    (Cow::Owned(output), count)
}

/// Replaces each mapped capture found by `matcher` in `text`.
pub(crate) fn rewrite_captures<'t>(
    matcher: &Matcher,
    text: &'t str,
    lookup: &Lookup<'_>,
) -> (Cow<'t, str>, usize) {
    substitute(matcher.scan(text), text, |hit| {
        let range = hit.capture.clone()?;
        let replacement = lookup.get(&text[range.clone()])?;
        Some((range, replacement.to_string()))
    })
}
