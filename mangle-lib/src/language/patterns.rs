//! Pattern fragments and builders shared by the expression factories.
//!
//! Exclusion fragments (comments, strings) carry no capture, so a match on
//! them yields nothing and scanning continues after them.

use std::sync::Arc;

use crate::error::Result;
use crate::expression::{DirectExpression, MangleExpression, NestedExpression, PatternTemplate};
use crate::language::Expressions;

/// Name of the capture every built-in template reports.
pub(crate) const GROUP: &str = "main";

pub(crate) const CSS_COMMENT: &str = r"/\*(?s:.*?)\*/";
pub(crate) const CSS_STRING: &str = r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#;

pub(crate) const HTML_COMMENT: &str = r"<!--(?s:.*?)-->";

pub(crate) const JS_COMMENT: &str = r"//[^\n]*|/\*(?s:.*?)\*/";
pub(crate) const JS_STRING: &str =
    r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\(?s:.))*`"#;

/// String literals holding at least one identifier, contents captured.
///
/// Literals without an identifier must still be consumed whole (see
/// [`JS_STRING`]) or a closing quote could be taken for an opening one.
pub(crate) const JS_STRING_CONTENT: &str = concat!(
    r#""(?P<main_1>(?:[^"\\\n]|\\.)*?(?:%s)(?:[^"\\\n]|\\.)*)""#,
    r#"|'(?P<main_2>(?:[^'\\\n]|\\.)*?(?:%s)(?:[^'\\\n]|\\.)*)'"#,
    r#"|`(?P<main_3>(?:[^`\\]|\\(?s:.))*?(?:%s)(?:[^`\\]|\\(?s:.))*)`"#,
);

/// One whitespace-separated token of a multi-valued region.
pub(crate) const TOKEN: &str = r"(?:^|\s)(?P<main>%s)(?P<ahead>\s|$)";

/// A quoted JavaScript argument that is exactly one identifier.
pub(crate) fn js_quoted_argument(prefix: &str, suffix: &str) -> String {
    format!(
        r#"(?:"{prefix}(?P<main_1>%s){suffix}"|'{prefix}(?P<main_2>%s){suffix}'|`{prefix}(?P<main_3>%s){suffix}`)"#
    )
}

/// JavaScript quoted strings whose whole content may hold identifiers.
pub(crate) const JS_QUOTED_REGION: &str = concat!(
    r#"(?:"(?P<main_1>[^"\n]*(?:%s)[^"\n]*)""#,
    r#"|'(?P<main_2>[^'\n]*(?:%s)[^'\n]*)'"#,
    r#"|`(?P<main_3>[^`]*(?:%s)[^`]*)`)"#,
);

/// Wraps an optional fragment in a non-capturing group.
pub(crate) fn fragment(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(value) if !value.is_empty() => format!("(?:{value})"),
        _ => String::new(),
    }
}

/// Alternation of literal names, or `None` when there are none.
pub(crate) fn names(names: &[String]) -> Option<String> {
    let escaped: Vec<String> = names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| regex::escape(name))
        .collect();

    if escaped.is_empty() {
        None
    } else {
        Some(format!("(?:{})", escaped.join("|")))
    }
}

/// Whether `names` contains `name`, ignoring ASCII case.
pub(crate) fn has_name(names: &[String], name: &str) -> bool {
    names.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Backward boundary for identifiers without a prefix of their own.
pub(crate) fn boundary(prefix: &str) -> &'static str {
    if prefix.is_empty() { r"(?:^|[^\w-])" } else { "" }
}

/// Selector fragment up to the character that terminates it.
pub(crate) fn selector(prefix: &str, suffix: &str) -> String {
    format!(
        r"{boundary}{prefix}(?P<main>%s){suffix}(?P<ahead>[\s.#\[\]:,>+~()*|]|$)",
        boundary = boundary(prefix)
    )
}

/// An identifier inside a declaration value, e.g. `--foo` in `var(--foo)`.
pub(crate) fn declaration_value(prefix: &str, suffix: &str) -> String {
    format!(
        r"{CSS_COMMENT}|{CSS_STRING}|(?:^|[^\w-]){prefix}(?P<main>%s){suffix}(?P<ahead>[^\w-]|$)"
    )
}

/// Attribute name at the start of an attribute selector, e.g. `[data-foo]`.
pub(crate) const ATTRIBUTE_SELECTOR: &str = r"\[\s*(?P<main>%s)\s*(?P<ahead>[\]=~|^$*])";

pub(crate) fn direct(template: String, case_sensitive: bool) -> Result<Expressions> {
    let template = PatternTemplate::new(template)?;
    let expression: Arc<dyn MangleExpression> =
        Arc::new(DirectExpression::new(template, GROUP, case_sensitive));
    Ok(vec![expression])
}

pub(crate) fn nested(outer: String, inner: String, case_sensitive: bool) -> Result<Expressions> {
    let outer = PatternTemplate::new(outer)?;
    let inner = PatternTemplate::new(inner)?;
    let expression: Arc<dyn MangleExpression> =
        Arc::new(NestedExpression::new(outer, inner, GROUP, case_sensitive));
    Ok(vec![expression])
}

/// A nested expression whose outer regions are narrowed by `region` before
/// `inner` runs.
pub(crate) fn narrowed(
    outer: String,
    region: String,
    inner: String,
    case_sensitive: bool,
) -> Result<Expressions> {
    let expression = NestedExpression::new(
        PatternTemplate::new(outer)?,
        PatternTemplate::new(inner)?,
        GROUP,
        case_sensitive,
    )
    .within(PatternTemplate::new(region)?);
    let expression: Arc<dyn MangleExpression> = Arc::new(expression);
    Ok(vec![expression])
}
