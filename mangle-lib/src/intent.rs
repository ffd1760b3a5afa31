//! Named categories of renameable constructs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{MangleError, Result};

/// A mangle intent, e.g. `query-selectors` or `multi-value-attributes`.
///
/// ## Examples
///
/// ```
/// use mangle_lib::MangleIntent;
///
/// let intent = MangleIntent::parse("query-selectors").unwrap();
/// assert_eq!(intent, MangleIntent::QuerySelectors);
/// assert_eq!(intent.to_string(), "query-selectors");
/// assert!(MangleIntent::parse("colors").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MangleIntent {
    /// Attribute names, e.g. `data-foo` in `<p data-foo>` and `[data-foo]`.
    Attributes,
    /// Selector fragments, e.g. `.foo` or `#bar`.
    QuerySelectors,
    /// Attributes holding exactly one identifier, e.g. `id` or `for`.
    SingleValueAttributes,
    /// Attributes holding whitespace-separated identifiers, e.g. `class`.
    MultiValueAttributes,
    /// Declaration names, e.g. custom properties `--foo: ...`.
    CssDeclarationProperties,
    /// Identifiers inside declaration values, e.g. `var(--foo)`.
    CssDeclarationValues,
}

impl MangleIntent {
    /// Parses an intent name, reporting unknown names as [`MangleError::UnknownIntent`].
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| MangleError::UnknownIntent(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for intent in MangleIntent::iter() {
            assert_eq!(MangleIntent::parse(intent.as_ref()).unwrap(), intent);
        }
    }

    #[test]
    fn test_known_names() {
        let names: Vec<String> = MangleIntent::iter().map(|i| i.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "attributes",
                "query-selectors",
                "single-value-attributes",
                "multi-value-attributes",
                "css-declaration-properties",
                "css-declaration-values",
            ]
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = MangleIntent::parse("classes").unwrap_err();
        assert!(matches!(err, MangleError::UnknownIntent(name) if name == "classes"));
    }

    #[test]
    fn test_serde_names() {
        let intent: MangleIntent = serde_json::from_str("\"css-declaration-values\"").unwrap();
        assert_eq!(intent, MangleIntent::CssDeclarationValues);
        assert_eq!(
            serde_json::to_string(&MangleIntent::MultiValueAttributes).unwrap(),
            "\"multi-value-attributes\""
        );
    }
}
