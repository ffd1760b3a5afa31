//! Configuration records consumed by the expression factories.
//!
//! Prefixes and suffixes are regular expression fragments placed around
//! the identifier (e.g. `\.` for class selectors). Attribute names are
//! literal names and are escaped before use.

use serde::{Deserialize, Serialize};

use crate::intent::MangleIntent;

/// Options for [`MangleIntent::QuerySelectors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySelectorOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Options for [`MangleIntent::SingleValueAttributes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleValueAttributeOptions {
    pub attribute_names: Vec<String>,
    pub value_prefix: Option<String>,
    pub value_suffix: Option<String>,
}

/// Options for [`MangleIntent::MultiValueAttributes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiValueAttributeOptions {
    pub attribute_names: Vec<String>,
}

/// Options for [`MangleIntent::CssDeclarationProperties`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssDeclarationPropertyOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Options for [`MangleIntent::CssDeclarationValues`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssDeclarationValueOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// A mangle intent together with its configuration.
///
/// Serialized as `{"intent": "<name>", "options": {...}}`.
///
/// ## Examples
///
/// ```
/// use mangle_lib::{ExpressionOptions, MangleIntent};
///
/// let options: ExpressionOptions = serde_json::from_str(
///     r#"{"intent": "multi-value-attributes", "options": {"attribute_names": ["class"]}}"#,
/// )
/// .unwrap();
/// assert_eq!(options.intent(), MangleIntent::MultiValueAttributes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "options", rename_all = "kebab-case")]
pub enum ExpressionOptions {
    Attributes,
    QuerySelectors(QuerySelectorOptions),
    SingleValueAttributes(SingleValueAttributeOptions),
    MultiValueAttributes(MultiValueAttributeOptions),
    CssDeclarationProperties(CssDeclarationPropertyOptions),
    CssDeclarationValues(CssDeclarationValueOptions),
}

impl ExpressionOptions {
    pub fn intent(&self) -> MangleIntent {
        match self {
            ExpressionOptions::Attributes => MangleIntent::Attributes,
            ExpressionOptions::QuerySelectors(_) => MangleIntent::QuerySelectors,
            ExpressionOptions::SingleValueAttributes(_) => MangleIntent::SingleValueAttributes,
            ExpressionOptions::MultiValueAttributes(_) => MangleIntent::MultiValueAttributes,
            ExpressionOptions::CssDeclarationProperties(_) => {
                MangleIntent::CssDeclarationProperties
            }
            ExpressionOptions::CssDeclarationValues(_) => MangleIntent::CssDeclarationValues,
        }
    }
}
