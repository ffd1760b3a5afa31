//! HTML documents and the CSS and JavaScript embedded in them.

use serde::{Deserialize, Serialize};

use super::patterns::{self, HTML_COMMENT, TOKEN, fragment};
use super::{ExpressionFactory, ExpressionSet, Expressions, LanguagePlugin, SimpleLanguagePlugin};
use crate::embed::{Embed, EmbedLocator, ScriptTagLocator, StyleAttributeLocator, StyleTagLocator};
use crate::error::Result;
use crate::options::{ExpressionOptions, MultiValueAttributeOptions, SingleValueAttributeOptions};
use crate::source::SourceFile;

const DEFAULT_LANGUAGES: &[&str] = &["html", "htm"];

/// A start tag whose attribute list mentions an identifier; the list is
/// captured.
const START_TAG: &str = concat!(
    r#"<[a-zA-Z][^\s/>]*(?P<main>\s(?:[^>"']|"[^"]*"|'[^']*')*?(?:%s)"#,
    r#"(?:[^>"']|"[^"]*"|'[^']*')*)/?>"#,
);

/// A start tag with an attribute value mentioning an identifier; the
/// attribute list is captured.
const VALUE_TAG: &str = concat!(
    r#"<[a-zA-Z][^\s/>]*(?P<main>\s(?:[^>"']|"[^"]*"|'[^']*')*?"#,
    r#"(?:"[^"]*(?:%s)[^"]*"|'[^']*(?:%s)[^']*'|=\s*[^\s"'=<>`]*(?:%s))"#,
    r#"(?:[^>"']|"[^"]*"|'[^']*')*)/?>"#,
);

/// An attribute value, quoted or not, matched whole so that nothing
/// inside it is mistaken for an attribute.
const ANY_VALUE: &str = r#""[^"]*"|'[^']*'|=\s*[^\s"'=<>`]+"#;

/// An attribute name within an attribute list. Values are skipped.
const ATTRIBUTE_NAME: &str =
    r#""[^"]*"|'[^']*'|=\s*[^\s"'=<>`]+|(?:^|\s)(?P<main>%s)(?P<ahead>\s*=|\s|/|$)"#;

/// Configuration for [`HtmlLanguagePlugin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlPluginOptions {
    /// Overrides the language tags handled by the plugin.
    pub languages: Option<Vec<String>>,
    /// Locate `<style>` bodies and `style` attributes.
    pub css_embeds: bool,
    /// Locate `<script>` bodies.
    pub js_embeds: bool,
}

impl Default for HtmlPluginOptions {
    fn default() -> Self {
        Self {
            languages: None,
            css_embeds: true,
            js_embeds: true,
        }
    }
}

/// Expressions for identifiers in HTML markup.
///
/// Attribute names are matched case-insensitively, attribute values
/// case-sensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExpressions;

impl ExpressionFactory for HtmlExpressions {
    fn attributes(&self) -> Result<Expressions> {
        patterns::nested(
            format!("{HTML_COMMENT}|{START_TAG}"),
            ATTRIBUTE_NAME.to_string(),
            false,
        )
    }

    fn single_value_attributes(&self, options: &SingleValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };
        let vp = fragment(&options.value_prefix);
        let vs = fragment(&options.value_suffix);

        patterns::nested(
            format!("{HTML_COMMENT}|{VALUE_TAG}"),
            format!(
                r#"(?:^|\s)(?i:{names})\s*=\s*(?:"{vp}(?P<main_1>%s){vs}"|'{vp}(?P<main_2>%s){vs}'|{vp}(?P<main_3>%s){vs}(?P<ahead>\s|/|$))|{ANY_VALUE}"#
            ),
            true,
        )
    }

    fn multi_value_attributes(&self, options: &MultiValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };

        patterns::narrowed(
            format!("{HTML_COMMENT}|{VALUE_TAG}"),
            format!(
                r#"(?:^|\s)(?i:{names})\s*=\s*(?:"(?P<main_1>[^"]*(?:%s)[^"]*)"|'(?P<main_2>[^']*(?:%s)[^']*)'|(?P<main_3>%s)(?P<ahead>\s|/|$))|{ANY_VALUE}"#
            ),
            TOKEN.to_string(),
            true,
        )
    }
}

/// Plugin for HTML documents (`.html`, `.htm`).
#[derive(Debug)]
pub struct HtmlLanguagePlugin(SimpleLanguagePlugin);

impl HtmlLanguagePlugin {
    pub fn new() -> Self {
        Self::with_options(HtmlPluginOptions::default())
    }

    pub fn with_options(options: HtmlPluginOptions) -> Self {
        let languages = options
            .languages
            .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect());

        let mut locators: Vec<Box<dyn EmbedLocator>> = Vec::new();
        if options.css_embeds {
            locators.push(Box::new(StyleTagLocator::new()));
            locators.push(Box::new(StyleAttributeLocator::new()));
        }
        if options.js_embeds {
            locators.push(Box::new(ScriptTagLocator::new()));
        }

        Self(SimpleLanguagePlugin::new(
            languages,
            locators,
            Box::new(HtmlExpressions),
        ))
    }
}

impl Default for HtmlLanguagePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for HtmlLanguagePlugin {
    fn languages(&self) -> Vec<String> {
        self.0.languages()
    }

    fn embeds(&self, file: &SourceFile<'_>) -> Vec<Embed> {
        self.0.embeds(file)
    }

    fn expressions_for(&self, options: &ExpressionOptions) -> Result<ExpressionSet> {
        self.0.expressions_for(options)
    }
}
