//! JavaScript modules and scripts.
//!
//! Identifiers are only recognised where the DOM and CSSOM APIs take
//! them: string arguments of attribute, class list and style calls, and
//! selectors inside string literals.

use serde::{Deserialize, Serialize};

use super::patterns::{
    self, ATTRIBUTE_SELECTOR, JS_COMMENT, JS_QUOTED_REGION, JS_STRING, JS_STRING_CONTENT, TOKEN,
    declaration_value, fragment, has_name, js_quoted_argument, selector,
};
use super::{ExpressionFactory, ExpressionSet, Expressions, LanguagePlugin, SimpleLanguagePlugin};
use crate::embed::Embed;
use crate::error::Result;
use crate::options::{
    CssDeclarationPropertyOptions, CssDeclarationValueOptions, ExpressionOptions,
    MultiValueAttributeOptions, QuerySelectorOptions, SingleValueAttributeOptions,
};
use crate::source::SourceFile;

const DEFAULT_LANGUAGES: &[&str] = &["js", "cjs", "mjs"];

/// Configuration for [`JsLanguagePlugin`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsPluginOptions {
    /// Overrides the language tags handled by the plugin.
    pub languages: Option<Vec<String>>,
}

/// Any string literal, with the contents of those mentioning an
/// identifier captured.
fn string_literals() -> String {
    format!("{JS_COMMENT}|{JS_STRING_CONTENT}|{JS_STRING}")
}

/// A quoted first argument naming one of `names`.
fn quoted_name(names: &str) -> String {
    format!(r#"(?:"(?i:{names})"|'(?i:{names})'|`(?i:{names})`)"#)
}

/// Expressions for identifiers used through JavaScript DOM APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsExpressions;

impl ExpressionFactory for JsExpressions {
    fn attributes(&self) -> Result<Expressions> {
        let mut expressions = patterns::direct(
            format!(
                r"{JS_COMMENT}|{JS_STRING}|(?-i:(?:get|set|has|remove|toggle)Attribute(?:Node)?)\s*\(\s*{argument}",
                argument = js_quoted_argument("", "")
            ),
            false,
        )?;
        expressions.extend(patterns::nested(
            string_literals(),
            ATTRIBUTE_SELECTOR.to_string(),
            false,
        )?);
        Ok(expressions)
    }

    fn query_selectors(&self, options: &QuerySelectorOptions) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        patterns::nested(string_literals(), selector(&prefix, &suffix), true)
    }

    fn single_value_attributes(&self, options: &SingleValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };
        let vp = fragment(&options.value_prefix);
        let vs = fragment(&options.value_suffix);
        let value = js_quoted_argument(&vp, &vs);

        let mut expressions = patterns::direct(
            format!(
                r"{JS_COMMENT}|{JS_STRING}|setAttribute\s*\(\s*{name}\s*,\s*{value}",
                name = quoted_name(&names)
            ),
            true,
        )?;

        if has_name(&options.attribute_names, "id") {
            expressions.extend(patterns::direct(
                format!(r"{JS_COMMENT}|{JS_STRING}|getElementById\s*\(\s*{value}"),
                true,
            )?);
        }

        Ok(expressions)
    }

    fn multi_value_attributes(&self, options: &MultiValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };

        let mut expressions = patterns::nested(
            format!(
                r"{JS_COMMENT}|{JS_STRING}|setAttribute\s*\(\s*{name}\s*,\s*{JS_QUOTED_REGION}",
                name = quoted_name(&names)
            ),
            TOKEN.to_string(),
            true,
        )?;

        if has_name(&options.attribute_names, "class") {
            expressions.extend(patterns::nested(
                format!(
                    r"{JS_COMMENT}|{JS_STRING}|\.classList\s*\.\s*(?:add|remove|toggle|contains|replace)\s*\((?P<main>[^)]*(?:%s)[^)]*)\)"
                ),
                js_quoted_argument("", ""),
                true,
            )?);
            expressions.extend(patterns::nested(
                format!(r"{JS_COMMENT}|{JS_STRING}|\.className\s*\+?=\s*{JS_QUOTED_REGION}"),
                TOKEN.to_string(),
                true,
            )?);
        }

        Ok(expressions)
    }

    fn css_declaration_properties(
        &self,
        options: &CssDeclarationPropertyOptions,
    ) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        patterns::direct(
            format!(
                r"{JS_COMMENT}|{JS_STRING}|\.(?:setProperty|getPropertyValue|removeProperty|getPropertyPriority)\s*\(\s*{argument}",
                argument = js_quoted_argument(&prefix, &suffix)
            ),
            true,
        )
    }

    fn css_declaration_values(&self, options: &CssDeclarationValueOptions) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        patterns::nested(
            format!(
                r#"{JS_COMMENT}|{JS_STRING}|\.setProperty\s*\(\s*(?:"[^"]*"|'[^']*'|`[^`]*`)\s*,\s*{JS_QUOTED_REGION}"#
            ),
            declaration_value(&prefix, &suffix),
            true,
        )
    }
}

/// Plugin for JavaScript files (`.js`, `.cjs`, `.mjs`).
#[derive(Debug)]
pub struct JsLanguagePlugin(SimpleLanguagePlugin);

impl JsLanguagePlugin {
    pub fn new() -> Self {
        Self::with_options(JsPluginOptions::default())
    }

    pub fn with_options(options: JsPluginOptions) -> Self {
        let languages = options
            .languages
            .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect());

        Self(SimpleLanguagePlugin::new(
            languages,
            Vec::new(),
            Box::new(JsExpressions),
        ))
    }
}

impl Default for JsLanguagePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for JsLanguagePlugin {
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
