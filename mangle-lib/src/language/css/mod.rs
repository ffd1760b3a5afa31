//! CSS stylesheets.

use serde::{Deserialize, Serialize};

use super::patterns::{
    self, ATTRIBUTE_SELECTOR, CSS_COMMENT, CSS_STRING, TOKEN, boundary, declaration_value,
    fragment,
};
use super::{ExpressionFactory, ExpressionSet, Expressions, LanguagePlugin, SimpleLanguagePlugin};
use crate::embed::Embed;
use crate::error::Result;
use crate::options::{
    CssDeclarationPropertyOptions, CssDeclarationValueOptions, ExpressionOptions,
    MultiValueAttributeOptions, QuerySelectorOptions, SingleValueAttributeOptions,
};
use crate::source::SourceFile;

const DEFAULT_LANGUAGES: &[&str] = &["css"];

/// Configuration for [`CssLanguagePlugin`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssPluginOptions {
    /// Overrides the language tags handled by the plugin.
    pub languages: Option<Vec<String>>,
}

/// Expressions for identifiers in CSS syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssExpressions;

impl ExpressionFactory for CssExpressions {
    fn attributes(&self) -> Result<Expressions> {
        let mut expressions = patterns::direct(
            format!("{CSS_COMMENT}|{CSS_STRING}|{ATTRIBUTE_SELECTOR}"),
            false,
        )?;
        expressions.extend(patterns::direct(
            format!(r"{CSS_COMMENT}|{CSS_STRING}|attr\(\s*(?P<main>%s)(?P<ahead>[\s,)])"),
            false,
        )?);
        Ok(expressions)
    }

    fn query_selectors(&self, options: &QuerySelectorOptions) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        // The terminator must lead to the `{` opening a rule, which keeps
        // values such as `#fff` or `url(a.png)` out. Comments and strings on
        // the way are stepped over whole.
        patterns::direct(
            format!(
                r#"{CSS_COMMENT}|{CSS_STRING}|{boundary}{prefix}(?P<main>%s){suffix}(?P<ahead>(?:(?:[\s.#\[\]:,>+~()*|]|{CSS_COMMENT})(?:[^;{{}}"'/]|{CSS_COMMENT}|{CSS_STRING}|/)*)?\{{)"#,
                boundary = boundary(&prefix)
            ),
            true,
        )
    }

    fn single_value_attributes(&self, options: &SingleValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };
        let vp = fragment(&options.value_prefix);
        let vs = fragment(&options.value_suffix);

        patterns::direct(
            format!(
                r#"{CSS_COMMENT}|{CSS_STRING}|\[\s*(?i:{names})\s*=\s*(?:"{vp}(?P<main_1>%s){vs}"|'{vp}(?P<main_2>%s){vs}'|{vp}(?P<main_3>%s){vs}(?P<ahead>[\s\]]))"#
            ),
            true,
        )
    }

    fn multi_value_attributes(&self, options: &MultiValueAttributeOptions) -> Result<Expressions> {
        let Some(names) = patterns::names(&options.attribute_names) else {
            return Ok(Vec::new());
        };

        patterns::nested(
            format!(
                r#"{CSS_COMMENT}|{CSS_STRING}|\[\s*(?i:{names})\s*~?=\s*(?:"(?P<main_1>[^"]*(?:%s)[^"]*)"|'(?P<main_2>[^']*(?:%s)[^']*)'|(?P<main_3>%s)(?P<ahead>[\s\]]))"#
            ),
            TOKEN.to_string(),
            true,
        )
    }

    fn css_declaration_properties(
        &self,
        options: &CssDeclarationPropertyOptions,
    ) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        patterns::direct(
            format!(
                r"{CSS_COMMENT}|{CSS_STRING}|(?:^|[{{;])\s*{prefix}(?P<main>%s){suffix}(?P<ahead>\s*:[^{{}};]*(?:[;}}]|$))"
            ),
            true,
        )
    }

    fn css_declaration_values(&self, options: &CssDeclarationValueOptions) -> Result<Expressions> {
        let prefix = fragment(&options.prefix);
        let suffix = fragment(&options.suffix);

        patterns::nested(
            format!(
                r"{CSS_COMMENT}|{CSS_STRING}|:(?P<main>[^;{{}}]*(?:%s)[^;{{}}]*)(?P<ahead>[;}}]|$)"
            ),
            declaration_value(&prefix, &suffix),
            true,
        )
    }
}

/// Plugin for CSS files (`.css`).
#[derive(Debug)]
pub struct CssLanguagePlugin(SimpleLanguagePlugin);

impl CssLanguagePlugin {
    pub fn new() -> Self {
        Self::with_options(CssPluginOptions::default())
    }

    pub fn with_options(options: CssPluginOptions) -> Self {
        let languages = options
            .languages
            .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect());

        Self(SimpleLanguagePlugin::new(
            languages,
            Vec::new(),
            Box::new(CssExpressions),
        ))
    }
}

impl Default for CssLanguagePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for CssLanguagePlugin {
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
