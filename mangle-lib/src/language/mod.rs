//! Language plugins: the lookup surface an orchestrator consumes.
//!
//! A [`LanguagePlugin`] reports the language tags it handles, the embeds it
//! finds in a document, and the expressions implementing a mangle intent.
//! Built-in plugins are [`CssLanguagePlugin`], [`HtmlLanguagePlugin`] and
//! [`JsLanguagePlugin`]; [`BuiltinLanguagesPlugin`] aggregates all three.
//!
//! ## Examples
//!
//! ```
//! use mangle_lib::language::{BuiltinLanguagesPlugin, LanguagePlugin};
//! use mangle_lib::{ExpressionOptions, MultiValueAttributeOptions};
//!
//! let plugin = BuiltinLanguagesPlugin::new();
//! let options = ExpressionOptions::MultiValueAttributes(MultiValueAttributeOptions {
//!     attribute_names: vec!["class".to_string()],
//! });
//!
//! let expressions = plugin.expressions_for(&options).unwrap();
//! let html = &expressions["html"];
//!
//! let found: Vec<String> = html
//!     .iter()
//!     .flat_map(|e| e.find_all(r#"<p class="foo bar"></p>"#, "[a-z]+").unwrap())
//!     .collect();
//! assert_eq!(found, vec!["foo", "bar"]);
//! ```

pub mod builtin;
pub mod css;
pub mod html;
pub mod js;
pub mod multi;
pub(crate) mod patterns;
pub mod simple;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::embed::Embed;
use crate::error::Result;
use crate::expression::MangleExpression;
use crate::options::{
    CssDeclarationPropertyOptions, CssDeclarationValueOptions, ExpressionOptions,
    MultiValueAttributeOptions, QuerySelectorOptions, SingleValueAttributeOptions,
};
use crate::source::SourceFile;

pub use builtin::BuiltinLanguagesPlugin;
pub use css::{CssExpressions, CssLanguagePlugin, CssPluginOptions};
pub use html::{HtmlExpressions, HtmlLanguagePlugin, HtmlPluginOptions};
pub use js::{JsExpressions, JsLanguagePlugin, JsPluginOptions};
pub use multi::MultiLanguagePlugin;
pub use simple::SimpleLanguagePlugin;

/// Expressions implementing one intent for one language.
pub type Expressions = Vec<Arc<dyn MangleExpression>>;

/// Expressions per language tag.
pub type ExpressionSet = HashMap<String, Expressions>;

/// Capabilities a language contributes to a mangling run.
pub trait LanguagePlugin: Send + Sync {
    /// Language tags (file extension aliases) this plugin handles.
    fn languages(&self) -> Vec<String>;

    /// Sub-language regions found in `file`, if this plugin handles its tag.
    fn embeds(&self, file: &SourceFile<'_>) -> Vec<Embed>;

    /// Expressions implementing `options.intent()`, keyed by language tag.
    fn expressions_for(&self, options: &ExpressionOptions) -> Result<ExpressionSet>;
}

/// Builds the expressions of one language, one method per intent.
///
/// Intents a language has no syntax for keep the default (no expressions).
pub trait ExpressionFactory: Send + Sync + fmt::Debug {
    fn attributes(&self) -> Result<Expressions> {
        Ok(Vec::new())
    }

    fn query_selectors(&self, _options: &QuerySelectorOptions) -> Result<Expressions> {
        Ok(Vec::new())
    }

    fn single_value_attributes(
        &self,
        _options: &SingleValueAttributeOptions,
    ) -> Result<Expressions> {
        Ok(Vec::new())
    }

    fn multi_value_attributes(&self, _options: &MultiValueAttributeOptions) -> Result<Expressions> {
        Ok(Vec::new())
    }

    fn css_declaration_properties(
        &self,
        _options: &CssDeclarationPropertyOptions,
    ) -> Result<Expressions> {
        Ok(Vec::new())
    }

    fn css_declaration_values(&self, _options: &CssDeclarationValueOptions) -> Result<Expressions> {
        Ok(Vec::new())
    }

    /// Dispatches to the method for `options.intent()`.
    fn build(&self, options: &ExpressionOptions) -> Result<Expressions> {
        match options {
            ExpressionOptions::Attributes => self.attributes(),
            ExpressionOptions::QuerySelectors(options) => self.query_selectors(options),
            ExpressionOptions::SingleValueAttributes(options) => {
                self.single_value_attributes(options)
            }
            ExpressionOptions::MultiValueAttributes(options) => {
                self.multi_value_attributes(options)
            }
            ExpressionOptions::CssDeclarationProperties(options) => {
                self.css_declaration_properties(options)
            }
            ExpressionOptions::CssDeclarationValues(options) => {
                self.css_declaration_values(options)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Expressions;
    use crate::expression::ReplacementMapping;

    /// Every identifier any of `expressions` reports in `text`.
    pub(crate) fn find(expressions: &Expressions, text: &str, pattern: &str) -> Vec<String> {
        expressions
            .iter()
            .flat_map(|expression| expression.find_all(text, pattern).unwrap())
            .collect()
    }

    /// Applies `expressions` one after another.
    pub(crate) fn replace(expressions: &Expressions, text: &str, pairs: &[(&str, &str)]) -> String {
        let mapping: ReplacementMapping = pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        expressions.iter().fold(text.to_string(), |text, expression| {
            expression.replace_all(&text, &mapping).unwrap().into_owned()
        })
    }
}
