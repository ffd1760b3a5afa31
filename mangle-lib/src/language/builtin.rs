//! All built-in language plugins behind one handle.

use super::{
    CssLanguagePlugin, ExpressionSet, HtmlLanguagePlugin, JsLanguagePlugin, LanguagePlugin,
    MultiLanguagePlugin,
};
use crate::embed::Embed;
use crate::error::Result;
use crate::options::ExpressionOptions;
use crate::source::SourceFile;

/// CSS, HTML and JavaScript with their default options.
#[derive(Debug)]
pub struct BuiltinLanguagesPlugin(MultiLanguagePlugin);

impl BuiltinLanguagesPlugin {
    pub fn new() -> Self {
        Self(MultiLanguagePlugin::new(vec![
            Box::new(CssLanguagePlugin::new()),
            Box::new(HtmlLanguagePlugin::new()),
            Box::new(JsLanguagePlugin::new()),
        ]))
    }
}

impl Default for BuiltinLanguagesPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for BuiltinLanguagesPlugin {
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
