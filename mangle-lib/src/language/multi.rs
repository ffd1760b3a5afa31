//! Aggregation of several language plugins.

use super::{ExpressionSet, LanguagePlugin};
use crate::embed::Embed;
use crate::error::Result;
use crate::options::ExpressionOptions;
use crate::source::SourceFile;

/// A [`LanguagePlugin`] merging the results of its children.
///
/// Languages and embeds are concatenated in child order; expressions for
/// a language handled by several children are concatenated as well.
#[derive(Default)]
pub struct MultiLanguagePlugin {
    plugins: Vec<Box<dyn LanguagePlugin>>,
}

impl MultiLanguagePlugin {
    pub fn new(plugins: Vec<Box<dyn LanguagePlugin>>) -> Self {
        Self { plugins }
    }

    pub fn push(&mut self, plugin: Box<dyn LanguagePlugin>) {
        self.plugins.push(plugin);
    }
}

impl std::fmt::Debug for MultiLanguagePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiLanguagePlugin")
            .field("languages", &self.languages())
            .finish()
    }
}

impl LanguagePlugin for MultiLanguagePlugin {
    fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for language in self.plugins.iter().flat_map(|plugin| plugin.languages()) {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        languages
    }

    fn embeds(&self, file: &SourceFile<'_>) -> Vec<Embed> {
        self.plugins
            .iter()
            .flat_map(|plugin| plugin.embeds(file))
            .collect()
    }

    fn expressions_for(&self, options: &ExpressionOptions) -> Result<ExpressionSet> {
        let mut merged = ExpressionSet::new();
        for plugin in &self.plugins {
            for (language, expressions) in plugin.expressions_for(options)? {
                merged.entry(language).or_default().extend(expressions);
            }
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{CssLanguagePlugin, HtmlLanguagePlugin, JsLanguagePlugin};
    use crate::options::QuerySelectorOptions;

    fn plugin() -> MultiLanguagePlugin {
        MultiLanguagePlugin::new(vec![
            Box::new(CssLanguagePlugin::new()),
            Box::new(CssLanguagePlugin::new()),
            Box::new(JsLanguagePlugin::new()),
        ])
    }

    #[test]
    fn test_languages_are_deduplicated() {
        assert_eq!(plugin().languages(), vec!["css", "js", "cjs", "mjs"]);
    }

    #[test]
    fn test_expressions_are_concatenated() {
        let options = ExpressionOptions::QuerySelectors(QuerySelectorOptions {
            prefix: Some(r"\.".to_string()),
            suffix: None,
        });

        let single = CssLanguagePlugin::new().expressions_for(&options).unwrap();
        let merged = plugin().expressions_for(&options).unwrap();
        assert_eq!(merged["css"].len(), single["css"].len() * 2);
        assert!(merged.contains_key("mjs"));
    }

    #[test]
    fn test_embeds_are_concatenated() {
        let mut plugin = MultiLanguagePlugin::default();
        plugin.push(Box::new(HtmlLanguagePlugin::new()));

        let html = r#"<style>.a{}</style><p style="color: red"></p><script>go()</script>"#;
        let embeds = plugin.embeds(&SourceFile::new("html", html));
        assert_eq!(embeds.len(), 3);
    }
}
