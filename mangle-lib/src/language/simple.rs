//! A plugin assembled from aliases, embed locators and one factory.

use tracing::debug;

use super::{ExpressionFactory, ExpressionSet, LanguagePlugin};
use crate::embed::{Embed, EmbedLocator};
use crate::error::Result;
use crate::options::ExpressionOptions;
use crate::source::SourceFile;

/// A [`LanguagePlugin`] for one language family.
///
/// Every alias in `languages` maps to the same expressions. Embeds are
/// only located in files whose tag is one of the aliases.
#[derive(Debug)]
pub struct SimpleLanguagePlugin {
    languages: Vec<String>,
    locators: Vec<Box<dyn EmbedLocator>>,
    factory: Box<dyn ExpressionFactory>,
}

impl SimpleLanguagePlugin {
    pub fn new(
        languages: Vec<String>,
        locators: Vec<Box<dyn EmbedLocator>>,
        factory: Box<dyn ExpressionFactory>,
    ) -> Self {
        Self {
            languages,
            locators,
            factory,
        }
    }

    fn handles(&self, kind: &str) -> bool {
        self.languages.iter().any(|language| language == kind)
    }
}

impl LanguagePlugin for SimpleLanguagePlugin {
    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn embeds(&self, file: &SourceFile<'_>) -> Vec<Embed> {
        if !self.handles(file.kind) {
            return Vec::new();
        }

        self.locators
            .iter()
            .flat_map(|locator| locator.locate(file.content))
            .collect()
    }

    fn expressions_for(&self, options: &ExpressionOptions) -> Result<ExpressionSet> {
        let expressions = self.factory.build(options)?;
        debug!(
            intent = %options.intent(),
            languages = ?self.languages,
            count = expressions.len(),
            "resolved mangle expressions"
        );

        Ok(self
            .languages
            .iter()
            .map(|language| (language.clone(), expressions.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::StyleTagLocator;
    use crate::language::Expressions;
    use crate::language::patterns;
    use crate::options::QuerySelectorOptions;

    #[derive(Debug)]
    struct HashFactory;

    impl ExpressionFactory for HashFactory {
        fn query_selectors(&self, _options: &QuerySelectorOptions) -> Result<Expressions> {
            patterns::direct(r"#(?P<main>%s)(?P<ahead>\{)".to_string(), true)
        }
    }

    fn plugin() -> SimpleLanguagePlugin {
        SimpleLanguagePlugin::new(
            vec!["abc".to_string(), "xyz".to_string()],
            vec![Box::new(StyleTagLocator::new())],
            Box::new(HashFactory),
        )
    }

    #[test]
    fn test_languages() {
        assert_eq!(plugin().languages(), vec!["abc", "xyz"]);
    }

    #[test]
    fn test_expressions_shared_by_aliases() {
        let options = ExpressionOptions::QuerySelectors(QuerySelectorOptions::default());
        let set = plugin().expressions_for(&options).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set["abc"].len(), 1);
        assert!(std::sync::Arc::ptr_eq(&set["abc"][0], &set["xyz"][0]));
    }

    #[test]
    fn test_unsupported_intent_is_empty() {
        let set = plugin()
            .expressions_for(&ExpressionOptions::Attributes)
            .unwrap();
        assert!(set.values().all(Vec::is_empty));
    }

    #[test]
    fn test_embeds_only_for_handled_files() {
        let plugin = plugin();
        let content = "<style>.a{}</style>";

        assert_eq!(plugin.embeds(&SourceFile::new("abc", content)).len(), 1);
        assert!(plugin.embeds(&SourceFile::new("css", content)).is_empty());
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_resolution_is_logged() {
        let options = ExpressionOptions::QuerySelectors(QuerySelectorOptions::default());
        plugin().expressions_for(&options).unwrap();
        assert!(logs_contain("resolved mangle expressions"));
        assert!(logs_contain("query-selectors"));
    }
}
