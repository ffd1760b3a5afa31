//! Property tests for replacement and embed extraction.

use std::collections::BTreeSet;

use mangle_lib::embed::{EmbedLocator, StyleAttributeLocator, StyleTagLocator};
use mangle_lib::language::{CssExpressions, HtmlExpressions};
use mangle_lib::{
    ExpressionFactory, MangleExpression, MultiValueAttributeOptions, QuerySelectorOptions,
    ReplacementMapping, splice_embeds,
};
use proptest::prelude::*;

fn class_attribute() -> std::sync::Arc<dyn MangleExpression> {
    HtmlExpressions
        .multi_value_attributes(&MultiValueAttributeOptions {
            attribute_names: vec!["class".to_string()],
        })
        .unwrap()
        .remove(0)
}

fn class_selector() -> std::sync::Arc<dyn MangleExpression> {
    CssExpressions
        .query_selectors(&QuerySelectorOptions {
            prefix: Some(r"\.".to_string()),
            suffix: None,
        })
        .unwrap()
        .remove(0)
}

/// Maps every name to `q<index>`, which can never be one of the names.
fn numbered(names: &BTreeSet<String>) -> ReplacementMapping {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), format!("q{index}")))
        .collect()
}

fn markup(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!(r#"<p class="{name} other">{name}</p>"#))
        .collect()
}

proptest! {
    #[test]
    fn find_is_repeatable(text in r#"[a-z .#{}"=<>/*-]{0,60}"#) {
        let expression = class_selector();
        let first: Vec<String> = expression.find_all(&text, "[a-z]+").unwrap().collect();
        let second: Vec<String> = expression.find_all(&text, "[a-z]+").unwrap().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn replace_is_idempotent(names in prop::collection::btree_set("[a-m]{3,6}", 1..6)) {
        let expression = class_attribute();
        let mapping = numbered(&names);
        let names: Vec<String> = names.into_iter().collect();
        let html = markup(&names);

        let once = expression.replace_all(&html, &mapping).unwrap().into_owned();
        let twice = expression.replace_all(&once, &mapping).unwrap().into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_found_identifier_is_replaced(
        names in prop::collection::btree_set("[a-m]{3,6}", 1..6),
        repeats in 1usize..4
    ) {
        let expression = class_attribute();
        let mapping = numbered(&names);
        let names: Vec<String> = names.into_iter().collect();
        let html = markup(&names).repeat(repeats);

        let key_pattern = "[a-m]{3,6}";
        let found = expression.find_all(&html, key_pattern).unwrap().count();
        prop_assert_eq!(found, names.len() * repeats);

        let result = expression.replace_all(&html, &mapping).unwrap();
        let replaced = expression.find_all(&result, "q[0-9]+").unwrap().count();
        prop_assert_eq!(replaced, found);
        prop_assert_eq!(expression.find_all(&result, key_pattern).unwrap().count(), 0);
    }

    #[test]
    fn swapping_names_is_single_pass(first in "[a-m]{3,6}", second in "[n-z]{3,6}") {
        let expression = class_selector();
        let mapping = ReplacementMapping::from([
            (first.clone(), second.clone()),
            (second.clone(), first.clone()),
        ]);

        let css = format!(".{first}{{}} .{second}.{first}{{}}");
        let result = expression.replace_all(&css, &mapping).unwrap();
        prop_assert_eq!(result, format!(".{second}{{}} .{first}.{second}{{}}"));
    }

    #[test]
    fn commented_identifiers_are_untouched(name in "[a-j]{3,8}") {
        let expression = class_selector();
        let mapping = ReplacementMapping::from([(name.clone(), "x".to_string())]);
        let css = format!("/* .{name}{{}} */ .keep{{}}");

        let found: Vec<String> = expression.find_all(&css, "[a-z]+").unwrap().collect();
        prop_assert_eq!(found, vec!["keep".to_string()]);
        prop_assert_eq!(expression.replace_all(&css, &mapping).unwrap(), css.as_str());
    }

    #[test]
    fn style_attribute_offsets_are_exact(
        before in "[a-z ]{0,10}",
        declarations in "[a-z:; -]{1,20}",
        quote in prop::sample::select(vec!['"', '\''])
    ) {
        let host = format!("<p{before} style={quote}{declarations}{quote}></p>");
        let embeds = StyleAttributeLocator::new().locate(&host);

        prop_assert_eq!(embeds.len(), 1);
        prop_assert_eq!(&host[embeds[0].range()], declarations.as_str());
        prop_assert_eq!(embeds[0].raw(), declarations.as_str());
        prop_assert_eq!(splice_embeds(&host, &embeds), host.clone());
    }

    #[test]
    fn style_tag_offsets_are_exact(
        prefix in "[a-z> ]{0,12}",
        body in "[a-z.{}:; ]{1,30}",
        suffix in "[a-z<> ]{0,12}"
    ) {
        let host = format!("{prefix}<style>{body}</style>{suffix}");
        let embeds = StyleTagLocator::new().locate(&host);

        prop_assert_eq!(embeds.len(), 1);
        prop_assert_eq!(&host[embeds[0].range()], body.as_str());
    }
}
