//! Inline `style` attributes.

use regex::Regex;
use tracing::debug;

use super::{Embed, EmbedKind, EmbedLocator, Wrapper};

/// Wraps a declaration list so it parses as a standalone stylesheet.
pub const STYLE_ATTRIBUTE_WRAPPER: Wrapper = Wrapper {
    prefix: ":root{",
    suffix: "}",
};

const STYLE_ATTRIBUTE_PATTERN: &str = concat!(
    r#"(?is)<!--.*?-->"#,
    r#"|<[a-z][^\s/>]*"#,
    r#"(?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*?"#,
    r#"\s+style\s*=\s*(?:"(?P<content_1>[^"]*)"|'(?P<content_2>[^']*)')"#,
);

/// Locates quoted `style` attribute values inside start tags.
///
/// Each value is yielded as a CSS embed wrapped in
/// [`STYLE_ATTRIBUTE_WRAPPER`]; offsets cover the value between the quotes.
#[derive(Debug)]
pub struct StyleAttributeLocator {
    regex: Regex,
}

impl StyleAttributeLocator {
    pub fn new() -> Self {
        let regex =
            Regex::new(STYLE_ATTRIBUTE_PATTERN).expect("style attribute pattern is valid");
        Self { regex }
    }
}

impl Default for StyleAttributeLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedLocator for StyleAttributeLocator {
    fn locate(&self, host: &str) -> Vec<Embed> {
        let embeds: Vec<Embed> = self
            .regex
            .captures_iter(host)
            .filter_map(|captures| {
                captures
                    .name("content_1")
                    .or_else(|| captures.name("content_2"))
            })
            .filter(|content| !content.is_empty())
            .map(|content| {
                Embed::wrapped(
                    EmbedKind::Css,
                    content.as_str(),
                    content.start(),
                    STYLE_ATTRIBUTE_WRAPPER,
                )
            })
            .collect();

        debug!(count = embeds.len(), "located style attribute embeds");
        embeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(host: &str) -> Vec<Embed> {
        let embeds = StyleAttributeLocator::new().locate(host);
        for embed in &embeds {
            assert_eq!(&host[embed.range()], embed.raw(), "offsets for {embed}");
        }
        embeds
    }

    #[test]
    fn test_style_attribute() {
        let embeds = locate(r#"<div style="color: red;"></div>"#);
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0].raw(), "color: red;");
        assert_eq!(embeds[0].content(), ":root{color: red;}");
        assert_eq!((embeds[0].start(), embeds[0].end()), (12, 23));
    }

    #[test]
    fn test_single_quoted_style_attribute() {
        let embeds = locate("<p style='margin: 0'>");
        assert_eq!(embeds[0].raw(), "margin: 0");
    }

    #[test]
    fn test_style_after_other_attributes() {
        let host = r#"<a href="x>y" data-style="no" hidden STYLE = "top: 0">"#;
        let embeds = locate(host);
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0].raw(), "top: 0");
    }

    #[test]
    fn test_style_attributes_on_several_elements() {
        let embeds = locate(r#"<p style="a: 1"><span style="b: 2"></span></p>"#);
        let raws: Vec<&str> = embeds.iter().map(Embed::raw).collect();
        assert_eq!(raws, vec!["a: 1", "b: 2"]);
    }

    #[test]
    fn test_empty_style_attribute_is_skipped() {
        assert!(locate(r#"<p style=""></p>"#).is_empty());
    }

    #[test]
    fn test_style_text_outside_tags_is_ignored() {
        assert!(locate(r#"<p>style="color: red"</p>"#).is_empty());
    }

    #[test]
    fn test_style_inside_other_attribute_value_is_ignored() {
        assert!(locate(r#"<p title='style="color: red"'></p>"#).is_empty());
    }

    #[test]
    fn test_commented_style_attribute_is_skipped() {
        let embeds = locate(r#"<!-- <p style="a: 1"> --><p style="b: 2">"#);
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0].raw(), "b: 2");
    }

    #[test]
    fn test_unterminated_style_attribute_is_skipped() {
        assert!(locate(r#"<p style="color: red></p>"#).is_empty());
    }
}
