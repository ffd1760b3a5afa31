//! Element bodies: `<style>` and `<script>`.

use regex::Regex;
use tracing::debug;

use super::{Embed, EmbedKind, EmbedLocator};

/// Finds the verbatim body of every `tag` element in a host document.
///
/// The tag name is matched case-insensitively, attributes (quoted values
/// may contain `>`) are tolerated, and the body runs to the first closing
/// tag. HTML comments are matched as a whole and discarded, so commented
/// out elements never produce an embed.
#[derive(Debug)]
struct ElementBodyLocator {
    kind: EmbedKind,
    regex: Regex,
}

impl ElementBodyLocator {
    fn new(tag: &str, kind: EmbedKind) -> Self {
        let pattern = format!(
            r#"(?is)<!--.*?-->|<{tag}(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>(?P<content>.*?)</{tag}\s*>"#
        );
        let regex = Regex::new(&pattern).expect("element body pattern is valid");
        Self { kind, regex }
    }

    fn locate(&self, host: &str) -> Vec<Embed> {
        let embeds: Vec<Embed> = self
            .regex
            .captures_iter(host)
            .filter_map(|captures| captures.name("content"))
            .filter(|content| !content.is_empty())
            .map(|content| Embed::new(self.kind, content.as_str(), content.start()))
            .collect();

        debug!(kind = %self.kind, count = embeds.len(), "located element embeds");
        embeds
    }
}

/// Locates `<style>` element bodies as CSS embeds.
#[derive(Debug)]
pub struct StyleTagLocator(ElementBodyLocator);

impl StyleTagLocator {
    pub fn new() -> Self {
        Self(ElementBodyLocator::new("style", EmbedKind::Css))
    }
}

impl Default for StyleTagLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedLocator for StyleTagLocator {
    fn locate(&self, host: &str) -> Vec<Embed> {
        self.0.locate(host)
    }
}

/// Locates `<script>` element bodies as JavaScript embeds.
#[derive(Debug)]
pub struct ScriptTagLocator(ElementBodyLocator);

impl ScriptTagLocator {
    pub fn new() -> Self {
        Self(ElementBodyLocator::new("script", EmbedKind::Js))
    }
}

impl Default for ScriptTagLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedLocator for ScriptTagLocator {
    fn locate(&self, host: &str) -> Vec<Embed> {
        self.0.locate(host)
    }
}
