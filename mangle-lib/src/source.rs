//! Documents handed to language plugins.

/// A document's content together with its language tag (e.g. `"html"`).
///
/// The tag is matched against the aliases a plugin recognizes, so embeds
/// can be fed back through the same plugins as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile<'a> {
    pub kind: &'a str,
    pub content: &'a str,
}

impl<'a> SourceFile<'a> {
    pub fn new(kind: &'a str, content: &'a str) -> Self {
        Self { kind, content }
    }
}
