//! Sub-language regions extracted from host documents.
//!
//! An [`Embed`] records where a style or script body sits inside its host
//! so it can be mangled on its own and spliced back byte for byte. Offsets
//! always refer to the inner content in the original host text, never to
//! the surrounding tags or quotes.
//!
//! ## Locators
//!
//! - [`StyleTagLocator`] - bodies of `<style>` elements
//! - [`StyleAttributeLocator`] - `style="..."` declaration lists, wrapped as `:root{...}`
//! - [`ScriptTagLocator`] - bodies of `<script>` elements
//!
//! ## Examples
//!
//! ```
//! use mangle_lib::embed::{EmbedLocator, StyleAttributeLocator};
//!
//! let host = r#"<div style="color: red;"></div>"#;
//! let embeds = StyleAttributeLocator::new().locate(host);
//!
//! assert_eq!(embeds.len(), 1);
//! assert_eq!(embeds[0].raw(), "color: red;");
//! assert_eq!((embeds[0].start(), embeds[0].end()), (12, 23));
//! assert_eq!(&host[embeds[0].range()], embeds[0].raw());
//! ```

pub mod attributes;
pub mod tags;

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::source::SourceFile;

pub use attributes::StyleAttributeLocator;
pub use tags::{ScriptTagLocator, StyleTagLocator};

/// The language of an embedded region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    Css,
    Js,
}

impl EmbedKind {
    /// The language tag plugins register for this kind.
    pub fn language(&self) -> &'static str {
        match self {
            EmbedKind::Css => "css",
            EmbedKind::Js => "js",
        }
    }
}

/// Synthetic text placed around raw content so it parses standalone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// An extracted sub-language region.
///
/// `host[embed.range()] == embed.raw()` holds for the host the embed was
/// located in, until that host is modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    kind: EmbedKind,
    content: String,
    start: usize,
    end: usize,
    wrapper: Option<Wrapper>,
}

impl Embed {
    /// An embed whose content is exactly the raw region at `start`.
    pub fn new(kind: EmbedKind, raw: &str, start: usize) -> Self {
        Self {
            kind,
            content: raw.to_string(),
            start,
            end: start + raw.len(),
            wrapper: None,
        }
    }

    /// An embed whose content is the raw region surrounded by `wrapper`.
    pub fn wrapped(kind: EmbedKind, raw: &str, start: usize, wrapper: Wrapper) -> Self {
        Self {
            kind,
            content: format!("{}{}{}", wrapper.prefix, raw, wrapper.suffix),
            start,
            end: start + raw.len(),
            wrapper: Some(wrapper),
        }
    }

    /// The language the embedded code is written in.
    pub fn kind(&self) -> EmbedKind {
        self.kind
    }

    /// The content to mangle, wrapper included.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Byte offset in the host where the raw content begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset in the host just past the raw content.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the raw content in the host.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The wrapper applied around the raw content, if any.
    ///
    /// `style` attribute values are wrapped as a `:root{...}` rule so that
    /// declaration expressions see a complete stylesheet.
    pub fn wrapper(&self) -> Option<Wrapper> {
        self.wrapper
    }

    /// The content with any synthetic wrapper removed.
    ///
    /// If rewriting altered the wrapper itself, the full content is
    /// returned rather than cutting at a guessed boundary.
    pub fn raw(&self) -> &str {
        let Some(wrapper) = self.wrapper else {
            return &self.content;
        };

        self.content
            .strip_prefix(wrapper.prefix)
            .and_then(|inner| inner.strip_suffix(wrapper.suffix))
            .unwrap_or(&self.content)
    }

    /// A copy carrying rewritten content, keeping offsets and wrapper.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Views the embed as a document of its own language.
    pub fn as_source(&self) -> SourceFile<'_> {
        SourceFile::new(self.kind.language(), &self.content)
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} embed at {}..{}", self.kind, self.start, self.end)
    }
}

/// Finds one kind of sub-language region in host text.
pub trait EmbedLocator: Send + Sync + fmt::Debug {
    /// Every non-empty region, in document order.
    fn locate(&self, host: &str) -> Vec<Embed>;
}

/// Writes each embed's [`Embed::raw`] back over its original range.
///
/// Embeds whose range does not fit the host, or overlaps an embed that
/// starts earlier, are skipped.
pub fn splice_embeds(host: &str, embeds: &[Embed]) -> String {
    let mut ordered: Vec<&Embed> = embeds.iter().collect();
    ordered.sort_by_key(|embed| (embed.start, embed.end));

    let mut output = String::with_capacity(host.len());
    let mut last = 0;

    for embed in ordered {
        if embed.start < last || host.get(embed.range()).is_none() {
            continue;
        }

        output.push_str(&host[last..embed.start]);
        output.push_str(embed.raw());
        last = embed.end;
    }

    output.push_str(&host[last..]);
    output
}
