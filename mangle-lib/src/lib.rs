//! Mangle Library - Identifier renaming across HTML, CSS and JavaScript
//!
//! This library finds renameable identifiers (classes, ids, attribute
//! names, custom properties) in the positions each language allows them,
//! and rewrites them from a replacement mapping without touching comments,
//! strings or unrelated text.
//!
//! ## Modules
//!
//! - [`expression`] - Scoped find/replace expressions (direct, nested, parallel)
//! - [`embed`] - Style and script regions embedded in host documents
//! - [`language`] - Language plugins and their expression factories
//! - [`options`] - Configuration records for each mangle intent
//! - [`intent`] - The named categories of renameable constructs
//! - [`source`] - Documents handed to plugins
//! - [`error`] - Error type and `Result` alias

pub mod embed;
pub mod error;
pub mod expression;
pub mod intent;
pub mod language;
pub mod options;
pub mod source;

pub use embed::{Embed, EmbedKind, EmbedLocator, splice_embeds};
pub use error::{MangleError, Result};
pub use expression::{
    DirectExpression, MangleExpression, NestedExpression, Occurrences, ParallelExpression,
    PatternTemplate, ReplacementMapping,
};
pub use intent::MangleIntent;
pub use language::{BuiltinLanguagesPlugin, ExpressionFactory, LanguagePlugin};
pub use options::{
    CssDeclarationPropertyOptions, CssDeclarationValueOptions, ExpressionOptions,
    MultiValueAttributeOptions, QuerySelectorOptions, SingleValueAttributeOptions,
};
pub use source::SourceFile;
