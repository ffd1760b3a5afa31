//! Scoped find/replace expressions.
//!
//! An expression wraps one or two [`PatternTemplate`]s and exposes two
//! operations:
//!
//! - [`MangleExpression::find_all`] fills the template with an identifier
//!   pattern and lazily yields every identifier found, left to right
//! - [`MangleExpression::replace_all`] fills the template with the
//!   disjunction of a mapping's keys and substitutes every mapped
//!   occurrence in a single pass
//!
//! ## Strategies
//!
//! - [`DirectExpression`] - one template whose capture surrounds the identifier
//! - [`NestedExpression`] - an outer template finds a containing region, an
//!   inner template finds the identifiers inside it
//! - [`ParallelExpression`] - a direct expression that rewrites its whole
//!   consumed match through a fixed decoration
//!
//! ## Examples
//!
//! ```
//! use mangle_lib::expression::{DirectExpression, MangleExpression, PatternTemplate};
//!
//! let template = PatternTemplate::new(r"#(?P<main>%s)(?P<ahead>\{)").unwrap();
//! let expression = DirectExpression::new(template, "main", true);
//!
//! let found: Vec<String> = expression.find_all("#foobar{}", "[a-z]+").unwrap().collect();
//! assert_eq!(found, vec!["foobar"]);
//! ```

pub mod direct;
pub mod nested;
pub mod parallel;
mod scan;
pub mod template;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

pub use direct::DirectExpression;
pub use nested::NestedExpression;
pub use parallel::ParallelExpression;
pub use template::{AHEAD_GROUP, PLACEHOLDER, PatternTemplate};

/// Original identifier to replacement identifier.
pub type ReplacementMapping = HashMap<String, String>;

/// Lazily evaluated identifiers found by [`MangleExpression::find_all`].
pub type Occurrences<'t> = Box<dyn Iterator<Item = String> + 't>;

/// A reusable, stateless matcher/replacer for one kind of identifier position.
///
/// Implementations are immutable after construction and can be shared
/// across threads and documents.
pub trait MangleExpression: Send + Sync + fmt::Debug {
    /// Finds every identifier matching `pattern`, in document order.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::MangleError::InvalidPattern`] if the filled-in
    /// template does not compile.
    fn find_all<'t>(&self, text: &'t str, pattern: &str) -> Result<Occurrences<'t>>;

    /// Replaces every occurrence of a mapped identifier.
    ///
    /// Returns `Cow::Borrowed` when nothing was replaced. Unmapped
    /// identifiers and all surrounding text are left untouched.
    fn replace_all<'t>(
        &self,
        text: &'t str,
        mapping: &ReplacementMapping,
    ) -> Result<Cow<'t, str>>;
}
