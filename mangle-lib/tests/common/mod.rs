//! Common test utilities for mangling integration tests.
//!
//! Provides fixture loading and a small driver that mangles a document
//! together with its embeds, the way a build pipeline would.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use mangle_lib::{
    ExpressionOptions, LanguagePlugin, ReplacementMapping, SourceFile, splice_embeds,
};

/// Loads a fixture from the `tests/fixtures/` directory.
///
/// ## Panics
///
/// Panics if the fixture file cannot be read or does not exist.
pub fn load_fixture(path: &str) -> String {
    let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixture_path.push("tests");
    fixture_path.push("fixtures");
    fixture_path.push(path);

    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {:?}: {}",
            fixture_path.display(),
            e
        )
    })
}

pub fn mapping(pairs: &[(&str, &str)]) -> ReplacementMapping {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

/// One intent applied with one mapping.
pub struct Rename {
    pub options: ExpressionOptions,
    pub mapping: ReplacementMapping,
}

/// Mangles the embeds of `file` first, splices them back, then applies
/// every rename to the host itself.
pub fn mangle(plugin: &dyn LanguagePlugin, file: SourceFile<'_>, renames: &[Rename]) -> String {
    let embeds: Vec<_> = plugin
        .embeds(&file)
        .into_iter()
        .map(|embed| {
            let mangled = mangle(plugin, embed.as_source(), renames);
            embed.with_content(mangled)
        })
        .collect();

    let mut text = splice_embeds(file.content, &embeds);
    for rename in renames {
        let set = plugin.expressions_for(&rename.options).unwrap();
        for expression in set.get(file.kind).into_iter().flatten() {
            text = expression
                .replace_all(&text, &rename.mapping)
                .unwrap()
                .into_owned();
        }
    }
    text
}
