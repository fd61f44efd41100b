// SPDX-License-Identifier: PMPL-1.0-or-later

//! String literal shielding.
//!
//! Quoted spans are swapped for placeholders before substitution and
//! swapped back afterwards, so Thai words inside user strings are never
//! translated.
//!
//! A placeholder is a decimal index between two private-use characters
//! absent from the source. Neither is a word character, so a keyword written
//! flush against a quote still sits on a token boundary after shielding.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Triple-quoted literals first, then `"..."` or `'...'`, all spanning
/// newlines, where a backslash escapes the next character. Inside a triple
/// quote, one or two delimiter characters not followed by a third are
/// content. An unterminated quote does not match.
const LITERAL_PATTERN: &str = concat!(
    r#"(?s)"""(?:[^"\\]|\\.|"{1,2}(?:[^"\\]|\\.))*""""#,
    r#"|'''(?:[^'\\]|\\.|'{1,2}(?:[^'\\]|\\.))*'''"#,
    r#"|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
);

/// Basic Multilingual Plane private-use area.
const PRIVATE_USE: RangeInclusive<u32> = 0xE000..=0xF8FF;

fn literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LITERAL_PATTERN).expect("literal pattern is valid"))
}

/// Placeholder → original literal text, delimiters included.
///
/// Lives for a single translation.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderTable {
    entries: Vec<(String, String)>,
}

impl PlaceholderTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(placeholder, literal)| (placeholder.as_str(), literal.as_str()))
    }

    /// Put every literal back in place of its placeholder.
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for (placeholder, literal) in &self.entries {
            restored = restored.replace(placeholder.as_str(), literal);
        }
        restored
    }
}

/// Replace every string literal in `source` with a placeholder.
pub fn shield(source: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::default();

    // Only a source using every private-use character leaves no delimiters.
    let Some((open, close)) = delimiters(source) else {
        return (source.to_string(), table);
    };

    let shielded = literal_re().replace_all(source, |caps: &regex::Captures<'_>| {
        let placeholder = format!("{}{}{}", open, table.entries.len(), close);
        table
            .entries
            .push((placeholder.clone(), caps[0].to_string()));
        placeholder
    });

    (shielded.into_owned(), table)
}

/// The first two private-use characters that do not occur in `source`.
fn delimiters(source: &str) -> Option<(char, char)> {
    let mut unused = PRIVATE_USE
        .filter_map(char::from_u32)
        .filter(|c| !source.contains(*c));
    Some((unused.next()?, unused.next()?))
}
