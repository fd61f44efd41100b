// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyword and operator substitution over shielded source.

use crate::lexicon::{self, KEYWORDS, OPERATORS};
use regex::Regex;

/// Applies the lexical tables, keywords first, longest token first.
pub struct Substituter {
    keywords: Vec<(Regex, &'static str)>,
    operators: Vec<(&'static str, &'static str)>,
}

impl Substituter {
    pub fn new() -> Self {
        let keywords = lexicon::longest_first(KEYWORDS)
            .into_iter()
            .map(|(thai, python)| {
                // \b is Unicode-aware, so Thai vowel and tone marks count as
                // word characters just as they do in Python identifiers.
                let pattern = format!(r"\b{}\b", regex::escape(thai));
                let re = Regex::new(&pattern).expect("escaped keyword is a valid pattern");
                (re, python)
            })
            .collect();

        Self {
            keywords,
            operators: lexicon::longest_first(OPERATORS),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let text = self.apply_keywords(text);
        self.apply_operators(&text)
    }

    /// Whole-word replacement only: a keyword inside a longer identifier stays.
    pub fn apply_keywords(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (re, python) in &self.keywords {
            if re.is_match(&out) {
                out = re.replace_all(&out, regex::NoExpand(*python)).into_owned();
            }
        }
        out
    }

    /// Plain textual replacement, no boundary check.
    pub fn apply_operators(&self, text: &str) -> String {
        let mut out = text.to_string();
        for &(thai, python) in &self.operators {
            if out.contains(thai) {
                out = out.replace(thai, python);
            }
        }
        out
    }
}

impl Default for Substituter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_replaced_as_whole_word() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_keywords("ถ้า จริง:"), "if True:");
    }

    #[test]
    fn keyword_inside_identifier_untouched() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_keywords("ถ้าหาก = 1"), "ถ้าหาก = 1");
        assert_eq!(sub.apply_keywords("ในบ้าน = 2"), "ในบ้าน = 2");
        assert_eq!(sub.apply_keywords("x_ใน = 3"), "x_ใน = 3");
    }

    #[test]
    fn keyword_ending_in_combining_mark_is_matched() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_keywords("พิมพ์(1)"), "print(1)");
    }

    #[test]
    fn elif_wins_over_its_suffix() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_keywords("หรือถ้า x:"), "elif x:");
    }

    #[test]
    fn longer_operator_wins() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_operators("a มากกว่าเท่ากับ b"), "a >= b");
        assert_eq!(sub.apply_operators("a น้อยกว่าเท่ากับ b"), "a <= b");
        assert_eq!(sub.apply_operators("a ไม่เท่ากับ b"), "a != b");
        assert_eq!(sub.apply_operators("a มากกว่า b"), "a > b");
    }

    #[test]
    fn operators_ignore_word_boundaries() {
        let sub = Substituter::new();
        assert_eq!(sub.apply_operators("1บวก2"), "1+2");
    }

    #[test]
    fn keywords_run_before_operators() {
        let sub = Substituter::new();
        // ไม่มี is a keyword; its prefix ไม่ is an operator.
        assert_eq!(sub.apply("x = ไม่มี"), "x = None");
        assert_eq!(sub.apply("x = ไม่ จริง"), "x = not True");
    }
}
