// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for runtime errors.
//!
//! Embeds every user-facing runtime string as a compile-time static table.
//! Thai is the source language: all keys are defined in `TH`, and lookups in
//! other languages fall back to it.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`

use clap::ValueEnum;

/// Language for runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Lang {
    #[default]
    Th,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Th => "th",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code, ignoring case and any `_REGION.encoding`
    /// suffix (`th_TH.UTF-8` → `Th`).
    pub fn from_code(code: &str) -> Option<Lang> {
        let base = code.split(['_', '-', '.']).next().unwrap_or("");
        match base.to_ascii_lowercase().as_str() {
            "th" => Some(Lang::Th),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::Th, Lang::En]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up `key` in `lang`, falling back to Thai.
///
/// Returns `None` only when the key is missing from the Thai table too.
pub fn t(lang: Lang, key: &str) -> Option<&'static str> {
    lookup(catalog_for(lang), key).or_else(|| {
        if lang != Lang::Th {
            lookup(TH, key)
        } else {
            None
        }
    })
}

/// Like [`t`], but returns the key itself when nothing matches.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    t(lang, key).unwrap_or(key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Th => TH,
        Lang::En => EN,
    }
}

// ─── Thai (source language, all keys defined here) ─────────────────

const TH: &[(&str, &str)] = &[
    // Exception categories, keyed by Python type name
    ("error.NameError", "ชื่อที่ระบุไม่มีอยู่ในขอบเขตนี้"),
    ("error.SyntaxError", "โครงสร้างของโค้ดไม่ถูกต้อง"),
    ("error.TypeError", "ชนิดข้อมูลไม่ถูกต้อง"),
    ("error.ValueError", "ค่าไม่ถูกต้อง"),
    ("error.IndexError", "ดัชนีเกินขอบเขต"),
    ("error.KeyError", "ไม่พบคีย์ที่ระบุ"),
    ("error.AttributeError", "ไม่พบคุณสมบัติที่ระบุ"),
    ("error.ZeroDivisionError", "หารด้วยศูนย์"),
    ("error.ImportError", "นำเข้าโมดูลไม่สำเร็จ"),
    ("error.FileNotFoundError", "ไม่พบไฟล์ที่ระบุ"),
    // Top-level hook
    ("hook.prefix", "ข้อผิดพลาด"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("error.NameError", "name is not defined in this scope"),
    ("error.SyntaxError", "invalid code structure"),
    ("error.TypeError", "invalid data type"),
    ("error.ValueError", "invalid value"),
    ("error.IndexError", "index out of range"),
    ("error.KeyError", "key not found"),
    ("error.AttributeError", "attribute not found"),
    ("error.ZeroDivisionError", "division by zero"),
    ("error.ImportError", "module import failed"),
    ("error.FileNotFoundError", "file not found"),
    ("hook.prefix", "Error"),
];
