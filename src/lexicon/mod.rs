// SPDX-License-Identifier: PMPL-1.0-or-later

//! Thai to Python lexical tables.
//!
//! Two compile-time static tables drive the whole translation:
//!
//! - [`KEYWORDS`] maps Thai words onto Python keywords, literals and the
//!   handful of builtins people reach for first. Keywords are only replaced
//!   as whole words.
//! - [`OPERATORS`] maps Thai words onto operator symbols. Operators are
//!   replaced wherever they occur.
//!
//! Lookup is a linear scan, which is fine for a few dozen entries that are
//! only walked once per translator.
//!
//! ## Adding a token
//!
//! 1. Add the pair to `KEYWORDS` or `OPERATORS`
//! 2. Add a snippet for it to `tests/translator_tests.rs`

/// Thai keyword → Python keyword, literal or builtin name.
pub const KEYWORDS: &[(&str, &str)] = &[
    // Control flow
    ("ฟังก์ชัน", "def"),
    ("ส่งคืน", "return"),
    ("ถ้า", "if"),
    ("ทำอีก", "else"),
    ("หรือถ้า", "elif"),
    ("สำหรับ", "for"),
    ("ใน", "in"),
    ("ขณะที่", "while"),
    ("พยายาม", "try"),
    ("จับข้อผิดพลาด", "except"),
    ("ท้ายที่สุด", "finally"),
    // Literals
    ("จริง", "True"),
    ("เท็จ", "False"),
    ("ไม่มี", "None"),
    // Builtins
    ("พิมพ์", "print"),
    ("ช่วง", "range"),
    ("รายการ", "list"),
    ("พจนานุกรม", "dict"),
    ("เซต", "set"),
    ("ตัวเลข", "int"),
    ("ทศนิยม", "float"),
    ("ข้อความ", "str"),
    ("ความยาว", "len"),
];

/// Thai operator word → Python operator.
pub const OPERATORS: &[(&str, &str)] = &[
    // Arithmetic
    ("บวก", "+"),
    ("ลบ", "-"),
    ("คูณ", "*"),
    ("หาร", "/"),
    // Logical
    ("และ", "and"),
    ("หรือ", "or"),
    ("ไม่", "not"),
    // Comparison
    ("เท่ากับ", "=="),
    ("ไม่เท่ากับ", "!="),
    ("มากกว่า", ">"),
    ("น้อยกว่า", "<"),
    ("มากกว่าเท่ากับ", ">="),
    ("น้อยกว่าเท่ากับ", "<="),
];

/// Python equivalent of a Thai keyword.
pub fn keyword(thai: &str) -> Option<&'static str> {
    lookup(KEYWORDS, thai)
}

/// Python equivalent of a Thai operator word.
pub fn operator(thai: &str) -> Option<&'static str> {
    lookup(OPERATORS, thai)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(thai, _)| *thai == key)
        .map(|(_, python)| *python)
}

/// A table ordered longest token first.
///
/// A token that is a prefix of another (`มากกว่า` / `มากกว่าเท่ากับ`) must be
/// tried after it, otherwise the longer token gets split. Length is counted
/// in characters; ties keep table order.
pub fn longest_first(
    table: &'static [(&'static str, &'static str)],
) -> Vec<(&'static str, &'static str)> {
    let mut sorted = table.to_vec();
    sorted.sort_by_key(|(thai, _)| std::cmp::Reverse(thai.chars().count()));
    sorted
}
