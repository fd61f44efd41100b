// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime error localization.
//!
//! A Python exception is reduced to its category (the concrete type name).
//! Known categories get a fixed localized message and lose their detail;
//! anything else keeps Python's own message.

use crate::i18n::{self, Lang};
use pyo3::prelude::*;
use pyo3::exceptions::PyBaseException;

/// Exception categories with a localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NameNotFound,
    InvalidSyntax,
    TypeMismatch,
    InvalidValue,
    IndexOutOfRange,
    KeyNotFound,
    AttributeNotFound,
    DivisionByZero,
    ImportFailure,
    FileNotFound,
}

impl ErrorCategory {
    pub fn all() -> &'static [ErrorCategory] {
        &[
            ErrorCategory::NameNotFound,
            ErrorCategory::InvalidSyntax,
            ErrorCategory::TypeMismatch,
            ErrorCategory::InvalidValue,
            ErrorCategory::IndexOutOfRange,
            ErrorCategory::KeyNotFound,
            ErrorCategory::AttributeNotFound,
            ErrorCategory::DivisionByZero,
            ErrorCategory::ImportFailure,
            ErrorCategory::FileNotFound,
        ]
    }

    /// Python exception type name for this category.
    pub fn type_name(&self) -> &'static str {
        match self {
            ErrorCategory::NameNotFound => "NameError",
            ErrorCategory::InvalidSyntax => "SyntaxError",
            ErrorCategory::TypeMismatch => "TypeError",
            ErrorCategory::InvalidValue => "ValueError",
            ErrorCategory::IndexOutOfRange => "IndexError",
            ErrorCategory::KeyNotFound => "KeyError",
            ErrorCategory::AttributeNotFound => "AttributeError",
            ErrorCategory::DivisionByZero => "ZeroDivisionError",
            ErrorCategory::ImportFailure => "ImportError",
            ErrorCategory::FileNotFound => "FileNotFoundError",
        }
    }

    /// Exact match on the concrete type name; subclasses such as
    /// `ModuleNotFoundError` are not folded into their parent.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.type_name() == name)
    }

    pub fn message(&self, lang: Lang) -> &'static str {
        let key = format!("error.{}", self.type_name());
        // Every category has a TH entry; see the catalog tests.
        i18n::t(lang, &key).unwrap_or_else(|| self.type_name())
    }
}

/// Message for an exception of type `type_name` whose own text is `default`.
pub fn localize(lang: Lang, type_name: &str, default: &str) -> String {
    match ErrorCategory::from_type_name(type_name) {
        Some(category) => category.message(lang).to_string(),
        None => default.to_string(),
    }
}

/// Localized message for a live exception object.
pub fn localize_exception(lang: Lang, value: &PyBaseException) -> String {
    let default = value.to_string();
    match value.get_type().name() {
        Ok(type_name) => localize(lang, type_name, &default),
        Err(_) => default,
    }
}

/// Localized message for a raised Python error.
pub fn translate_error(py: Python<'_>, err: &PyErr, lang: Lang) -> String {
    localize_exception(lang, err.value(py))
}

/// Concrete type name of a raised error, for logging.
pub fn category_name(py: Python<'_>, err: &PyErr) -> String {
    err.get_type(py)
        .name()
        .map(str::to_string)
        .unwrap_or_else(|_| "<unknown>".to_string())
}
