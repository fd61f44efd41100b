// SPDX-License-Identifier: PMPL-1.0-or-later

//! Syntax validation through Python's own parser.

use pyo3::prelude::*;

/// Parse `code` with `ast.parse` without running it.
///
/// The outer `PyResult` fails only when the `ast` module itself is
/// unusable; a parse failure comes back as `Ok(Err(message))` with the
/// parser's `str(SyntaxError)`.
pub fn check(py: Python<'_>, code: &str) -> PyResult<Result<(), String>> {
    let ast = py.import("ast")?;
    match ast.call_method1("parse", (code,)) {
        Ok(_) => Ok(Ok(())),
        Err(err) => Ok(Err(err.value(py).to_string())),
    }
}
