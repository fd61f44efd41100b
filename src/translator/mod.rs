// SPDX-License-Identifier: PMPL-1.0-or-later

//! Thai source → Python source.
//!
//! The pipeline is deliberately shallow:
//!
//! 1. [`shield`] string literals behind placeholders
//! 2. substitute keywords, then operators, longest token first
//! 3. restore the literals
//! 4. [`validate`] the result with Python's parser
//!
//! Nothing here understands Python; correctness of the output is whatever
//! `ast.parse` says it is.

pub mod shield;
pub mod substitute;
pub mod validate;

use pyo3::Python;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

pub use substitute::Substituter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The substituted text is not valid Python.
    #[error("Translation error: {0}")]
    Syntax(String),

    /// The embedded interpreter could not run the parser at all.
    #[error("Translation error: interpreter unavailable: {0}")]
    Interpreter(String),
}

impl Serialize for TranslateError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Output of one translation: best-effort Python text plus the error, if any.
///
/// On failure `code` is still the substituted text, for display only.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub code: String,
    pub error: Option<TranslateError>,
}

impl Translation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<String, TranslateError> {
        match self.error {
            None => Ok(self.code),
            Some(err) => Err(err),
        }
    }
}

/// Holds the sorted lexical tables; build once, translate many times.
pub struct Translator {
    substituter: Substituter,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            substituter: Substituter::new(),
        }
    }

    /// Translate without validating. Exposed for tooling that only wants
    /// the substituted text.
    pub fn substitute(&self, source: &str) -> String {
        let (shielded, literals) = shield::shield(source);
        debug!(literals = literals.len(), "shielded string literals");

        let substituted = self.substituter.apply(&shielded);
        literals.restore(&substituted)
    }

    pub fn translate(&self, source: &str) -> Translation {
        let code = self.substitute(source);

        let verdict = Python::with_gil(|py| validate::check(py, &code));
        let error = match verdict {
            Ok(Ok(())) => None,
            Ok(Err(message)) => Some(TranslateError::Syntax(message)),
            Err(err) => Some(TranslateError::Interpreter(err.to_string())),
        };

        match &error {
            None => debug!(bytes = code.len(), "translation validated"),
            Some(err) => debug!(%err, "translation rejected"),
        }

        Translation { code, error }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
