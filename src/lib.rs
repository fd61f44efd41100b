// SPDX-License-Identifier: PMPL-1.0-or-later

//! thai-python: run Python written with Thai keywords.
//!
//! The crate is a keyword-substitution preprocessor, not an interpreter.
//! Thai words are swapped for Python tokens, string literals are left
//! untouched, and the result is handed to an embedded CPython to parse and
//! run.
//!
//! - [`lexicon`]: the Thai → Python keyword and operator tables
//! - [`translator`]: shield literals, substitute, restore, validate
//! - [`runtime`]: fresh namespace per run, caught and localized failures
//! - [`i18n`]: localized runtime messages
//!
//! ```no_run
//! use thai_python::translator::Translator;
//!
//! let translation = Translator::new().translate("ถ้า จริง:\n    พิมพ์(\"ใช่\")\n");
//! assert_eq!(translation.code, "if True:\n    print(\"ใช่\")\n");
//! ```

pub mod config;
pub mod i18n;
pub mod lexicon;
pub mod runtime;
pub mod translator;

pub use runtime::{execute_translated_code, ExecOptions, Execution, Harness, Outcome, Sink};
pub use translator::{TranslateError, Translation, Translator};
