// SPDX-License-Identifier: PMPL-1.0-or-later

//! Execution harness.
//!
//! Translates a Thai script, and if it validates, runs it in a fresh
//! namespace on the embedded interpreter. Every failure is caught here and
//! turned into one user-visible line; nothing escapes to the caller as a
//! Python exception.

pub mod errors;
pub mod hook;
pub mod namespace;

use crate::i18n::Lang;
use crate::translator::{TranslateError, Translation, Translator};
use pyo3::exceptions::PySystemExit;
use pyo3::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};

/// Where the script's `print` output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// The process's standard output, as it happens.
    Stdout,
    /// A per-call buffer returned in [`Execution::output`].
    Capture,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecOptions {
    pub lang: Lang,
    /// Also hand runtime failures to `sys.excepthook` for a full traceback.
    pub traceback: bool,
}

/// A caught runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFailure {
    /// Concrete Python exception type name.
    pub category: String,
    /// Localized message, or Python's own text for unknown categories.
    pub message: String,
}

impl fmt::Display for RuntimeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Runtime error: {}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    TranslationFailed(TranslateError),
    RuntimeFailed(RuntimeFailure),
    /// The script raised `SystemExit`.
    Exited(i32),
}

impl Outcome {
    /// Line reported to the user for this outcome, if any.
    pub fn report_line(&self) -> Option<String> {
        match self {
            Outcome::Completed | Outcome::Exited(_) => None,
            Outcome::TranslationFailed(err) => Some(err.to_string()),
            Outcome::RuntimeFailed(failure) => Some(failure.to_string()),
        }
    }

    /// Process exit status. Reported failures count as handled.
    pub fn exit_status(&self) -> i32 {
        match self {
            Outcome::Exited(code) => *code,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Execution {
    pub translation: Translation,
    /// Captured output including the report line; empty for [`Sink::Stdout`].
    pub output: String,
    pub outcome: Outcome,
}

pub struct Harness {
    translator: Translator,
    options: ExecOptions,
}

impl Harness {
    pub fn new(options: ExecOptions) -> Self {
        Self {
            translator: Translator::new(),
            options,
        }
    }

    pub fn execute(&self, source: &str, sink: Sink) -> Execution {
        let translation = self.translator.translate(source);

        let (mut output, outcome) = match &translation.error {
            Some(err) => {
                warn!(%err, "translation failed, not executing");
                (String::new(), Outcome::TranslationFailed(err.clone()))
            }
            None => Python::with_gil(|py| self.run(py, &translation.code, sink)),
        };

        if let Some(line) = outcome.report_line() {
            match sink {
                Sink::Stdout => println!("{}", line),
                Sink::Capture => {
                    output.push_str(&line);
                    output.push('\n');
                }
            }
        }

        Execution {
            translation,
            output,
            outcome,
        }
    }

    fn run(&self, py: Python<'_>, code: &str, sink: Sink) -> (String, Outcome) {
        match self.try_run(py, code, sink) {
            Ok(done) => done,
            // The harness itself failed (namespace, buffer); still report it.
            Err(err) => (String::new(), self.failure(py, &err)),
        }
    }

    fn try_run(&self, py: Python<'_>, code: &str, sink: Sink) -> PyResult<(String, Outcome)> {
        let buffer = match sink {
            Sink::Capture => Some(py.import("io")?.getattr("StringIO")?.call0()?),
            Sink::Stdout => None,
        };
        let globals = namespace::build(py, buffer)?;

        info!(bytes = code.len(), "executing translated script");
        let result = py.run(code, Some(globals), None);

        let outcome = match result {
            Ok(()) => {
                debug!("script completed");
                Outcome::Completed
            }
            Err(err) if err.is_instance_of::<PySystemExit>(py) => {
                let code = exit_code(py, &err);
                debug!(code, "script exited");
                Outcome::Exited(code)
            }
            Err(err) => self.failure(py, &err),
        };
        flush_std_streams(py);

        let captured = match buffer {
            Some(buffer) => buffer.call_method0("getvalue")?.extract()?,
            None => String::new(),
        };
        Ok((captured, outcome))
    }

    fn failure(&self, py: Python<'_>, err: &PyErr) -> Outcome {
        let category = errors::category_name(py, err);
        let message = errors::translate_error(py, err, self.options.lang);
        info!(%category, "script raised");

        if self.options.traceback {
            err.print(py);
        }
        Outcome::RuntimeFailed(RuntimeFailure { category, message })
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(ExecOptions::default())
    }
}

/// Translate and run `source` against standard output with default options.
///
/// Failures are printed, not returned as errors; the outcome says which
/// path was taken.
pub fn execute_translated_code(source: &str) -> Outcome {
    Harness::default().execute(source, Sink::Stdout).outcome
}

/// `SystemExit.code` as a process status: `None` is 0, an int is itself,
/// anything else is printed and becomes 1.
fn exit_code(py: Python<'_>, err: &PyErr) -> i32 {
    let code = match err.value(py).getattr("code") {
        Ok(code) => code,
        Err(_) => return 1,
    };
    if code.is_none() {
        return 0;
    }
    match code.extract::<i32>() {
        Ok(status) => status,
        Err(_) => {
            eprintln!("{}", code);
            1
        }
    }
}

/// The interpreter is never finalized, so its buffered streams must be
/// flushed before Rust writes anything after them.
fn flush_std_streams(py: Python<'_>) {
    let Ok(sys) = py.import("sys") else {
        return;
    };
    for stream in ["stdout", "stderr"] {
        if let Ok(handle) = sys.getattr(stream) {
            if let Err(err) = handle.call_method0("flush") {
                debug!(stream, %err, "flush failed");
            }
        }
    }
}
