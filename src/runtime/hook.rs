// SPDX-License-Identifier: PMPL-1.0-or-later

//! Opt-in process-wide interpreter setup.
//!
//! Nothing here runs on library load. The CLI calls [`use_utf8_stdio`] and
//! [`install_excepthook`] once at startup; embedders that want Python's
//! stock streams and reporter simply don't.

use super::errors;
use crate::i18n::{self, Lang};
use pyo3::exceptions::PyBaseException;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use tracing::debug;

/// Switch `sys.stdout` and `sys.stderr` to UTF-8 so Thai text prints
/// under a C or POSIX locale. Streams without `reconfigure` are left alone.
pub fn use_utf8_stdio(py: Python<'_>) -> PyResult<()> {
    let sys = py.import("sys")?;
    for stream in ["stdout", "stderr"] {
        let handle = sys.getattr(stream)?;
        if handle.hasattr("reconfigure")? {
            let kwargs = PyDict::new(py);
            kwargs.set_item("encoding", "utf-8")?;
            handle.call_method("reconfigure", (), Some(kwargs))?;
        }
    }
    debug!("python stdio reconfigured to utf-8");
    Ok(())
}

/// The line printed ahead of the stock traceback.
pub fn summary_line(lang: Lang, message: &str) -> String {
    format!("{}: {}", i18n::t_or_key(lang, "hook.prefix"), message)
}

/// Replace `sys.excepthook` with one that prints a localized summary line
/// and then hands off to `sys.__excepthook__`.
pub fn install_excepthook(py: Python<'_>, lang: Lang) -> PyResult<()> {
    let hook = PyCFunction::new_closure(
        py,
        Some("thai_excepthook"),
        Some("Print a localized summary, then the default traceback."),
        move |args: &PyTuple, _kwargs: Option<&PyDict>| -> PyResult<()> {
            let py = args.py();
            let (exc_type, value, traceback): (&PyAny, &PyAny, &PyAny) = args.extract()?;

            let message = match value.downcast::<PyBaseException>() {
                Ok(exception) => errors::localize_exception(lang, exception),
                Err(_) => value.to_string(),
            };
            let builtins = py.import("builtins")?;
            builtins
                .getattr("print")?
                .call1((summary_line(lang, &message),))?;

            let sys = py.import("sys")?;
            sys.getattr("__excepthook__")?
                .call1((exc_type, value, traceback))?;
            Ok(())
        },
    )?;

    py.import("sys")?.setattr("excepthook", hook)?;
    debug!(%lang, "installed localized excepthook");
    Ok(())
}
