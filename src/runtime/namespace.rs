// SPDX-License-Identifier: PMPL-1.0-or-later

//! Evaluation namespace.
//!
//! Every execution gets a fresh globals dict: a copy of `builtins`, then the
//! Thai aliases from [`ALIASES`]. Nothing survives from one run to the next.

use pyo3::prelude::*;
use pyo3::types::PyDict;

/// A Thai name bound to a Python builtin in every namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub name: &'static str,
    pub builtin: &'static str,
}

pub const ALIASES: &[Alias] = &[
    Alias { name: "พิมพ์", builtin: "print" },
    Alias { name: "ตัวเลข", builtin: "int" },
    Alias { name: "ทศนิยม", builtin: "float" },
    Alias { name: "ข้อความ", builtin: "str" },
    Alias { name: "รายการ", builtin: "list" },
    Alias { name: "พจนานุกรม", builtin: "dict" },
    Alias { name: "เซต", builtin: "set" },
];

/// Build the globals dict for one execution.
///
/// With `print_to` set, `print` and every alias of it write to that file
/// object instead of `sys.stdout`.
pub fn build<'py>(py: Python<'py>, print_to: Option<&'py PyAny>) -> PyResult<&'py PyDict> {
    let builtins = py.import("builtins")?;
    let globals = builtins.dict().copy()?;

    globals.set_item("__builtins__", builtins)?;
    globals.set_item("__name__", "__main__")?;

    let print = match print_to {
        Some(file) => {
            let kwargs = PyDict::new(py);
            kwargs.set_item("file", file)?;
            let partial = py.import("functools")?.getattr("partial")?;
            Some(partial.call((builtins.getattr("print")?,), Some(kwargs))?)
        }
        None => None,
    };
    if let Some(print) = print {
        globals.set_item("print", print)?;
    }

    for alias in ALIASES {
        let value = match (alias.builtin, print) {
            ("print", Some(print)) => print,
            _ => builtins.getattr(alias.builtin)?,
        };
        globals.set_item(alias.name, value)?;
    }

    Ok(globals)
}
