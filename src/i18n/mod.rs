// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for runtime messages.
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | th   | Thai     | ไทย         |
//! | en   | English  | English     |
//!
//! Keys use dotted namespaces (`"error.KeyError"`, `"hook.prefix"`). The
//! catalog is static data; lookups never allocate and never panic.

mod catalog;

pub use catalog::{t, t_or_key, Lang};
