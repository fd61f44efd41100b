// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration from the environment.
//!
//! CLI flags override whatever is loaded here.

use crate::i18n::Lang;
use anyhow::{anyhow, Result};

pub const LANG_ENV: &str = "THAI_PYTHON_LANG";
pub const LOG_ENV: &str = "THAI_PYTHON_LOG";
pub const TRACEBACK_ENV: &str = "THAI_PYTHON_TRACEBACK";

pub const DEFAULT_LOG_FILTER: &str = "thai_python=warn";
pub const VERBOSE_LOG_FILTER: &str = "thai_python=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language for runtime error messages.
    pub lang: Lang,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Print full tracebacks for runtime failures.
    pub traceback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            traceback: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key → value source; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lang = match lookup(LANG_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => Lang::from_code(value.trim())
                .ok_or_else(|| anyhow!("{} has unsupported language '{}'", LANG_ENV, value))?,
            None => Lang::default(),
        };

        Ok(Self {
            lang,
            log_filter: lookup(LOG_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            traceback: lookup(TRACEBACK_ENV)
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
