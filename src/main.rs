// SPDX-License-Identifier: PMPL-1.0-or-later

//! thai-python: run a Thai-keyword Python script.
//!
//! ```text
//! thai-python hello.py
//! thai-python --emit hello.py
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pyo3::Python;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process;
use thai_python::config::{Config, VERBOSE_LOG_FILTER};
use thai_python::i18n::Lang;
use thai_python::runtime::{hook, ExecOptions, Harness, Sink};
use thai_python::translator::Translator;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: thai-python <script.py>";

#[derive(Parser)]
#[command(name = "thai-python")]
#[command(version)]
#[command(about = "Run Python written with Thai keywords")]
#[command(long_about = None)]
struct Cli {
    /// Thai Python script to run
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Print the translated Python instead of running it
    #[arg(long)]
    emit: bool,

    /// Output format for --emit
    #[arg(long, value_enum, default_value = "python")]
    format: EmitFormat,

    /// Language for runtime error messages
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Print a full traceback after a runtime error
    #[arg(long)]
    traceback: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitFormat {
    Python,
    Json,
}

/// Why the script could not be loaded.
enum LoadError {
    NotFound(PathBuf),
    Other(anyhow::Error),
}

fn main() {
    let cli = Cli::parse();

    let Some(script) = cli.script.clone() else {
        println!("{}", USAGE);
        process::exit(1);
    };

    let status = match run(&cli, &script) {
        Ok(status) => status,
        Err(LoadError::NotFound(path)) => {
            println!("Error: Could not find file '{}'", path.display());
            1
        }
        Err(LoadError::Other(err)) => {
            println!("Error: {:#}", err);
            1
        }
    };
    if let Err(err) = std::io::stdout().flush() {
        debug!(%err, "stdout flush failed");
    }
    process::exit(status);
}

fn run(cli: &Cli, script: &Path) -> Result<i32, LoadError> {
    let config = load_config(cli).map_err(LoadError::Other)?;
    init_logging(&config).map_err(LoadError::Other)?;

    let source = read_script(script)?;
    info!(script = %script.display(), bytes = source.len(), "loaded script");

    if cli.emit {
        return emit(&source, cli.format).map_err(LoadError::Other);
    }

    Python::with_gil(|py| -> Result<()> {
        hook::use_utf8_stdio(py).context("configuring python stdio")?;
        hook::install_excepthook(py, config.lang).context("installing excepthook")?;
        Ok(())
    })
    .map_err(LoadError::Other)?;

    let harness = Harness::new(ExecOptions {
        lang: config.lang,
        traceback: config.traceback,
    });
    let execution = harness.execute(&source, Sink::Stdout);
    Ok(execution.outcome.exit_status())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(lang) = cli.lang {
        config.lang = lang;
    }
    if cli.traceback {
        config.traceback = true;
    }
    if cli.verbose {
        config.log_filter = VERBOSE_LOG_FILTER.to_string();
    }
    Ok(config)
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

/// Read a script as UTF-8, dropping a BOM and replacing malformed bytes.
fn read_script(path: &Path) -> Result<String, LoadError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()))
        }
        Err(err) => {
            return Err(LoadError::Other(
                anyhow::Error::new(err).context(format!("reading {}", path.display())),
            ))
        }
    };

    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        warn!(script = %path.display(), encoding = encoding.name(), "replaced malformed bytes");
    }
    Ok(text.into_owned())
}

fn emit(source: &str, format: EmitFormat) -> Result<i32> {
    let translation = Translator::new().translate(source);

    match format {
        EmitFormat::Python => {
            print!("{}", translation.code);
            if let Some(err) = &translation.error {
                eprintln!("{}", err.to_string().red());
            }
        }
        EmitFormat::Json => {
            let json = serde_json::to_string_pretty(&translation)
                .context("serializing translation as json")?;
            println!("{}", json);
        }
    }

    Ok(if translation.is_ok() { 0 } else { 1 })
}
