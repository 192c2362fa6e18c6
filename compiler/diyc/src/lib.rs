//! DIY Lisp command-line driver.
//!
//! The binary (`diy`) parses its arguments by hand and calls into the
//! functions here, which return results instead of exiting so they can be
//! tested directly.

mod repl;

use std::path::{Path, PathBuf};
use std::sync::Once;

use diy_eval::{interpret, interpret_all, prelude_environment};
use diy_value::{Environment, LispError, LispResult, Value};
use thiserror::Error;

pub use repl::Repl;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error(transparent)]
    Lisp(#[from] LispError),
}

/// Options shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Load the prelude into the root environment before running.
    pub prelude: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig { prelude: true }
    }
}

impl RunConfig {
    /// Split command arguments into options and positional arguments.
    pub fn parse_args(args: &[String]) -> Result<(RunConfig, Vec<String>), CliError> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--no-prelude" => config.prelude = false,
                "--prelude" => config.prelude = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::UnknownOption(flag.to_owned()));
                }
                _ => positional.push(arg.clone()),
            }
        }
        Ok((config, positional))
    }

    /// A root environment set up according to this config.
    pub fn environment(&self) -> LispResult<Environment> {
        if self.prelude {
            prelude_environment()
        } else {
            Ok(Environment::new())
        }
    }
}

/// Evaluate every expression in `source` and return the last value.
pub fn run_source(source: &str, config: &RunConfig) -> Result<Value, CliError> {
    let env = config.environment()?;
    Ok(interpret_all(source, &env)?)
}

/// Read and run a program file.
pub fn run_file(path: &Path, config: &RunConfig) -> Result<Value, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "running file");
    run_source(&source, config)
}

/// Evaluate a single expression and print its value.
pub fn eval_expression(expr: &str, config: &RunConfig) -> Result<String, CliError> {
    let env = config.environment()?;
    Ok(interpret(expr, &env)?)
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `DIY_LOG` (or, failing that, `RUST_LOG`) is set,
/// e.g. `DIY_LOG=diy_eval=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("DIY_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        match EnvFilter::try_new(&directives) {
            Ok(filter) => tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init(),
            Err(err) => eprintln!("warning: ignoring log filter {directives:?}: {err}"),
        }
    });
}

#[cfg(test)]
mod tests;
