//! Line-oriented read-eval-print loop.

use std::io::{self, BufRead, Write};

use diy_eval::evaluate;
use diy_parse::{is_complete, parse_multiple};
use diy_value::{Environment, LispResult};

use crate::RunConfig;

const PROMPT: &str = "diy> ";
const CONTINUATION_PROMPT: &str = "...> ";

/// REPL state: the session environment and any unfinished input.
///
/// Input is buffered line by line until every `(` is closed; the buffered
/// text is then evaluated as one or more expressions in the same environment.
pub struct Repl {
    env: Environment,
    buffer: String,
}

impl Repl {
    pub fn new(config: &RunConfig) -> LispResult<Self> {
        Ok(Repl {
            env: config.environment()?,
            buffer: String::new(),
        })
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Whether an unfinished expression is waiting for more lines.
    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Add a line of input.
    ///
    /// Returns `None` while the buffered input is still incomplete, otherwise
    /// one printed line per evaluated expression. Evaluation stops at the
    /// first error, which is reported as `error: <message>`.
    pub fn feed_line(&mut self, line: &str) -> Option<Vec<String>> {
        self.buffer.push_str(line);
        if !line.ends_with('\n') {
            self.buffer.push('\n');
        }
        if !is_complete(&self.buffer) {
            return None;
        }
        Some(self.flush())
    }

    /// Evaluate whatever is buffered, complete or not.
    pub fn flush(&mut self) -> Vec<String> {
        let source = std::mem::take(&mut self.buffer);
        let exprs = match parse_multiple(&source) {
            Ok(exprs) => exprs,
            Err(err) => return vec![format!("error: {err}")],
        };
        let mut printed = Vec::with_capacity(exprs.len());
        for expr in &exprs {
            match evaluate(expr, &self.env) {
                Ok(value) => printed.push(value.to_string()),
                Err(err) => {
                    printed.push(format!("error: {err}"));
                    break;
                }
            }
        }
        printed
    }

    /// Read lines from `input` until end of input, writing prompts and
    /// results to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            let prompt = if self.is_pending() {
                CONTINUATION_PROMPT
            } else {
                PROMPT
            };
            write!(output, "{prompt}")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                if self.is_pending() {
                    for printed in self.flush() {
                        writeln!(output, "{printed}")?;
                    }
                }
                return Ok(());
            }
            if let Some(results) = self.feed_line(&line) {
                for printed in results {
                    writeln!(output, "{printed}")?;
                }
            }
        }
    }
}
