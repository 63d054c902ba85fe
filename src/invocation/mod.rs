pub mod errors;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, Stdio};

use tracing::{debug, info};

pub use errors::InvocationError;

/// A fully built external command line: the program to start and its
/// arguments in the exact order the tool expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl InvocationSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Runs the command to completion with the caller's stdio.
    ///
    /// Blocks until the child exits. A non-zero exit (or death by signal) is an
    /// error; there is no retry.
    pub fn run(&self) -> Result<(), InvocationError> {
        let command = self.to_string();
        info!(%command, "invoking external tool");

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| InvocationError::Spawn {
                command: command.clone(),
                source,
            })?;

        debug!(%command, %status, "external tool exited");

        if status.success() {
            Ok(())
        } else {
            Err(InvocationError::Failed { command, status })
        }
    }
}

impl fmt::Display for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_word(f, &self.program)?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_word(f, arg)?;
        }
        Ok(())
    }
}

fn write_word(f: &mut fmt::Formatter<'_>, word: &OsStr) -> fmt::Result {
    let word = word.to_string_lossy();
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        write!(f, "{word:?}")
    } else {
        f.write_str(&word)
    }
}
