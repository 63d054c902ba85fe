use std::process::ExitStatus;

use thiserror::Error;

// Exit code used when no child status can be forwarded.
pub const GENERIC_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Failed to start `{command}`: {source}.")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}.")]
    Failed { command: String, status: ExitStatus },
}

impl InvocationError {
    pub fn command(&self) -> &str {
        match self {
            InvocationError::Spawn { command, .. } | InvocationError::Failed { command, .. } => {
                command
            }
        }
    }

    /// Process exit code to forward for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InvocationError::Spawn { .. } => GENERIC_FAILURE,
            InvocationError::Failed { status, .. } => status_code(*status),
        }
    }
}

fn status_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => GENERIC_FAILURE,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    GENERIC_FAILURE
}
