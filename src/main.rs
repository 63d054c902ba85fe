use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use nvspart::args::Args;
use nvspart::commands;
use nvspart::error::PartError;
use nvspart::invocation::InvocationError;
use nvspart::logging;
use nvspart::tools::Toolchain;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let toolchain = Toolchain::from_env();

    match commands::run(&args.command, &toolchain) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            exit_code(&err)
        }
    }
}

// A failing tool has already printed its own diagnostics; only a tool that
// never started needs a message from us.
fn report(err: &PartError) {
    match err {
        PartError::Invocation(InvocationError::Spawn { .. }) => error!("{err}"),
        _ => debug!("{err}"),
    }
}

fn exit_code(err: &PartError) -> ExitCode {
    let code = u8::try_from(err.exit_code()).unwrap_or(1);
    ExitCode::from(if code == 0 { 1 } else { code })
}
