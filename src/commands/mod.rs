pub mod args;
pub mod flash;
pub mod generate;

use crate::args::Command;
use crate::error::PartError;
use crate::invocation::InvocationSpec;
use crate::tools::Toolchain;

/// Builds the command line for the requested subcommand.
pub fn build_invocation(command: &Command, toolchain: &Toolchain) -> InvocationSpec {
    match command {
        Command::Generate(args) => generate::build_generate_command(toolchain, &args.csv),
        Command::Flash(args) => flash::build_flash_command(toolchain, &args.port, &args.binary),
    }
}

fn progress_message(command: &Command) -> &'static str {
    match command {
        Command::Generate(_) => "Generating data partition file...",
        Command::Flash(_) => "Flashing to data partition...",
    }
}

pub fn run(command: &Command, toolchain: &Toolchain) -> Result<(), PartError> {
    let invocation = build_invocation(command, toolchain);
    println!("{}", progress_message(command));
    invocation.run()?;
    Ok(())
}
