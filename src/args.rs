use crate::commands::args::{FlashArgs, GenerateArgs};
use clap::{Parser, Subcommand};

// Top-level CLI parser. Each subcommand carries its own Args struct.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "NVS partition tool. Generates binary partition data, and flashes to the device.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generates the binary file to flash.
    Generate(GenerateArgs),

    /// Flashes the binary file to NVS.
    Flash(FlashArgs),
}
