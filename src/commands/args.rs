use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(value_name = "CSV", help = "Path to the CSV file describing the NVS entries")]
    pub csv: String,
}

#[derive(Args, Debug, Clone)]
pub struct FlashArgs {
    #[arg(value_name = "PORT", help = "Serial port the device is attached to")]
    pub port: String,

    #[arg(value_name = "BINARY", help = "Path to the binary partition image")]
    pub binary: String,
}
