use crate::invocation::InvocationSpec;
use crate::tools::Toolchain;

/// Size handed to the partition generator, passed through verbatim.
pub const NVS_PARTITION_SIZE: &str = "0x3000";
pub const OUTPUT_EXTENSION: &str = "bin";

/// Derives the image path for `csv`: everything before the first `.`, plus `.bin`.
///
/// The cut is made on the first dot of the whole string, so `data.v2.csv`
/// becomes `data.bin` and a path with no dot gets the extension appended.
pub fn output_path_for(csv: &str) -> String {
    let base = csv.split('.').next().unwrap_or(csv);
    format!("{base}.{OUTPUT_EXTENSION}")
}

// nvs_partition_gen.py --input <csv> --output <base>.bin --size 0x3000
pub fn build_generate_command(toolchain: &Toolchain, csv: &str) -> InvocationSpec {
    InvocationSpec::new(&toolchain.interpreter)
        .arg(&toolchain.paths.generator)
        .arg("--input")
        .arg(csv)
        .arg("--output")
        .arg(output_path_for(csv))
        .arg("--size")
        .arg(NVS_PARTITION_SIZE)
}
