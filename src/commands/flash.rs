use crate::invocation::InvocationSpec;
use crate::tools::Toolchain;

/// Flash offset of the NVS data partition.
pub const NVS_PARTITION_OFFSET: u32 = 0x10000;

// esptool.py --port <port> write_flash 65536 <binary>
pub fn build_flash_command(toolchain: &Toolchain, port: &str, binary: &str) -> InvocationSpec {
    InvocationSpec::new(&toolchain.interpreter)
        .arg(&toolchain.paths.flasher)
        .arg("--port")
        .arg(port)
        .arg("write_flash")
        .arg(NVS_PARTITION_OFFSET.to_string())
        .arg(binary)
}
