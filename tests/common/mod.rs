#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use nvspart::tools::{ToolPaths, Toolchain};
use tempfile::TempDir;

// Fake tools are run through `sh`, so they record their argv next to
// themselves and exit with $FAKE_EXIT (default 0).
const RECORDING_TOOL: &str = r#"printf '%s\n' "$@" > "$0.args"
exit "${FAKE_EXIT:-0}"
"#;

/// A throwaway ESP-IDF tree whose two tools are recording shell scripts.
pub struct FakeIdf {
    pub root: TempDir,
}

impl FakeIdf {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp IDF root");
        let fake = Self { root };
        let paths = fake.paths();
        write_tool(&paths.generator, RECORDING_TOOL);
        write_tool(&paths.flasher, RECORDING_TOOL);
        fake
    }

    pub fn idf_path(&self) -> &Path {
        self.root.path()
    }

    pub fn paths(&self) -> ToolPaths {
        ToolPaths::resolve(&self.root.path().join("components"))
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new("sh", self.paths())
    }

    pub fn recorded_args(tool: &Path) -> Option<Vec<String>> {
        let recorded = fs::read_to_string(args_file(tool)).ok()?;
        Some(recorded.lines().map(str::to_string).collect())
    }
}

pub fn write_tool(path: &Path, body: &str) {
    fs::create_dir_all(path.parent().expect("tool has a parent dir")).expect("create tool dir");
    fs::write(path, body).expect("write fake tool");
}

pub fn args_file(tool: &Path) -> PathBuf {
    let mut name = tool.as_os_str().to_owned();
    name.push(".args");
    PathBuf::from(name)
}

pub fn sample_toolchain() -> Toolchain {
    Toolchain::new(
        "python3",
        ToolPaths::resolve(Path::new("/opt/esp-idf/components")),
    )
}

pub fn to_strings(args: &[std::ffi::OsString]) -> Vec<String> {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
