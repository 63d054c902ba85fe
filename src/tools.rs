use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const IDF_PATH_ENV: &str = "IDF_PATH";
pub const PYTHON_ENV: &str = "NVSPART_PYTHON";
pub const DEFAULT_PYTHON: &str = "python3";

// Left in place when IDF_PATH is missing so the spawn fails on an obviously unresolved path.
const UNRESOLVED_IDF_PATH: &str = "$IDF_PATH";
const COMPONENTS_DIR: &str = "components";

const GENERATOR_SUBPATH: [&str; 3] = [
    "nvs_flash",
    "nvs_partition_generator",
    "nvs_partition_gen.py",
];
const FLASHER_SUBPATH: [&str; 3] = ["esptool_py", "esptool", "esptool.py"];

/// Locations of the two external ESP-IDF tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub generator: PathBuf,
    pub flasher: PathBuf,
}

impl ToolPaths {
    /// Joins the fixed tool subpaths onto `components_dir`. Nothing is checked on disk.
    pub fn resolve(components_dir: &Path) -> Self {
        Self {
            generator: join_all(components_dir, &GENERATOR_SUBPATH),
            flasher: join_all(components_dir, &FLASHER_SUBPATH),
        }
    }
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |path, part| path.join(part))
}

/// Everything needed to build a command line: the interpreter that runs the
/// Python tools and where those tools live.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub interpreter: OsString,
    pub paths: ToolPaths,
}

impl Toolchain {
    pub fn new(interpreter: impl Into<OsString>, paths: ToolPaths) -> Self {
        Self {
            interpreter: interpreter.into(),
            paths,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Resolves the toolchain through `lookup` instead of the process environment.
    ///
    /// An unset or empty `IDF_PATH` is not an error here; the resulting paths keep
    /// the literal `$IDF_PATH` and the failure shows up when the tool is spawned.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let idf_path = non_empty(lookup(IDF_PATH_ENV))
            .unwrap_or_else(|| OsString::from(UNRESOLVED_IDF_PATH));
        let components_dir = PathBuf::from(idf_path).join(COMPONENTS_DIR);

        let interpreter =
            non_empty(lookup(PYTHON_ENV)).unwrap_or_else(|| OsString::from(DEFAULT_PYTHON));

        let toolchain = Self::new(interpreter, ToolPaths::resolve(&components_dir));
        debug!(
            interpreter = ?toolchain.interpreter,
            generator = %toolchain.paths.generator.display(),
            flasher = %toolchain.paths.flasher.display(),
            "resolved toolchain"
        );
        toolchain
    }
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}
