// config.rs — Generator configuration
//
// Defaults describe the Go `icons` package of the desktop client: the map is
// keyed by int32 and points at fyne static resources produced by the bundler.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::GenError;

pub const DEFAULT_CATALOG_FILE: &str = "icons.json";
pub const DEFAULT_OUTPUT_FILE: &str = "mapping.go";

/// Icon ids that have no image file behind them
pub const BUILTIN_EXCLUDED_IDS: &[i32] = &[21934];

pub const USAGE: &str = "Usage: icongen [CATALOG] [OUTPUT]

  CATALOG  icon catalog JSON (default: icons.json)
  OUTPUT   generated Go file (default: mapping.go), or - for stdout";

// ── Exclusions ───────────────────────────────────────────────────────────────

/// Set of icon ids to drop silently before emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: BTreeSet<i32>,
}

impl ExclusionSet {
    /// The compiled-in exclusions.
    pub fn builtin() -> Self {
        BUILTIN_EXCLUDED_IDS.iter().copied().collect()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<i32> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// Knobs for the generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// First line of the file, marks it as machine-generated
    pub header: String,
    pub package: String,
    /// Import paths, rendered in the given order
    pub imports: Vec<String>,
    pub map_name: String,
    pub key_type: String,
    pub value_type: String,
    /// Prepended to every derived symbol name
    pub symbol_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header: "// auto-generated".to_string(),
            package: "icons".to_string(),
            imports: vec!["fyne.io/fyne/v2".to_string()],
            map_name: "id2fileMap".to_string(),
            key_type: "int32".to_string(),
            value_type: "*fyne.StaticResource".to_string(),
            symbol_prefix: "resource".to_string(),
        }
    }
}

// ── Invocation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Human-readable name for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "<stdout>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub catalog: PathBuf,
    pub output: OutputTarget,
    pub show_help: bool,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            show_help: false,
        }
    }
}

impl Invocation {
    /// Parse arguments (program name already stripped).
    pub fn from_args<I, S>(args: I) -> Result<Self, GenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut invocation = Invocation::default();
        let mut positional = 0;

        for arg in args {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-h" | "--help") => invocation.show_help = true,
                Some("-") if positional == 1 => {
                    invocation.output = OutputTarget::Stdout;
                    positional += 1;
                }
                Some(flag) if flag.starts_with('-') => {
                    return Err(GenError::InvalidArgs(format!("unknown option: {}", flag)));
                }
                _ if positional == 0 => {
                    invocation.catalog = PathBuf::from(&arg);
                    positional += 1;
                }
                _ if positional == 1 => {
                    invocation.output = OutputTarget::File(PathBuf::from(&arg));
                    positional += 1;
                }
                _ => {
                    return Err(GenError::InvalidArgs(format!(
                        "unexpected argument: {}",
                        arg.to_string_lossy()
                    )));
                }
            }
        }

        Ok(invocation)
    }
}
