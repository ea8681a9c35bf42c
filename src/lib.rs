//! POSIX/GNU-style command-line flag scanning.
//!
//! Short flags (`-x`), bundles (`-abc`), attached or detached values
//! (`-l4`, `-l 4`, `--limit=4`, `--limit 4`), typed conversion, and
//! positional arguments interleaved with flags up to a `--` terminator.

pub mod args;
pub mod telemetry;
pub mod usage;

pub use args::{
    scan, FlagArity, FlagError, FlagName, FlagOption, FlagValue, Kind, OptionSpec, Parser,
    Registry, ScanOutcome, TextValue, Value, ValueError,
};
pub use usage::{render_usage, wrap, UsageConfig};
