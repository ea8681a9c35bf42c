//! Flag declaration and argument scanning.
//!
//! ```text
//! Declare → Registry ─┐
//!                     ├─▶ Scan → destinations + positional args
//! Raw args ───────────┘
//! ```
//!
//! [`Registry`] and [`scan`] are usable on their own; [`Parser`] wraps them
//! with sticky declaration errors and per-kind declaration helpers.

mod error;
mod option;
mod parser;
mod registry;
mod scanner;
mod value;

pub use error::{FlagError, Result, ValueError};
pub use option::{Converter, FlagArity, FlagOption, Slot, Switch, TextSlot, Typed};
pub use parser::Parser;
pub use registry::{FlagName, OptionSpec, Registry};
pub use scanner::{scan, ScanOutcome};
pub use value::{FlagValue, Kind, TextValue, Value};
