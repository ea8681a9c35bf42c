//! Typed options: one declared flag plus its destination.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::args::error::ValueError;
use crate::args::value::{FlagValue, Kind, TextValue, Value};

/// Custom text → value conversion, used instead of the kind's default.
pub type Converter<T> = Arc<dyn Fn(&str) -> Result<T, String> + Send + Sync>;

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Presence alone sets the flag (e.g., --verbose).
    NoValue,
    /// Requires exactly one textual value (e.g., --limit <N>).
    RequiresValue,
}

/// Destination and default of a presence-only flag.
///
/// Holds no converter: presence is the only input it ever sees.
#[derive(Debug)]
pub struct Switch {
    target: Value<bool>,
    default: bool,
}

impl Switch {
    pub(crate) fn new(target: Value<bool>, default: bool) -> Self {
        Self { target, default }
    }

    pub(crate) fn mark_present(&self) {
        self.target.set(true);
    }
}

/// Destination, default and conversion for one text-fed value kind.
pub struct Typed<T: TextValue> {
    target: Value<T>,
    default: T,
    converter: Option<Converter<T>>,
}

impl<T: TextValue> Typed<T> {
    pub(crate) fn new(target: Value<T>, default: T, converter: Option<Converter<T>>) -> Self {
        Self {
            target,
            default,
            converter,
        }
    }

    fn convert(&self, text: &str) -> Result<T, ValueError> {
        match &self.converter {
            Some(convert) => convert(text).map_err(ValueError::Custom),
            None => T::parse_text(text),
        }
    }

    fn store(&self, text: &str) -> Result<(), ValueError> {
        let value = self.convert(text)?;
        self.target.set(value);
        Ok(())
    }
}

impl<T: TextValue> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("target", &self.target)
            .field("default", &self.default)
            .field("converter", &self.converter.is_some())
            .finish()
    }
}

/// One variant per value kind that is fed text.
#[derive(Debug)]
pub enum TextSlot {
    Duration(Typed<Duration>),
    Float64(Typed<f64>),
    Int(Typed<i32>),
    Int64(Typed<i64>),
    String(Typed<String>),
    Uint(Typed<u32>),
    Uint64(Typed<u64>),
}

macro_rules! with_typed {
    ($slot:expr, $typed:ident => $body:expr) => {
        match $slot {
            TextSlot::Duration($typed) => $body,
            TextSlot::Float64($typed) => $body,
            TextSlot::Int($typed) => $body,
            TextSlot::Int64($typed) => $body,
            TextSlot::String($typed) => $body,
            TextSlot::Uint($typed) => $body,
            TextSlot::Uint64($typed) => $body,
        }
    };
}

impl TextSlot {
    fn kind(&self) -> Kind {
        match self {
            TextSlot::Duration(_) => Kind::Duration,
            TextSlot::Float64(_) => Kind::Float64,
            TextSlot::Int(_) => Kind::Int,
            TextSlot::Int64(_) => Kind::Int64,
            TextSlot::String(_) => Kind::String,
            TextSlot::Uint(_) => Kind::Uint,
            TextSlot::Uint64(_) => Kind::Uint64,
        }
    }

    fn store(&self, text: &str) -> Result<(), ValueError> {
        with_typed!(self, typed => typed.store(text))
    }

    fn default_text(&self) -> String {
        with_typed!(self, typed => typed.default.format_value())
    }

    fn default_is_zero(&self) -> bool {
        with_typed!(self, typed => typed.default.is_zero())
    }
}

/// Storage behind a declared flag, split by arity.
#[derive(Debug)]
pub enum Slot {
    Switch(Switch),
    Text(TextSlot),
}

impl Slot {
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Switch(_) => Kind::Bool,
            Slot::Text(text) => text.kind(),
        }
    }

    fn default_text(&self) -> String {
        match self {
            Slot::Switch(switch) => switch.default.format_value(),
            Slot::Text(text) => text.default_text(),
        }
    }

    fn default_is_zero(&self) -> bool {
        match self {
            Slot::Switch(switch) => switch.default.is_zero(),
            Slot::Text(text) => text.default_is_zero(),
        }
    }
}

/// A single declared flag.
#[derive(Debug)]
pub struct FlagOption {
    short: Option<char>,
    long: Option<String>,
    description: String,
    slot: Slot,
}

impl FlagOption {
    pub(crate) fn new(
        short: Option<char>,
        long: Option<String>,
        description: String,
        slot: Slot,
    ) -> Self {
        Self {
            short,
            long,
            description,
            slot,
        }
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn arity(&self) -> FlagArity {
        match self.slot {
            Slot::Switch(_) => FlagArity::NoValue,
            Slot::Text(_) => FlagArity::RequiresValue,
        }
    }

    /// The default formatted with the kind's formatter.
    pub fn default_text(&self) -> String {
        self.slot.default_text()
    }

    /// Whether the default is the kind's zero value.
    pub fn default_is_zero(&self) -> bool {
        self.slot.default_is_zero()
    }

    /// Name used in diagnostics: `--long` when present, else `-s`.
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }

    /// How the scanner must feed this flag.
    pub(crate) fn input(&self) -> Input<'_> {
        match &self.slot {
            Slot::Switch(switch) => Input::Presence(switch),
            Slot::Text(slot) => Input::Text(TextInput { option: self, slot }),
        }
    }
}

/// Scanner-facing view of a flag, chosen by its arity.
pub(crate) enum Input<'r> {
    Presence(&'r Switch),
    Text(TextInput<'r>),
}

/// A value flag waiting for its text.
#[derive(Clone, Copy)]
pub(crate) struct TextInput<'r> {
    option: &'r FlagOption,
    slot: &'r TextSlot,
}

impl<'r> TextInput<'r> {
    pub(crate) fn option(&self) -> &'r FlagOption {
        self.option
    }

    /// Convert `text` and write it to the destination.
    pub(crate) fn store(&self, text: &str) -> Result<(), ValueError> {
        self.slot.store(text)
    }
}
