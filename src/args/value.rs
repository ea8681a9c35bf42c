//! Value kinds: the typed half of an option.
//!
//! Every supported kind implements [`FlagValue`]: the formatting used by usage
//! output and the wrapping into a [`Slot`]. Kinds that take their value from
//! text also implement [`TextValue`]; `bool` does not, since a boolean flag is
//! set by presence alone.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::args::error::ValueError;
use crate::args::option::{Converter, Slot, Switch, TextSlot, Typed};

/// The semantic type stored behind an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Duration,
    Float64,
    Int,
    Int64,
    String,
    Uint,
    Uint64,
}

impl Kind {
    /// Tag shown after the flag names in usage output.
    ///
    /// Presence-only kinds have no tag.
    pub fn value_tag(self) -> Option<&'static str> {
        match self {
            Kind::Bool => None,
            Kind::Duration => Some("duration"),
            Kind::Float64 => Some("float"),
            Kind::Int => Some("int"),
            Kind::Int64 => Some("int64"),
            Kind::String => Some("string"),
            Kind::Uint => Some("uint"),
            Kind::Uint64 => Some("uint64"),
        }
    }
}

/// A type that can live behind an option.
pub trait FlagValue: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    const KIND: Kind;

    /// Value → text, as shown for defaults in usage output.
    fn format_value(&self) -> String;

    /// Whether this is the kind's zero value (hidden in usage output).
    fn is_zero(&self) -> bool;

    /// `converter` is only ever set for [`TextValue`] kinds.
    #[doc(hidden)]
    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot;
}

/// A kind whose value is given as text on the command line.
pub trait TextValue: FlagValue {
    /// Default text → value conversion, the inverse of [`FlagValue::format_value`].
    fn parse_text(text: &str) -> Result<Self, ValueError>;
}

impl FlagValue for bool {
    const KIND: Kind = Kind::Bool;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn into_slot(target: Value<Self>, default: Self, _: Option<Converter<Self>>) -> Slot {
        Slot::Switch(Switch::new(target, default))
    }
}

impl FlagValue for Duration {
    const KIND: Kind = Kind::Duration;

    fn format_value(&self) -> String {
        humantime::format_duration(*self).to_string()
    }

    fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Duration(Typed::new(target, default, converter)))
    }
}

impl TextValue for Duration {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(humantime::parse_duration(text)?)
    }
}

impl FlagValue for f64 {
    const KIND: Kind = Kind::Float64;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Float64(Typed::new(target, default, converter)))
    }
}

impl TextValue for f64 {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.parse()?)
    }
}

impl FlagValue for i32 {
    const KIND: Kind = Kind::Int;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Int(Typed::new(target, default, converter)))
    }
}

impl TextValue for i32 {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        let wide: i64 = text.parse()?;
        Ok(i32::try_from(wide)?)
    }
}

impl FlagValue for i64 {
    const KIND: Kind = Kind::Int64;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Int64(Typed::new(target, default, converter)))
    }
}

impl TextValue for i64 {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.parse()?)
    }
}

impl FlagValue for String {
    const KIND: Kind = Kind::String;

    fn format_value(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::String(Typed::new(target, default, converter)))
    }
}

impl TextValue for String {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.to_string())
    }
}

impl FlagValue for u32 {
    const KIND: Kind = Kind::Uint;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Uint(Typed::new(target, default, converter)))
    }
}

impl TextValue for u32 {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        let wide: u64 = text.parse()?;
        Ok(u32::try_from(wide)?)
    }
}

impl FlagValue for u64 {
    const KIND: Kind = Kind::Uint64;

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn into_slot(target: Value<Self>, default: Self, converter: Option<Converter<Self>>) -> Slot {
        Slot::Text(TextSlot::Uint64(Typed::new(target, default, converter)))
    }
}

impl TextValue for u64 {
    fn parse_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.parse()?)
    }
}

/// Handle to an option's destination.
///
/// Cloning shares the slot: the scanner writes through the registry's copy and
/// the caller reads through theirs.
pub struct Value<T>(Arc<RwLock<T>>);

impl<T: Clone> Value<T> {
    pub fn new(initial: T) -> Self {
        Self(Arc::new(RwLock::new(initial)))
    }

    /// Current contents of the slot.
    pub fn get(&self) -> T {
        self.0.read().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.write() = value;
    }
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&*self.0.read()).finish()
    }
}

impl<T: Clone + Default> Default for Value<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
