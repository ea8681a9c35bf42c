//! Option registry: single source of truth for all declared flags.

use crate::args::error::{FlagError, Result};
use crate::args::option::{Converter, FlagOption};
use crate::args::value::{FlagValue, TextValue, Value};

/// How a flag's identity was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagName {
    /// One string, classified by length: one character is a short flag,
    /// anything longer is a long flag.
    Single(String),
    /// Explicit short character and long name; both must be valid.
    Pair(char, String),
}

impl FlagName {
    /// Validate and split into `(short, long)`.
    pub fn resolve(&self) -> Result<(Option<char>, Option<String>)> {
        match self {
            FlagName::Single(name) => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => Err(FlagError::MissingIdentity),
                    (Some(short), None) => Ok((Some(validate_short(short)?), None)),
                    (Some(_), Some(_)) => Ok((None, Some(validate_long(name)?))),
                }
            }
            FlagName::Pair(short, long) => {
                let short = validate_short(*short)?;
                let long = validate_long(long)?;
                Ok((Some(short), Some(long)))
            }
        }
    }
}

impl From<&str> for FlagName {
    fn from(name: &str) -> Self {
        FlagName::Single(name.to_string())
    }
}

impl From<String> for FlagName {
    fn from(name: String) -> Self {
        FlagName::Single(name)
    }
}

impl From<(char, &str)> for FlagName {
    fn from((short, long): (char, &str)) -> Self {
        FlagName::Pair(short, long.to_string())
    }
}

fn validate_short(short: char) -> Result<char> {
    if short == '-' || short.is_whitespace() || short.is_control() {
        return Err(FlagError::InvalidShort(short));
    }
    Ok(short)
}

fn validate_long(long: &str) -> Result<String> {
    if long.is_empty() || long.starts_with('-') || long.contains('=') {
        return Err(FlagError::InvalidLong(long.to_string()));
    }
    Ok(long.to_string())
}

/// Everything needed to declare one option of kind `T`.
pub struct OptionSpec<T: FlagValue> {
    name: FlagName,
    default: T,
    description: String,
    converter: Option<Converter<T>>,
    target: Option<Value<T>>,
}

impl<T: FlagValue> OptionSpec<T> {
    pub fn new(name: impl Into<FlagName>, default: T) -> Self {
        Self {
            name: name.into(),
            default,
            description: String::new(),
            converter: None,
            target: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Store into an existing handle instead of allocating a new one.
    ///
    /// The default is written to it only if registration succeeds.
    pub fn bind(mut self, target: &Value<T>) -> Self {
        self.target = Some(target.clone());
        self
    }

    /// Handle returned when the spec is not registered; nothing is written.
    pub(crate) fn detached(&self) -> Value<T> {
        match &self.target {
            Some(target) => target.clone(),
            None => Value::new(self.default.clone()),
        }
    }
}

impl<T: TextValue> OptionSpec<T> {
    /// Replace the kind's default conversion.
    ///
    /// ```
    /// use flagscan::{OptionSpec, Parser};
    ///
    /// let mut parser = Parser::new("demo");
    /// let level = parser.register(OptionSpec::new("level", 0u32).converter(|text| match text {
    ///     "low" => Ok(1),
    ///     "high" => Ok(9),
    ///     other => Err(format!("unknown level {other}")),
    /// }));
    /// parser.parse(["--level", "high"]).unwrap();
    /// assert_eq!(level.get(), 9);
    /// ```
    ///
    /// Only kinds fed text accept one; a boolean flag is set by presence and
    /// has no text to convert:
    ///
    /// ```compile_fail
    /// use flagscan::OptionSpec;
    ///
    /// let spec = OptionSpec::new(('x', "xx"), false).converter(|_| Ok(true));
    /// ```
    pub fn converter<F>(mut self, convert: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    {
        self.converter = Some(std::sync::Arc::new(convert));
        self
    }
}

/// Ordered collection of declared options.
#[derive(Debug, Default)]
pub struct Registry {
    options: Vec<FlagOption>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an option, returning its destination handle.
    ///
    /// On failure nothing is appended and no destination is written.
    pub fn register<T: FlagValue>(&mut self, spec: OptionSpec<T>) -> Result<Value<T>> {
        let (short, long) = spec.name.resolve()?;

        if let Some(short) = short {
            if self.lookup_short(short).is_some() {
                return Err(FlagError::DuplicateShort(short));
            }
        }
        if let Some(long) = &long {
            if self.lookup_long(long).is_some() {
                return Err(FlagError::DuplicateLong(long.clone()));
            }
        }

        let target = match spec.target {
            Some(target) => {
                target.set(spec.default.clone());
                target
            }
            None => Value::new(spec.default.clone()),
        };
        let slot = T::into_slot(target.clone(), spec.default, spec.converter);
        self.options
            .push(FlagOption::new(short, long, spec.description, slot));
        Ok(target)
    }

    pub fn lookup_short(&self, short: char) -> Option<&FlagOption> {
        self.options.iter().find(|o| o.short() == Some(short))
    }

    pub fn lookup_long(&self, long: &str) -> Option<&FlagOption> {
        self.options.iter().find(|o| o.long() == Some(long))
    }

    /// Options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FlagOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
