//! Parser: registry plus the results of the last scan.

use std::time::Duration;

use crate::args::error::{FlagError, Result};
use crate::args::option::FlagOption;
use crate::args::registry::{FlagName, OptionSpec, Registry};
use crate::args::scanner::scan;
use crate::args::value::{FlagValue, Value};
use crate::usage::{render_usage, UsageConfig};

/// Declares options and scans argument lists against them.
///
/// The first declaration error is sticky: every later declaration becomes a
/// no-op and [`Parser::parse`] returns the stored error, so a chain of
/// declarations only needs its error checked once.
///
/// ```
/// use flagscan::Parser;
///
/// let mut parser = Parser::new("demo");
/// let verbose = parser.bool(('v', "verbose"), false, "Verbose output");
/// let limit = parser.int(('l', "limit"), 0, "Maximum results");
///
/// parser.parse(["-l", "4", "-v", "foo", "bar"]).unwrap();
/// assert!(verbose.get());
/// assert_eq!(limit.get(), 4);
/// assert_eq!(parser.args(), ["foo", "bar"]);
/// assert_eq!(parser.nflag(), 3);
/// ```
#[derive(Debug)]
pub struct Parser {
    name: String,
    registry: Registry,
    sticky: Option<FlagError>,
    positional: Vec<String>,
    processed: usize,
    parsed: bool,
    usage: UsageConfig,
}

macro_rules! kind_methods {
    ($($name:ident, $var:ident: $ty:ty;)*) => {
        $(
            #[doc = concat!("Declare a `", stringify!($ty), "` option and return its destination.")]
            pub fn $name(
                &mut self,
                name: impl Into<FlagName>,
                default: $ty,
                description: &str,
            ) -> Value<$ty> {
                self.register(OptionSpec::new(name, default).description(description))
            }

            #[doc = concat!("Like [`Parser::", stringify!($name), "`], storing into an existing handle.")]
            pub fn $var(
                &mut self,
                target: &Value<$ty>,
                name: impl Into<FlagName>,
                default: $ty,
                description: &str,
            ) -> &mut Self {
                self.register(
                    OptionSpec::new(name, default)
                        .description(description)
                        .bind(target),
                );
                self
            }
        )*
    };
}

impl Parser {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let usage = UsageConfig {
            program: name.clone(),
            ..UsageConfig::default()
        };
        Self {
            name,
            registry: Registry::new(),
            sticky: None,
            positional: Vec::new(),
            processed: 0,
            parsed: false,
            usage,
        }
    }

    /// Replace the usage rendering settings.
    pub fn with_usage_config(mut self, usage: UsageConfig) -> Self {
        self.usage = usage;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare an option from a full spec.
    ///
    /// If this parser already holds a declaration error, or this declaration
    /// fails, the returned handle is detached and nothing is written to it.
    pub fn register<T: FlagValue>(&mut self, spec: OptionSpec<T>) -> Value<T> {
        if self.sticky.is_some() {
            return spec.detached();
        }
        let fallback = spec.detached();
        match self.registry.register(spec) {
            Ok(target) => target,
            Err(error) => {
                tracing::debug!("flag declaration failed: {}", error);
                self.sticky = Some(error);
                fallback
            }
        }
    }

    kind_methods! {
        bool, bool_var: bool;
        duration, duration_var: Duration;
        float64, float64_var: f64;
        int, int_var: i32;
        int64, int64_var: i64;
        string, string_var: String;
        uint, uint_var: u32;
        uint64, uint64_var: u64;
    }

    /// The declaration error captured so far, if any.
    pub fn error(&self) -> Option<&FlagError> {
        self.sticky.as_ref()
    }

    /// Scan `args` (program name excluded).
    ///
    /// Results of any previous scan are discarded first. On failure the
    /// positional list still holds what was collected plus the unconsumed
    /// remainder.
    pub fn parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positional.clear();
        self.processed = 0;
        self.parsed = false;

        if let Some(error) = &self.sticky {
            return Err(error.clone());
        }

        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let outcome = scan(&args, &self.registry);
        self.positional = outcome.positional;
        self.processed = outcome.processed;

        match outcome.error {
            Some(error) => Err(error),
            None => {
                self.parsed = true;
                Ok(())
            }
        }
    }

    /// Scan the process arguments.
    pub fn parse_env(&mut self) -> Result<()> {
        self.parse(std::env::args().skip(1))
    }

    /// Whether the last scan ran to completion without error.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Positional arguments from the last scan.
    pub fn args(&self) -> &[String] {
        &self.positional
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn narg(&self) -> usize {
        self.positional.len()
    }

    /// Number of arguments the last scan consumed as flags or flag values.
    pub fn nflag(&self) -> usize {
        self.processed
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &FlagOption> {
        self.registry.iter()
    }

    pub fn usage(&self) -> String {
        render_usage(self.registry.iter(), &self.usage)
    }
}
