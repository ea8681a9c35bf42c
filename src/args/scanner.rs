//! Argument scanner: raw args → destinations + positional args.
//!
//! Each argument is walked character by character:
//!
//! ```text
//! Begin ──'-'──▶ ConsumedHyphen ──'-'──▶ LongName
//!   │                  │
//!   └─other: positional└─flag char──▶ ShortFlagsOnly ◀─┐
//!                                        │  └─bool flag─┘
//!                                        └─value flag──▶ WantText
//! ```
//!
//! A value flag with nothing attached becomes a pending slurp: the next whole
//! argument is its value, whatever it looks like.

use crate::args::error::FlagError;
use crate::args::option::{Input, TextInput};
use crate::args::registry::Registry;

/// Result of scanning one argument list.
///
/// Positional arguments are returned even when scanning fails; on failure they
/// include every argument from the failure point onward.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Positional arguments in their original relative order.
    pub positional: Vec<String>,
    /// Number of arguments consumed by flag processing.
    pub processed: usize,
    pub error: Option<FlagError>,
}

/// Per-argument state of the character-level machine.
enum State<'r> {
    Begin,
    ConsumedHyphen,
    ShortFlagsOnly,
    WantText(TextInput<'r>),
    LongName,
}

/// What one argument turned out to be.
enum Step<'r> {
    Positional,
    Flag,
    /// Value must come from the next argument.
    Slurp(TextInput<'r>),
    /// Bare `--`: everything after is positional.
    Terminate,
}

/// Scan `args` against `registry`, writing matched values to their destinations.
pub fn scan(args: &[String], registry: &Registry) -> ScanOutcome {
    let mut positional = Vec::new();
    let mut processed = 0;
    let mut pending: Option<TextInput<'_>> = None;

    for (index, arg) in args.iter().enumerate() {
        if let Some(input) = pending.take() {
            processed += 1;
            if let Err(source) = input.store(arg) {
                positional.extend(args[index..].iter().cloned());
                return failed(
                    positional,
                    processed,
                    FlagError::InvalidValue {
                        flag: input.option().display_name(),
                        text: arg.clone(),
                        source,
                    },
                );
            }
            tracing::trace!(flag = %input.option().display_name(), value = %arg, "slurped value");
            continue;
        }

        match scan_argument(arg, registry) {
            Ok(Step::Positional) => positional.push(arg.clone()),
            Ok(Step::Flag) => processed += 1,
            Ok(Step::Slurp(input)) => {
                processed += 1;
                pending = Some(input);
            }
            Ok(Step::Terminate) => {
                processed += 1;
                positional.extend(args[index + 1..].iter().cloned());
                tracing::trace!(remaining = args.len() - index - 1, "terminator");
                return ScanOutcome {
                    positional,
                    processed,
                    error: None,
                };
            }
            Err(error) => {
                positional.extend(args[index..].iter().cloned());
                return failed(positional, processed, error);
            }
        }
    }

    if let Some(input) = pending {
        return failed(
            positional,
            processed,
            FlagError::MissingValue {
                flag: input.option().display_name(),
            },
        );
    }

    ScanOutcome {
        positional,
        processed,
        error: None,
    }
}

fn failed(positional: Vec<String>, processed: usize, error: FlagError) -> ScanOutcome {
    tracing::debug!("scan failed: {}", error);
    ScanOutcome {
        positional,
        processed,
        error: Some(error),
    }
}

fn scan_argument<'r>(arg: &str, registry: &'r Registry) -> Result<Step<'r>, FlagError> {
    let mut chars = arg.chars();
    let mut state = State::Begin;

    loop {
        state = match state {
            State::Begin => match chars.next() {
                Some('-') => State::ConsumedHyphen,
                _ => return Ok(Step::Positional),
            },
            State::ConsumedHyphen => match chars.next() {
                Some('-') => State::LongName,
                Some(short) => short_flag(short, registry)?,
                None => return Err(FlagError::BareHyphen),
            },
            State::ShortFlagsOnly => match chars.next() {
                Some(short) => short_flag(short, registry)?,
                None => return Ok(Step::Flag),
            },
            State::WantText(input) => {
                let text = chars.as_str();
                if text.is_empty() {
                    return Ok(Step::Slurp(input));
                }
                store_attached(input, text)?;
                return Ok(Step::Flag);
            }
            State::LongName => return long_flag(chars.as_str(), registry),
        };
    }
}

fn short_flag(short: char, registry: &Registry) -> Result<State<'_>, FlagError> {
    let option = registry
        .lookup_short(short)
        .ok_or(FlagError::UnknownShort(short))?;

    match option.input() {
        Input::Presence(switch) => {
            switch.mark_present();
            tracing::trace!(flag = %short, "short flag set");
            Ok(State::ShortFlagsOnly)
        }
        Input::Text(input) => Ok(State::WantText(input)),
    }
}

fn long_flag<'r>(rest: &str, registry: &'r Registry) -> Result<Step<'r>, FlagError> {
    if rest.is_empty() {
        return Ok(Step::Terminate);
    }

    let (name, attached) = match rest.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (rest, None),
    };
    let option = registry
        .lookup_long(name)
        .ok_or_else(|| FlagError::UnknownLong(name.to_string()))?;

    match (option.input(), attached) {
        (Input::Presence(switch), None) => {
            switch.mark_present();
            tracing::trace!(flag = %name, "long flag set");
            Ok(Step::Flag)
        }
        (Input::Presence(_), Some(_)) => Err(FlagError::UnexpectedValue {
            flag: option.display_name(),
        }),
        (Input::Text(input), Some(text)) => {
            store_attached(input, text)?;
            Ok(Step::Flag)
        }
        (Input::Text(input), None) => Ok(Step::Slurp(input)),
    }
}

fn store_attached(input: TextInput<'_>, text: &str) -> Result<(), FlagError> {
    let flag = input.option().display_name();
    input.store(text).map_err(|source| FlagError::InvalidValue {
        flag: flag.clone(),
        text: text.to_string(),
        source,
    })?;
    tracing::trace!(flag = %flag, value = %text, "attached value");
    Ok(())
}
