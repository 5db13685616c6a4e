//! argslot, a `no_std` argument parser that writes straight into caller-owned slots.
//!
//! ```
//! let argv = ["prog", "-v", "--output=out.txt", "file.txt"];
//!
//! let mut verbose = false;
//! let mut output = None;
//! let mut input = None;
//!
//! let mut registry: argslot::Registry<'_, '_> = argslot::Registry::new();
//! registry.flag(Some("-v"), Some("--verbose"), &mut verbose, "Enable verbose output")?;
//! registry.option(Some("-o"), Some("--output"), &mut output, "Output file name")?;
//! registry.positional(&mut input, "Input file")?;
//! registry.parse(&argv)?;
//! drop(registry);
//!
//! assert!(verbose);
//! assert_eq!(output, Some("out.txt"));
//! assert_eq!(input, Some("file.txt"));
//! # Ok::<(), argslot::Error<'static>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub use argslot_parser as parser;

pub use parser::{ArgSpec, ArgumentKind, Binding, Help, Registry};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// An error comes from declaring or parsing arguments.
    #[error(transparent)]
    Parser(parser::Error<'a>),
}

// Parser errors borrow the command line, so they cannot be an error source.
impl<'a> From<parser::Error<'a>> for Error<'a> {
    fn from(err: parser::Error<'a>) -> Self {
        Error::Parser(err)
    }
}

/// Exit status of a successful parse.
pub const STATUS_SUCCESS: i32 = 0;

/// Exit status of a failed parse.
pub const STATUS_FAILURE: i32 = 1;

/// Parse `argv` into the slots of `registry` and return a process status. On failure the error
/// message is written to stderr and values already written stay in place.
#[cfg(feature = "std")]
pub fn parse<'v, const SIZE: usize>(
    registry: &mut Registry<'_, 'v, SIZE>,
    argv: &[&'v str],
) -> i32 {
    match registry.parse(argv) {
        Ok(()) => STATUS_SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            STATUS_FAILURE
        }
    }
}

/// Write the usage text of `registry` to stdout.
#[cfg(feature = "std")]
pub fn print_help<const SIZE: usize>(registry: &Registry<'_, '_, SIZE>, program_name: &str) {
    print!("{}", registry.help(program_name));
}
