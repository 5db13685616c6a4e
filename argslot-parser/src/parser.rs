//! A parser for writing command line arguments into their bound slots.

use crate::lexer::{Token, Tokens};
use crate::registry::{Binding, Registry};

/// Defines the possible errors that may occur while declaring or parsing arguments. Parsing
/// errors carry the offending argument as it was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// A dashed argument matches no declared flag or option.
    #[error("unknown option: {0}")]
    UnknownArgument(&'a str),

    /// The `--name=value` form is used for an argument that is not an option.
    #[error("option {0} does not take a value")]
    NotValueTaking(&'a str),

    /// An option is the last argument, with nothing left to take as its value.
    #[error("no value provided for {0}")]
    MissingValue(&'a str),

    /// A bare argument arrives when every positional already has a value.
    #[error("unexpected positional argument: {0}")]
    UnexpectedPositional(&'a str),

    /// Insufficient space for declaring arguments.
    #[error("out of registry space")]
    OutOfMemory,
}

impl<'v, const SIZE: usize> Registry<'_, 'v, SIZE> {
    /// Parse the command line input, writing each value into the slot of the argument it
    /// belongs to. The first element of `argv` is the program name and is skipped.
    ///
    /// Parsing stops at the first error. Slots written before that point keep their values.
    /// Positionals left at `None` were not given; checking for them is up to the caller.
    ///
    /// An option always takes the next argument as its value, even when it starts with a dash,
    /// so `-o -v` sets the option to `-v` and leaves the flag alone.
    pub fn parse(&mut self, argv: &[&'v str]) -> Result<(), Error<'v>> {
        let args = argv.get(1..).unwrap_or_default();
        let mut tokens = Tokens::new(args);

        while let Some(token) = tokens.next() {
            let res = match token {
                Token::Assign { name, value, raw } => self.assign(name, value, raw),
                Token::Named(name) => self.apply(name, &mut tokens),
                Token::Bare(value) => self.fill_positional(value),
            };

            if let Err(err) = res {
                debug!("parsing stopped at {}", token.as_str());
                return Err(err);
            }
        }

        Ok(())
    }

    fn assign(&mut self, name: &str, value: &'v str, raw: &'v str) -> Result<(), Error<'v>> {
        let Some(spec) = self.find_mut(name) else {
            return Err(Error::UnknownArgument(raw));
        };

        match &mut spec.binding {
            Binding::Option(slot) => {
                trace!("option {} = {}", name, value);
                **slot = Some(value);
                Ok(())
            }
            _ => Err(Error::NotValueTaking(raw)),
        }
    }

    fn apply(&mut self, name: &'v str, tokens: &mut Tokens<'_, 'v>) -> Result<(), Error<'v>> {
        let Some(spec) = self.find_mut(name) else {
            return Err(Error::UnknownArgument(name));
        };

        match &mut spec.binding {
            Binding::Flag(slot) => {
                trace!("flag {}", name);
                **slot = true;
            }
            Binding::Option(slot) => {
                let value = tokens.next_raw().ok_or(Error::MissingValue(name))?;
                trace!("option {} = {}", name, value);
                **slot = Some(value);
            }
            // Never found by name.
            Binding::Positional(_) => return Err(Error::UnknownArgument(name)),
        }

        Ok(())
    }

    fn fill_positional(&mut self, value: &'v str) -> Result<(), Error<'v>> {
        let slot = self
            .next_unset_positional()
            .ok_or(Error::UnexpectedPositional(value))?;

        trace!("positional = {}", value);
        *slot = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use googletest::prelude::*;

    use super::*;

    #[derive(Debug, Default)]
    struct Cli<'v> {
        verbose: bool,
        output: Option<&'v str>,
        input: Option<&'v str>,
    }

    fn parse_cli<'v>(cli: &mut Cli<'v>, argv: &[&'v str]) -> core::result::Result<(), Error<'v>> {
        let mut registry: Registry<'_, 'v> = Registry::new();
        registry.flag(
            Some("-v"),
            Some("--verbose"),
            &mut cli.verbose,
            "Enable verbose output",
        )?;
        registry.option(
            Some("-o"),
            Some("--output"),
            &mut cli.output,
            "Output file name",
        )?;
        registry.positional(&mut cli.input, "Input file")?;
        registry.parse(argv)
    }

    #[test]
    fn it_should_parse_flag_option_and_positional() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "-v", "--output=out.txt", "file.txt"]);

        assert_that!(res.is_ok(), eq(true));
        assert_that!(cli.verbose, eq(true));
        assert_that!(cli.output, eq(Some("out.txt")));
        assert_that!(cli.input, eq(Some("file.txt")));
    }

    #[test]
    fn it_should_accept_empty_argv() {
        let mut cli = Cli::default();

        assert_that!(parse_cli(&mut cli, &[]).is_ok(), eq(true));
        assert_that!(parse_cli(&mut cli, &["prog"]).is_ok(), eq(true));

        assert_that!(cli.verbose, eq(false));
        assert_that!(cli.output, eq(None));
        assert_that!(cli.input, eq(None));
    }

    #[test]
    fn it_should_set_flag_regardless_of_position() {
        for argv in [
            &["prog", "-v", "file.txt"][..],
            &["prog", "file.txt", "--verbose"][..],
            &["prog", "-v", "-o", "out.txt", "-v"][..],
        ] {
            let mut cli = Cli::default();
            assert_that!(parse_cli(&mut cli, argv).is_ok(), eq(true));
            assert_that!(cli.verbose, eq(true));
        }

        let mut cli = Cli::default();
        assert_that!(parse_cli(&mut cli, &["prog", "file.txt"]).is_ok(), eq(true));
        assert_that!(cli.verbose, eq(false));
    }

    #[test]
    fn it_should_bind_every_option_form_identically() {
        for argv in [
            &["prog", "--output", "out.txt"][..],
            &["prog", "--output=out.txt"][..],
            &["prog", "-o", "out.txt"][..],
        ] {
            let mut cli = Cli::default();
            assert_that!(parse_cli(&mut cli, argv).is_ok(), eq(true));
            assert_that!(cli.output, eq(Some("out.txt")));
        }
    }

    #[test]
    fn it_should_keep_last_value_of_repeated_option() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "-o", "a", "--output=b"]);

        assert_that!(res.is_ok(), eq(true));
        assert_that!(cli.output, eq(Some("b")));
    }

    #[test]
    fn it_should_accept_empty_inline_value() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "--output="]);

        assert_that!(res.is_ok(), eq(true));
        assert_that!(cli.output, eq(Some("")));
    }

    #[test]
    fn it_should_take_dashed_value_for_option() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "-o", "-v"]);

        assert_that!(res.is_ok(), eq(true));
        assert_that!(cli.output, eq(Some("-v")));
        assert_that!(cli.verbose, eq(false));
    }

    #[test]
    fn it_should_fail_on_unknown_argument() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "--bogus"]);

        assert_that!(res.err(), eq(Some(Error::UnknownArgument("--bogus"))));

        let mut msg = heapless::String::<64>::new();
        if let Err(err) = res {
            let _ = write!(msg, "{err}");
        }
        assert_that!(msg.as_str(), contains_substring("--bogus"));
    }

    #[test]
    fn it_should_fail_on_unknown_inline_argument() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "--bogus=1"]);

        assert_that!(res.err(), eq(Some(Error::UnknownArgument("--bogus=1"))));
    }

    #[test]
    fn it_should_not_split_single_dash_inline_value() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "-o=out.txt"]);

        assert_that!(res.err(), eq(Some(Error::UnknownArgument("-o=out.txt"))));
        assert_that!(cli.output, eq(None));
    }

    #[test]
    fn it_should_keep_values_written_before_failure() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "-v", "-o", "out.txt", "-x", "file.txt"]);

        assert_that!(res.err(), eq(Some(Error::UnknownArgument("-x"))));
        assert_that!(cli.verbose, eq(true));
        assert_that!(cli.output, eq(Some("out.txt")));
        assert_that!(cli.input, eq(None));
    }

    #[test]
    fn it_should_reject_inline_value_for_flag() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "--verbose=yes"]);

        assert_that!(res.err(), eq(Some(Error::NotValueTaking("--verbose=yes"))));
        assert_that!(cli.verbose, eq(false));
    }

    #[test]
    fn it_should_report_missing_value() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "file.txt", "--output"]);

        assert_that!(res.err(), eq(Some(Error::MissingValue("--output"))));
        assert_that!(cli.input, eq(Some("file.txt")));
        assert_that!(cli.output, eq(None));
    }

    #[test]
    fn it_should_reject_extra_positional() {
        let mut cli = Cli::default();
        let res = parse_cli(&mut cli, &["prog", "a.txt", "b.txt"]);

        assert_that!(res.err(), eq(Some(Error::UnexpectedPositional("b.txt"))));
        assert_that!(cli.input, eq(Some("a.txt")));
    }

    #[test]
    fn it_should_fill_positionals_in_declaration_order() {
        let argv = ["prog", "x", "y"];

        let mut a = None;
        let mut b = None;
        {
            let mut registry: Registry<'_, '_> = Registry::new();
            let _ = registry.positional(&mut a, "a");
            let _ = registry.positional(&mut b, "b");
            assert_that!(registry.parse(&argv).is_ok(), eq(true));
        }
        assert_that!(a, eq(Some("x")));
        assert_that!(b, eq(Some("y")));

        let mut a = None;
        let mut b = None;
        {
            let mut registry: Registry<'_, '_> = Registry::new();
            let _ = registry.positional(&mut b, "b");
            let _ = registry.positional(&mut a, "a");
            assert_that!(registry.parse(&argv).is_ok(), eq(true));
        }
        assert_that!(a, eq(Some("y")));
        assert_that!(b, eq(Some("x")));
    }

    #[test]
    fn it_should_interleave_positionals_and_names() {
        let mut verbose = false;
        let mut src = None;
        let mut dst = None;
        {
            let mut registry: Registry<'_, '_> = Registry::new();
            let _ = registry.positional(&mut src, "source");
            let _ = registry.flag(Some("-v"), None, &mut verbose, "verbose");
            let _ = registry.positional(&mut dst, "destination");
            assert_that!(registry.parse(&["prog", "a", "-v", "b"]).is_ok(), eq(true));
        }
        assert_that!(verbose, eq(true));
        assert_that!(src, eq(Some("a")));
        assert_that!(dst, eq(Some("b")));
    }

    #[test]
    fn it_should_write_duplicate_name_into_first_declaration() {
        let mut first = false;
        let mut second = false;
        {
            let mut registry: Registry<'_, '_> = Registry::new();
            let _ = registry.flag(Some("-d"), None, &mut first, "first");
            let _ = registry.flag(Some("-d"), Some("--debug"), &mut second, "second");
            assert_that!(registry.parse(&["prog", "-d"]).is_ok(), eq(true));
        }
        assert_that!(first, eq(true));
        assert_that!(second, eq(false));
    }

    #[test]
    fn it_should_not_match_positional_by_name() {
        let mut input = None;
        {
            let mut registry: Registry<'_, '_> = Registry::new();
            let _ = registry.declare(
                Some("-i"),
                None,
                Binding::Positional(&mut input),
                Some("input"),
            );
            let res = registry.parse(&["prog", "-i"]);
            assert_that!(res.err(), eq(Some(Error::UnknownArgument("-i"))));
        }
        assert_that!(input, eq(None));
    }
}
