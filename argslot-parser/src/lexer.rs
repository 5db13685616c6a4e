//! A lexer for classifying the raw tokens of a command line.

/// Defines a `Token` that has been read from the command line. Names keep their leading
/// dashes, since they are looked up verbatim in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// A long name with an inline value (e.g. --output=out.txt), split at the first `=`.
    Assign {
        /// The name part (e.g. --output).
        name: &'a str,

        /// The value part (e.g. out.txt), possibly empty.
        value: &'a str,

        /// The whole argument as given.
        raw: &'a str,
    },

    /// Any other dashed argument (e.g. -v or --verbose).
    Named(&'a str),

    /// Everything that does not start with a dash.
    Bare(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a single raw argument.
    pub fn classify(arg: &'a str) -> Self {
        if Self::is_long(arg)
            && let Some((name, value)) = arg.split_once('=')
        {
            return Token::Assign {
                name,
                value,
                raw: arg,
            };
        }

        if Self::is_named(arg) {
            return Token::Named(arg);
        }

        Token::Bare(arg)
    }

    /// Evaluate if the token string is a dashed name, short or long.
    #[inline(always)]
    pub fn is_named(input: &str) -> bool {
        input.starts_with('-')
    }

    /// Evaluate if the token string is a long name.
    #[inline(always)]
    pub fn is_long(input: &str) -> bool {
        input.starts_with("--")
    }

    /// The argument this token was read from.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Assign { raw, .. } => raw,
            Token::Named(name) => name,
            Token::Bare(value) => value,
        }
    }
}

/// Streams tokens from the command line input, with one argument of lookahead for option
/// values.
///
/// The input must not contain the program name.
#[derive(Clone, Debug)]
pub struct Tokens<'s, 'a> {
    argv: &'s [&'a str],
    cursor: usize,
}

impl<'s, 'a> Tokens<'s, 'a> {
    /// Create a new lexer from the command line input.
    pub fn new(argv: &'s [&'a str]) -> Self {
        Tokens { argv, cursor: 0 }
    }

    /// Take the next argument as is, without classifying it. This is how an option receives
    /// its value, so a value starting with a dash is still consumed.
    pub fn next_raw(&mut self) -> Option<&'a str> {
        let arg = self.argv.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(arg)
    }

    /// Arguments that have not been consumed yet.
    #[inline(always)]
    pub fn remaining(&self) -> &'s [&'a str] {
        &self.argv[self.cursor..]
    }
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_raw().map(Token::classify)
    }
}
