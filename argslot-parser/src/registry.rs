//! The set of declared arguments and the slots they write into.

use core::fmt;

use heapless::Vec;

use crate::parser::Error;

/// Default number of arguments a registry can hold.
pub const ARG_COUNT_MAX: usize = 8;

/// Defines how an argument is given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentKind {
    /// Boolean presence (e.g. -v).
    Flag,

    /// Named argument with exactly one value (e.g. -o out.txt).
    Option,

    /// Unnamed argument matched by arrival order.
    Positional,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKind::Flag => write!(f, "flag"),
            ArgumentKind::Option => write!(f, "option"),
            ArgumentKind::Positional => write!(f, "positional"),
        }
    }
}

/// Caller-owned slot an argument writes into. The variant decides the argument kind, so a
/// flag can only ever be bound to a boolean.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Binding<'r, 'v> {
    /// Set to `true` when the flag is present.
    Flag(&'r mut bool),

    /// Set to the value following the option name.
    Option(&'r mut Option<&'v str>),

    /// Set to the bare argument it receives, if still `None` at that point.
    Positional(&'r mut Option<&'v str>),
}

impl Binding<'_, '_> {
    /// The kind of argument this slot belongs to.
    pub fn kind(&self) -> ArgumentKind {
        match self {
            Binding::Flag(_) => ArgumentKind::Flag,
            Binding::Option(_) => ArgumentKind::Option,
            Binding::Positional(_) => ArgumentKind::Positional,
        }
    }
}

/// One declared argument.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArgSpec<'r, 'v> {
    short_name: Option<&'r str>,
    long_name: Option<&'r str>,
    help: Option<&'r str>,
    pub(crate) binding: Binding<'r, 'v>,
}

impl<'r, 'v> ArgSpec<'r, 'v> {
    /// Short form, dash included (e.g. -v).
    #[inline(always)]
    pub fn short_name(&self) -> Option<&'r str> {
        self.short_name
    }

    /// Long form, dashes included (e.g. --verbose).
    #[inline(always)]
    pub fn long_name(&self) -> Option<&'r str> {
        self.long_name
    }

    /// Help text shown in the usage, if any.
    #[inline(always)]
    pub fn help(&self) -> Option<&'r str> {
        self.help
    }

    /// Kind of argument, as decided by its binding.
    #[inline(always)]
    pub fn kind(&self) -> ArgumentKind {
        self.binding.kind()
    }

    /// Check if `token` names this argument. Positionals have no name to match, even when one
    /// was given at declaration.
    pub fn matches(&self, token: &str) -> bool {
        if self.kind() == ArgumentKind::Positional {
            return false;
        }

        self.short_name == Some(token) || self.long_name == Some(token)
    }
}

/// Defines the ordered list of declared arguments. Declaration order is both the help order and
/// the order in which positionals are filled.
///
/// Names are not checked for uniqueness. When two arguments share a name, the one declared first
/// wins every lookup and the other is unreachable by that name.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registry<'r, 'v, const SIZE: usize = ARG_COUNT_MAX> {
    specs: Vec<ArgSpec<'r, 'v>, SIZE>,
}

impl<const SIZE: usize> Default for Registry<'_, '_, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, 'v, const SIZE: usize> Registry<'r, 'v, SIZE> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Registry { specs: Vec::new() }
    }

    /// Append an argument. Fails with [`Error::OutOfMemory`] once the registry is full, in which
    /// case the registry is left unchanged.
    pub fn declare(
        &mut self,
        short_name: Option<&'r str>,
        long_name: Option<&'r str>,
        binding: Binding<'r, 'v>,
        help: Option<&'r str>,
    ) -> Result<(), Error<'v>> {
        let spec = ArgSpec {
            short_name,
            long_name,
            help,
            binding,
        };

        if self.specs.push(spec).is_err() {
            debug!("registry is full ({} arguments)", SIZE);
            return Err(Error::OutOfMemory);
        }

        Ok(())
    }

    /// Declare a boolean flag.
    pub fn flag(
        &mut self,
        short_name: Option<&'r str>,
        long_name: Option<&'r str>,
        slot: &'r mut bool,
        help: &'r str,
    ) -> Result<(), Error<'v>> {
        self.declare(short_name, long_name, Binding::Flag(slot), Some(help))
    }

    /// Declare an option taking one value.
    pub fn option(
        &mut self,
        short_name: Option<&'r str>,
        long_name: Option<&'r str>,
        slot: &'r mut Option<&'v str>,
        help: &'r str,
    ) -> Result<(), Error<'v>> {
        self.declare(short_name, long_name, Binding::Option(slot), Some(help))
    }

    /// Declare the next positional.
    pub fn positional(
        &mut self,
        slot: &'r mut Option<&'v str>,
        help: &'r str,
    ) -> Result<(), Error<'v>> {
        self.declare(None, None, Binding::Positional(slot), Some(help))
    }

    /// Find the first flag or option named `token`. The match is exact: no prefix, no case
    /// folding.
    pub fn find(&self, token: &str) -> Option<&ArgSpec<'r, 'v>> {
        self.specs.iter().find(|spec| spec.matches(token))
    }

    pub(crate) fn find_mut(&mut self, token: &str) -> Option<&mut ArgSpec<'r, 'v>> {
        self.specs.iter_mut().find(|spec| spec.matches(token))
    }

    /// Slot of the first positional that has not received a value yet.
    pub(crate) fn next_unset_positional(&mut self) -> Option<&mut Option<&'v str>> {
        self.specs.iter_mut().find_map(|spec| match &mut spec.binding {
            Binding::Positional(slot) if slot.is_none() => Some(&mut **slot),
            _ => None,
        })
    }

    /// Iterate over declared arguments, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ArgSpec<'r, 'v>> {
        self.specs.iter()
    }

    /// Number of declared arguments.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if no argument has been declared yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Maximum number of arguments.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        SIZE
    }
}
