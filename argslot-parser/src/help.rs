//! Usage text rendering.

use core::fmt;

use crate::registry::Registry;

const SHORT_NAME_WIDTH: usize = 4;
const LONG_NAME_WIDTH: usize = 20;

/// Usage text of a registry, rendered through [`fmt::Display`]:
///
/// ```text
/// usage: prog [OPTIONS] [ARGUMENTS]
///   -v   --verbose            Enable verbose output
/// ```
///
/// One line per argument in declaration order, with fixed-width name columns. Missing names or
/// help render as blanks.
#[derive(Clone, Copy, Debug)]
pub struct Help<'h, 'r, 'v, const SIZE: usize> {
    registry: &'h Registry<'r, 'v, SIZE>,
    program_name: &'h str,
}

impl<const SIZE: usize> fmt::Display for Help<'_, '_, '_, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "usage: {} [OPTIONS] [ARGUMENTS]", self.program_name)?;

        for spec in self.registry.iter() {
            writeln!(
                f,
                "  {:<short$} {:<long$} {}",
                spec.short_name().unwrap_or_default(),
                spec.long_name().unwrap_or_default(),
                spec.help().unwrap_or_default(),
                short = SHORT_NAME_WIDTH,
                long = LONG_NAME_WIDTH,
            )?;
        }

        Ok(())
    }
}

impl<'r, 'v, const SIZE: usize> Registry<'r, 'v, SIZE> {
    /// Usage text for `program_name`. Rendering reads the declarations only, never the slots.
    pub fn help<'h>(&'h self, program_name: &'h str) -> Help<'h, 'r, 'v, SIZE> {
        Help {
            registry: self,
            program_name,
        }
    }

    /// Write the usage text into any `core::fmt` sink.
    pub fn write_help<W: fmt::Write>(&self, w: &mut W, program_name: &str) -> fmt::Result {
        write!(w, "{}", self.help(program_name))
    }
}
