//! argslot-parser, the engine behind argslot.
//!
//! Callers declare flags, options and positionals in a [`Registry`], each bound to a slot they
//! own, then run [`Registry::parse`] over the process arguments. Parsed values are written
//! straight into the bound slots.
#![no_std]

#[macro_use]
mod utils;

pub mod help;
pub mod lexer;
pub mod parser;
pub mod registry;

pub use help::Help;
pub use lexer::{Token, Tokens};
pub use parser::Error;
pub use registry::{ArgSpec, ArgumentKind, Binding, Registry};
