/// All of the core data structures used by the interpreter.
pub mod data_structures;

/// Module for defining the built-in native words that make up the standard library.
pub mod built_ins;

/// Module for defining the error reporting of the interpreter.
pub mod error;

/// Module for defining the core functionality of the interpreter.  This includes the traits word
/// handlers run against and the session that evaluates tokens.
#[macro_use]
pub mod interpreter;
