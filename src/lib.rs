/// Module for turning source text into tokens and tokens into new words.
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
#[macro_use]
pub mod runtime;

/// The read-eval-print loop.
pub mod repl;
