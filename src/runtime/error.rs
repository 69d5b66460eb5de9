use std::fmt::{ self, Debug, Formatter };
use thiserror::Error;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// Any error that occurs while evaluating Forth source.
///
/// The REPL collapses all of these into a single failure message per line, the detail is only
/// available to library callers and the debug log.
#[derive(Error)]
pub enum ScriptError
{
    /// A word needed more values than the data stack holds.
    #[error("Stack underflow, needed {needed} value(s) but found {available}.")]
    StackUnderflow { needed: usize, available: usize },

    /// The divisor on the top of the stack was zero.
    #[error("Division by zero.")]
    DivisionByZero,

    /// The token is neither a known word nor an integer literal.
    #[error("Unresolved token `{0}`.")]
    UnresolvedToken(String),

    /// A `;` was found while no definition was open.
    #[error("No word definition is open.")]
    DefinitionNotOpen,

    /// A definition was finished before it received a name.
    #[error("Word definition has no name.")]
    MissingWordName,

    /// A definition would nest compiled words deeper than the interpreter allows.
    #[error("Word {name} nests {depth} compiled words deep, the limit is {limit}.")]
    NestingTooDeep { name: String, depth: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error raised while processing a line of a source file.
    #[error("{path} ({line}): {error}")]
    Script { path: String, line: usize, error: Box<ScriptError> }
}


/// Print the same text as Display so that errors returned from main stay readable.
impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Attach the location of a script line to an error.
    pub fn in_script(path: &str, line: usize, error: ScriptError) -> ScriptError
    {
        ScriptError::Script { path: path.to_string(), line, error: Box::new(error) }
    }
}
