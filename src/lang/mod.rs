/// Module for turning a line of source text into a list of tokens for further processing.
pub mod tokenizing;

/// Module for the word definition state machine.  Tokens inside a definition are resolved as they
/// arrive and collected into a new word that is installed once the definition is closed.
pub mod compilation;
