/// The integer data stack and the operations that work on it.
pub mod stack;

/// Hold the ContextualData trait, used for managing contexts in the interpreter.
pub mod contextual_data;

/// The dictionary module provides the word dictionary used by the interpreter.
pub mod dictionary;
