/// The core words of the language.
pub mod base_words;

/// Words that perform I/O operations.
pub mod io_words;
