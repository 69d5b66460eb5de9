use std::fmt::{self, Display, Formatter};

/// Text of the token that opens a word definition.
pub const START_DEFINITION: &str = ":";

/// Text of the token that closes a word definition.
pub const END_DEFINITION: &str = ";";

/// A token is a simple unit of the language.  Source is only ever split on whitespace, so a token
/// is either one of the two definition markers or a word that will later be resolved as a
/// dictionary entry or an integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// `:` opens a new word definition.
    StartDefinition,

    /// `;` closes the open word definition.
    EndDefinition,

    /// Anything else, either a word name or a number.
    Word(String),
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

impl Token {
    /// Classify a single, already lowercased, piece of source text.
    pub fn from_text(text: &str) -> Token {
        match text {
            START_DEFINITION => Token::StartDefinition,
            END_DEFINITION => Token::EndDefinition,
            _ => Token::Word(text.to_string()),
        }
    }

    /// The source text of the token.
    pub fn text(&self) -> &str {
        match self {
            Token::StartDefinition => START_DEFINITION,
            Token::EndDefinition => END_DEFINITION,
            Token::Word(text) => text,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Lowercase the source and split it on runs of whitespace.  There is no quoting or comment
/// syntax.
pub fn tokenize_from_source(source: &str) -> TokenList {
    source
        .to_lowercase()
        .split_whitespace()
        .map(Token::from_text)
        .collect()
}

/// Parse a base 10, signed 64-bit integer literal.  A leading `+` or `-` is accepted.
pub fn parse_literal(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}
