//! Support for reading Scheme tokens from strings.
//!
//! Reading happens in two steps:
//! - The word scanner splits the input into words, using a fixed state machine.
//! - The tokenizer classifies each word and builds the object it denotes.
//!
//! Tokenizing is all-or-nothing: the first error aborts the whole input.

use crate::data::ValueError;

mod number;
mod runeclass;
mod scanner;
mod token;

pub use number::parse_number;
pub use runeclass::{classify, is_digit, RuneClass};
pub use scanner::{State, Word, WordScanner};
pub use token::{classify_word, tokenize, Lexer, Token, TokenKind};

/// Why the word scanner stopped in its illegal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFailure {
    /// Input ended inside a string.
    UnterminatedString,
    /// Input ended right after a backslash inside a string.
    EscapeAtEnd,
    /// A backslash appeared outside of a string.
    StrayEscape,
}

impl std::fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ScanFailure::UnterminatedString => "unterminated string",
            ScanFailure::EscapeAtEnd => "escape at end of input",
            ScanFailure::StrayEscape => "escape character outside of a string",
        };
        f.write_str(reason)
    }
}

/// The word scanner could not form a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}: {word:?}")]
pub struct ScanError {
    /// Text read before the scanner gave up.
    pub word: String,
    pub span: Word,
    pub reason: ScanFailure,
}

/// A word could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}: {literal:?}")]
pub struct ParseError {
    pub literal: String,
    pub message: String,
}

impl ParseError {
    pub fn new(literal: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError {
            literal: literal.into(),
            message: message.into(),
        }
    }
}

/// Error type for a failed read.
///
/// Some scan errors can be fixed by more input, e.g. `"abc` (an open string);
/// `is_incomplete` reports these, so an interactive caller can ask for another line
/// rather than report an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("value error: {0}")]
    Value(#[from] ValueError),
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<LexError>,
    },
}

impl LexError {
    /// Add additional context to an error.
    pub fn annotate(self, more: impl AsRef<str>) -> Self {
        LexError::Context {
            context: more.as_ref().to_owned(),
            source: Box::new(self),
        }
    }

    /// True if the input stopped in the middle of a string.
    pub fn is_incomplete(&self) -> bool {
        match self {
            LexError::Scan(e) => matches!(
                e.reason,
                ScanFailure::UnterminatedString | ScanFailure::EscapeAtEnd
            ),
            LexError::Context { source, .. } => source.is_incomplete(),
            _ => false,
        }
    }
}

/// The main result type for this module.
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_only_for_open_strings() {
        let open = tokenize("\"hello").unwrap_err();
        assert!(open.is_incomplete(), "{}", open);

        let escaped_end = tokenize("\"hello\\").unwrap_err();
        assert!(escaped_end.is_incomplete(), "{}", escaped_end);

        let stray = tokenize("a\\b").unwrap_err();
        assert!(!stray.is_incomplete(), "{}", stray);

        let boolean = tokenize("#tx").unwrap_err();
        assert!(!boolean.is_incomplete(), "{}", boolean);
    }

    #[test]
    fn annotate_keeps_the_cause() {
        let err = tokenize("\"hello").unwrap_err().annotate("line 3");
        assert!(err.is_incomplete());
        let message = err.to_string();
        assert!(message.starts_with("line 3: "), "{}", message);
        assert!(message.contains("unterminated string"), "{}", message);
    }
}
