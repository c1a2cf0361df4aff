//! Scheme reader front end: turns text into typed tokens.
//!

pub mod data;

pub mod reader;
pub use reader::{tokenize, LexError, Lexer, Token, TokenKind};

mod repl;
pub use repl::{repl, ReplConfig, NAME, VERSION};
