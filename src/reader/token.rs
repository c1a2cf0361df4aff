//! Module for turning Scheme words into tokens.

use tracing::debug;

use super::number::parse_number;
use super::runeclass::is_digit;
use super::scanner::WordScanner;
use super::{LexResult, ParseError};
use crate::data::{Object, Tag};

/// Kinds of Scheme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    EmptyList,
    Boolean,
    Number,
    String,
    Symbol,
    /// Never produced by `tokenize`, which fails instead.
    Illegal,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::EmptyList => "EMPTY_LIST",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

/// A Scheme token: a word, its kind, and the value it denotes.
///
/// Parens carry the empty list as their value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the word, quotes and escapes included.
    pub literal: String,
    pub value: Object,
}

impl Token {
    /// Classify a word and build its token.
    pub fn from_literal(literal: String) -> LexResult<Self> {
        let (kind, value) = classify_word(&literal)?;
        Ok(Token {
            kind,
            literal,
            value,
        })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[type:{}, literal:{}, value:{}]",
            self.kind, self.literal, self.value
        )
    }
}

/// Split the input into its tokens.
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    Lexer::new(input).map(Lexer::into_tokens)
}

/// The tokens of one input, with a cursor for reading them in order.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Lexer {
    /// Tokenize the whole input.
    /// Any error discards the tokens read so far.
    pub fn new(input: &str) -> LexResult<Self> {
        let mut scanner = WordScanner::new(input);
        // There are never more tokens than characters.
        let mut tokens = Vec::with_capacity(scanner.len());

        loop {
            let word = scanner.next_word().inspect_err(|e| {
                debug!("failed to scan word: {}", e);
            })?;
            if word.is_empty() {
                break;
            }
            let token = Token::from_literal(scanner.text(word)).inspect_err(|e| {
                debug!("failed to create token: {}", e);
            })?;
            debug!("token: {}", token);
            tokens.push(token);
        }

        Ok(Lexer { tokens, cursor: 0 })
    }

    /// Next unread token, if any.
    pub fn next_token(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens, read or not.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for Lexer {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lexer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Work out the kind of a word, and the object it denotes.
pub fn classify_word(text: &str) -> LexResult<(TokenKind, Object)> {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Err(ParseError::new(text, "empty literal").into());
    };
    let Some(second) = chars.clone().next() else {
        return match first {
            '(' => Ok((TokenKind::LeftParen, Object::nil())),
            ')' => Ok((TokenKind::RightParen, Object::nil())),
            c if is_digit(c) => number(text),
            _ => symbol(text),
        };
    };

    match first {
        '(' => open_paren(text, chars.as_str()),
        '"' => string(text),
        '#' if second == 't' || second == 'f' => boolean(text),
        '+' | '-' if is_digit(second) || second == '.' => number(text),
        '.' if is_digit(second) => number(text),
        c if is_digit(c) => number(text),
        _ => symbol(text),
    }
}

/// A word that starts with an open paren, and has more after it.
/// The scanner keeps any space after an open paren in the same word.
fn open_paren(text: &str, rest: &str) -> LexResult<(TokenKind, Object)> {
    match rest.trim_start() {
        ")" => Ok((TokenKind::EmptyList, Object::nil())),
        "" => Ok((TokenKind::LeftParen, Object::nil())),
        _ => Err(ParseError::new(text, "weird literal").into()),
    }
}

fn string(text: &str) -> LexResult<(TokenKind, Object)> {
    let interior = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| ParseError::new(text, "unterminated string"))?;
    let cooked = cook(interior).ok_or_else(|| ParseError::new(text, "unterminated escape"))?;
    Ok((TokenKind::String, Object::new(Tag::String, cooked)?))
}

/// Resolve escapes in the interior of a string.
///
/// Only `\"` is an escape; it becomes `"`. Any other backslash stays as it is,
/// and the character after it is read as usual.
/// Returns `None` if the string ends in a backslash. An empty interior is a valid empty string.
fn cook(raw: &str) -> Option<String> {
    let mut cooked = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('"') => {
                    chars.next();
                    cooked.push('"');
                }
                Some(_) => cooked.push(ch),
                None => return None,
            }
        } else {
            cooked.push(ch);
        }
    }
    Some(cooked)
}

fn boolean(text: &str) -> LexResult<(TokenKind, Object)> {
    let value = match text {
        "#t" | "#true" => true,
        "#f" | "#false" => false,
        _ => return Err(ParseError::new(text, "illegal boolean literal").into()),
    };
    Ok((TokenKind::Boolean, Object::new(Tag::Boolean, value)?))
}

fn number(text: &str) -> LexResult<(TokenKind, Object)> {
    Ok((TokenKind::Number, parse_number(text)?))
}

fn symbol(text: &str) -> LexResult<(TokenKind, Object)> {
    Ok((TokenKind::Symbol, Object::new(Tag::Symbol, text)?))
}
