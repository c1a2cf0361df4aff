//! The word scanner: splits input into words.
//!
//! A word is one of:
//! - an open or close paren, on its own
//! - the empty list, `()`
//! - a string, from its opening quote to the first unescaped closing quote
//! - an atom: a run of characters up to the next delimiter (paren, quote, space, end)
//!
//! Words are found by a deterministic state machine over `RuneClass`.
//! The delimiter that ends a word is left in place for the next word.

use tracing::trace;

use super::runeclass::{classify, RuneClass};
use super::{ScanError, ScanFailure};

/// States of the word scanner.
///
/// The discriminants of the non-terminal states index the rows of the
/// transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start = 0,
    AfterOpenParen,
    AfterCloseParen,
    InString,
    InSymbolOrAtom,
    EscapeInString,
    EmptyListSeen,
    Accept,
    Illegal,
}

const ROWS: usize = 7;

/// Transition table: `TRANSITIONS[state][class]`.
#[rustfmt::skip]
const TRANSITIONS: [[State; RuneClass::COUNT]; ROWS] = {
    use State::*;
    [
        // EndOfInput  Whitespace      LeftParen       RightParen       DoubleQuote EscapeChar      Other
        [Accept,      Start,          AfterOpenParen, AfterCloseParen, InString,   Illegal,        InSymbolOrAtom], // Start
        [Accept,      AfterOpenParen, Accept,         EmptyListSeen,   Accept,     Illegal,        Accept],         // AfterOpenParen
        [Accept,      Accept,         Accept,         Accept,          Accept,     Illegal,        Accept],         // AfterCloseParen
        [Illegal,     InString,       InString,       InString,        Accept,     EscapeInString, InString],       // InString
        [Accept,      Accept,         Accept,         Accept,          Accept,     Illegal,        InSymbolOrAtom], // InSymbolOrAtom
        [Illegal,     InString,       InString,       InString,        InString,   InString,       InString],       // EscapeInString
        [Accept,      Accept,         Accept,         Accept,          Accept,     Illegal,        Accept],         // EmptyListSeen
    ]
};

impl State {
    /// Next state after reading a character of the given class.
    /// `Accept` and `Illegal` are absorbing.
    pub fn next(self, class: RuneClass) -> State {
        match self {
            State::Accept | State::Illegal => self,
            state => TRANSITIONS[state as usize][class as usize],
        }
    }
}

/// A half-open span `[left, right)` of characters in the input.
/// An empty word marks the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Word {
    pub left: usize,
    pub right: usize,
}

impl Word {
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.left..self.right
    }
}

/// Cursor over the characters of an input.
pub struct WordScanner {
    runes: Vec<char>,
    cursor: usize,
}

impl WordScanner {
    pub fn new(input: &str) -> Self {
        WordScanner {
            runes: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Position of the next character `advance` will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the input.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// The character `distance` ahead of the cursor, if any. Does not move the cursor.
    pub fn peek(&self, distance: usize) -> Option<char> {
        self.runes.get(self.cursor + distance).copied()
    }

    /// The character at the cursor, moving past it; `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let r = self.peek(0);
        if r.is_some() {
            self.cursor += 1;
        }
        r
    }

    /// Move the cursor back by `n`, stopping at the start of input.
    pub fn retreat(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// The text covered by a word.
    pub fn text(&self, word: Word) -> String {
        self.runes
            .get(word.range())
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    /// Find the next word, skipping leading whitespace.
    ///
    /// Returns an empty word at end of input.
    pub fn next_word(&mut self) -> Result<Word, ScanError> {
        let mut left = self.cursor;
        let mut state = State::Start;

        loop {
            let r = self.advance();
            let class = classify(r);
            let next = state.next(class);
            trace!("{:?} ({:?}): {:?} -> {:?}", class, r, state, next);

            match next {
                // Only reached while skipping whitespace.
                State::Start => left += 1,
                State::Accept => {
                    // Leave the delimiter for the next word.
                    // A closing quote is part of its string, not a delimiter.
                    if class != RuneClass::EndOfInput && state != State::InString {
                        self.retreat(1);
                    }
                    return Ok(Word {
                        left,
                        right: self.cursor,
                    });
                }
                State::Illegal => {
                    let span = Word {
                        left,
                        right: self.cursor,
                    };
                    let reason = match (state, class) {
                        (State::EscapeInString, RuneClass::EndOfInput) => ScanFailure::EscapeAtEnd,
                        (_, RuneClass::EndOfInput) => ScanFailure::UnterminatedString,
                        _ => ScanFailure::StrayEscape,
                    };
                    return Err(ScanError {
                        word: self.text(span),
                        span,
                        reason,
                    });
                }
                _ => (),
            }
            state = next;
        }
    }
}
