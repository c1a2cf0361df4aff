//! Classes of characters, as seen by the word scanner.

/// Input alphabet of the word scanner.
///
/// The discriminants index the columns of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneClass {
    EndOfInput = 0,
    Whitespace,
    LeftParen,
    RightParen,
    DoubleQuote,
    EscapeChar,
    Other,
}

impl RuneClass {
    pub(super) const COUNT: usize = 7;
}

/// Classify a character; `None` stands for the end of input.
pub fn classify(r: Option<char>) -> RuneClass {
    match r {
        None => RuneClass::EndOfInput,
        Some('(') => RuneClass::LeftParen,
        Some(')') => RuneClass::RightParen,
        Some('"') => RuneClass::DoubleQuote,
        Some('\\') => RuneClass::EscapeChar,
        Some(c) if c.is_whitespace() => RuneClass::Whitespace,
        Some(_) => RuneClass::Other,
    }
}

/// Decimal digits only; other Unicode digits are plain characters.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::{classify, is_digit, RuneClass};

    #[test]
    fn classify_delimiters() {
        let cases = [
            (None, RuneClass::EndOfInput),
            (Some('('), RuneClass::LeftParen),
            (Some(')'), RuneClass::RightParen),
            (Some('"'), RuneClass::DoubleQuote),
            (Some('\\'), RuneClass::EscapeChar),
            (Some(' '), RuneClass::Whitespace),
            (Some('\t'), RuneClass::Whitespace),
            (Some('\n'), RuneClass::Whitespace),
            (Some('\u{3000}'), RuneClass::Whitespace),
            (Some('a'), RuneClass::Other),
            (Some('#'), RuneClass::Other),
            (Some('λ'), RuneClass::Other),
            (Some('\0'), RuneClass::Other),
        ];
        for (i, (r, want)) in cases.iter().enumerate() {
            assert_eq!(classify(*r), *want, "unexpected class in case {}", i);
        }
    }

    #[test]
    fn digits_are_ascii() {
        assert!(('0'..='9').all(is_digit));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣'));
    }
}
