//! Numeric literals.
//!
//! A literal is tried, in order, as:
//! - an integer: optional sign, optional radix prefix (`0x`, `0o`, `0b`, or a bare
//!   leading `0` for octal), digits with optional `_` separators
//! - a float, in the usual decimal notation with optional exponent
//! - a complex number, `a+bi` or `a-bi`, or a pure imaginary `bi`
//!
//! The first that fits decides the representation.

use crate::data::{Complex, Object, Tag};

use super::{LexResult, ParseError};

mod patterns {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn complex() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // Real part (optional), then a signed imaginary part, then `i`.
            // The magnitude of the imaginary part may be left out: `1+i`.
            const REAL: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";
            const SIGNED: &str = r"[+-](?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)?";
            Regex::new(&format!(
                r"\A(?:(?P<re>{REAL})(?P<im>{SIGNED})|(?P<pure>{REAL}))i\z"
            ))
            .expect("could not compile regex for complex")
        })
    }
}

/// Parse a numeric literal into a number object.
pub fn parse_number(text: &str) -> LexResult<Object> {
    if let Some(i) = parse_integer(text) {
        return Ok(Object::new(Tag::Number, i)?);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Ok(Object::new(Tag::Number, f)?);
    }
    match parse_complex(text) {
        Ok(c) => Ok(Object::new(Tag::Number, c)?),
        Err(reason) => Err(ParseError::new(
            text,
            format!("not an integer, float, or complex number ({reason})"),
        )
        .into()),
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if !separators_ok(body) {
        return None;
    }
    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        Some("0o" | "0O") => (8, &body[2..]),
        Some("0b" | "0B") => (2, &body[2..]),
        // A leading zero alone means octal: `012` is 10.
        _ if body.len() > 1 && body.starts_with('0') => (8, &body[1..]),
        _ => (10, body),
    };
    let digits = digits.replace('_', "");
    // `from_str_radix` takes its own sign; only the one we stripped is allowed.
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }
    if negative {
        i64::from_str_radix(&format!("-{digits}"), radix).ok()
    } else {
        i64::from_str_radix(&digits, radix).ok()
    }
}

/// Underscores may only sit between digits, or between a radix prefix and a digit.
fn separators_ok(body: &str) -> bool {
    #[derive(PartialEq)]
    enum Last {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = body.as_bytes();
    let mut last = Last::Start;
    let mut hex = false;
    let mut rest = bytes;
    if let [b'0', prefix, tail @ ..] = bytes {
        if matches!(prefix.to_ascii_lowercase(), b'x' | b'o' | b'b') {
            hex = prefix.to_ascii_lowercase() == b'x';
            last = Last::Digit;
            rest = tail;
        }
    }
    for &b in rest {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            last = Last::Digit;
        } else if b == b'_' {
            if last != Last::Digit {
                return false;
            }
            last = Last::Underscore;
        } else {
            if last == Last::Underscore {
                return false;
            }
            last = Last::Other;
        }
    }
    last != Last::Underscore
}

fn parse_complex(text: &str) -> Result<Complex, String> {
    let captures = patterns::complex()
        .captures(text)
        .ok_or_else(|| "expected a+bi".to_owned())?;
    let float = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| format!("invalid component {s:?}: {e}"))
    };

    if let Some(pure) = captures.name("pure") {
        return Ok(Complex::new(0.0, float(pure.as_str())?));
    }
    let (Some(re), Some(im)) = (captures.name("re"), captures.name("im")) else {
        return Err("expected a+bi".to_owned());
    };
    let im = match im.as_str() {
        "+" => 1.0,
        "-" => -1.0,
        im => float(im)?,
    };
    Ok(Complex::new(float(re.as_str())?, im))
}
