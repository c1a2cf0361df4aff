//! Canonical textual rendering of Scheme objects.
//!
//! Strings are shown with their cooked contents between quotes; escapes are
//! not reconstructed.

use std::fmt::{Display, Formatter, Result};

use super::{Complex, Float, Number, Object};

/// Write a float in its shortest round-trip form.
/// Integral values keep a trailing `.0` so they still read back as floats.
fn write_float(f: &mut Formatter<'_>, v: Float) -> Result {
    if v.is_nan() {
        write!(f, "+nan.0")
    } else if v.is_infinite() {
        let sign = if v.is_sign_negative() { '-' } else { '+' };
        write!(f, "{sign}inf.0")
    } else {
        // Debug keeps the `.0` and switches to exponents for very large or small values.
        write!(f, "{v:?}")
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(")?;
        write_float(f, self.re)?;
        if self.im.is_nan() || self.im.is_infinite() {
            // These carry their own sign.
            write_float(f, self.im)?;
        } else if self.im.is_sign_negative() {
            write!(f, "-")?;
            write_float(f, -self.im)?;
        } else {
            write!(f, "+")?;
            write_float(f, self.im)?;
        }
        write!(f, "i)")
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write_float(f, *v),
            Number::Complex(v) => v.fmt(f),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Object::Nil => write!(f, "()"),
            Object::Boolean(true) => write!(f, "#t"),
            Object::Boolean(false) => write!(f, "#f"),
            Object::String(s) => write!(f, "\"{s}\""),
            Object::Symbol(s) => write!(f, "{s}"),
            Object::Number(n) => n.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Object;

    #[test]
    fn render_atoms() {
        let cases = [
            (Object::nil(), "()"),
            (Object::boolean(true), "#t"),
            (Object::boolean(false), "#f"),
            (Object::string("Go"), "\"Go\""),
            (Object::string("say \"hi\""), "\"say \"hi\"\""),
            (Object::symbol("tree->list"), "tree->list"),
            (Object::symbol("CamelCase"), "CamelCase"),
        ];
        for (i, (object, want)) in cases.iter().enumerate() {
            assert_eq!(&object.to_string(), want, "unexpected rendering in case {}", i);
        }
    }

    #[test]
    fn render_numbers() {
        let cases = [
            (Object::integer(-4567), "-4567"),
            (Object::integer(0), "0"),
            (Object::float(3.25), "3.25"),
            (Object::float(2.0), "2.0"),
            (Object::float(-0.5), "-0.5"),
            (Object::float(1e300), "1e300"),
            (Object::float(f64::INFINITY), "+inf.0"),
            (Object::float(f64::NEG_INFINITY), "-inf.0"),
            (Object::float(f64::NAN), "+nan.0"),
            (Object::complex(1.0, 2.0), "(1.0+2.0i)"),
            (Object::complex(1.5, -2.25), "(1.5-2.25i)"),
            (Object::complex(0.0, -0.0), "(0.0-0.0i)"),
        ];
        for (i, (object, want)) in cases.iter().enumerate() {
            assert_eq!(&object.to_string(), want, "unexpected rendering in case {}", i);
        }
    }

    #[test]
    fn rendered_floats_read_back() {
        for v in [0.1, 2.5e-8, 123456789.125, 6.02214076e23] {
            let text = Object::float(v).to_string();
            assert_eq!(text.parse::<f64>().unwrap(), v, "{} did not round-trip", text);
        }
    }
}
