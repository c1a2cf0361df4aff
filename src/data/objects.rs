use super::{NumberKind, Tag, ValueError};

pub type Integer = i64;
pub type Float = f64;

/// A complex number, as a pair of doubles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: Float,
    pub im: Float,
}

impl Complex {
    pub fn new(re: Float, im: Float) -> Self {
        Complex { re, im }
    }
}

/// A number object. The variant is the number's sub-tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(Integer),
    Float(Float),
    Complex(Complex),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Float(_) => NumberKind::Float,
            Number::Complex(_) => NumberKind::Complex,
        }
    }
}

/// Enum for a Scheme object.
///
/// Objects are immutable once built. The empty list is the value-less `Nil`
/// variant, so every empty list is the same value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Object {
    #[default]
    Nil,
    Boolean(bool),
    /// String contents, with escapes already resolved.
    String(String),
    Symbol(String),
    Number(Number),
}

/// The empty list.
pub const EMPTY_LIST: Object = Object::Nil;

/// Borrowed view of an object's underlying value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Nil,
    Boolean(bool),
    String(&'a str),
    Symbol(&'a str),
    Number(Number),
}

/// A value offered to the checked constructor, `Object::new`.
///
/// Conversions exist from the primitive types that may back an object;
/// whether a value fits a tag is decided at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Unit,
    Bool(bool),
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Complex(Complex),
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Unit => write!(f, "<none>"),
            RawValue::Bool(v) => write!(f, "{v}"),
            RawValue::Text(v) => write!(f, "{v:?}"),
            RawValue::Signed(v) => write!(f, "{v}"),
            RawValue::Unsigned(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v:?}"),
            RawValue::Complex(v) => write!(f, "{v}"),
        }
    }
}

impl Object {
    /// Create a nil object, i.e. the empty list.
    pub fn nil() -> Object {
        EMPTY_LIST
    }

    pub fn boolean(value: bool) -> Object {
        Object::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Object {
        Object::String(value.into())
    }

    pub fn symbol(value: impl Into<String>) -> Object {
        Object::Symbol(value.into())
    }

    pub fn integer(value: Integer) -> Object {
        Object::Number(Number::Integer(value))
    }

    pub fn float(value: Float) -> Object {
        Object::Number(Number::Float(value))
    }

    pub fn complex(re: Float, im: Float) -> Object {
        Object::Number(Number::Complex(Complex::new(re, im)))
    }

    /// Build an object of the requested class from a raw value.
    ///
    /// Nil accepts (and ignores) any value. Numbers accept any integer up to
    /// 64 bits, single or double floats, and single or double complex pairs,
    /// normalized to `i64`, `f64`, and a pair of `f64`.
    pub fn new(tag: Tag, value: impl Into<RawValue>) -> Result<Object, ValueError> {
        let value = value.into();
        let mismatch = |value: &RawValue| ValueError {
            tag,
            value: value.to_string(),
        };
        match (tag, value) {
            (Tag::Nil, _) => Ok(Object::Nil),
            (Tag::Boolean, RawValue::Bool(b)) => Ok(Object::Boolean(b)),
            (Tag::String, RawValue::Text(s)) => Ok(Object::String(s)),
            (Tag::Symbol, RawValue::Text(s)) => Ok(Object::Symbol(s)),
            (Tag::Number, RawValue::Signed(i)) => Ok(Object::integer(i)),
            (Tag::Number, RawValue::Unsigned(u)) => Integer::try_from(u)
                .map(Object::integer)
                .map_err(|_| mismatch(&RawValue::Unsigned(u))),
            (Tag::Number, RawValue::Float(f)) => Ok(Object::float(f)),
            (Tag::Number, RawValue::Complex(c)) => Ok(Object::Number(Number::Complex(c))),
            (_, value) => Err(mismatch(&value)),
        }
    }

    /// The object's class.
    pub fn tag(&self) -> Tag {
        match self {
            Object::Nil => Tag::Nil,
            Object::Boolean(_) => Tag::Boolean,
            Object::String(_) => Tag::String,
            Object::Symbol(_) => Tag::Symbol,
            Object::Number(_) => Tag::Number,
        }
    }

    /// The numeric representation, for numbers only.
    pub fn sub_tag(&self) -> Option<NumberKind> {
        match self {
            Object::Number(n) => Some(n.kind()),
            _ => None,
        }
    }

    pub fn value(&self) -> Value<'_> {
        match self {
            Object::Nil => Value::Nil,
            Object::Boolean(b) => Value::Boolean(*b),
            Object::String(s) => Value::String(s),
            Object::Symbol(s) => Value::Symbol(s),
            Object::Number(n) => Value::Number(*n),
        }
    }

    /// Class predicate, as used by `null?`, `boolean?`, `number?` and friends.
    pub fn is_class(&self, tag: Tag) -> bool {
        self.tag() == tag
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Object::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Text of a string or a symbol.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Object::String(s) | Object::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Object::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<Float> {
        match self {
            Object::Number(Number::Float(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Object::Number(Number::Complex(c)) => Some(*c),
            _ => None,
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<Integer> for Object {
    fn from(value: Integer) -> Self {
        Object::integer(value)
    }
}

impl From<Float> for Object {
    fn from(value: Float) -> Self {
        Object::float(value)
    }
}

impl From<Complex> for Object {
    fn from(value: Complex) -> Self {
        Object::Number(Number::Complex(value))
    }
}

impl From<()> for RawValue {
    fn from(_: ()) -> Self {
        RawValue::Unit
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

macro_rules! raw_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for RawValue {
            fn from(value: $t) -> Self {
                RawValue::Signed(value as i64)
            }
        })*
    };
}

macro_rules! raw_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for RawValue {
            fn from(value: $t) -> Self {
                RawValue::Unsigned(value as u64)
            }
        })*
    };
}

raw_from_signed!(i8, i16, i32, i64, isize);
raw_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<(f32, f32)> for RawValue {
    fn from((re, im): (f32, f32)) -> Self {
        RawValue::Complex(Complex::new(re.into(), im.into()))
    }
}

impl From<(f64, f64)> for RawValue {
    fn from((re, im): (f64, f64)) -> Self {
        RawValue::Complex(Complex::new(re, im))
    }
}

impl From<Complex> for RawValue {
    fn from(value: Complex) -> Self {
        RawValue::Complex(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_is_the_empty_list() {
        let a = Object::new(Tag::Nil, ()).unwrap();
        let b = Object::new(Tag::Nil, 42i32).unwrap();
        assert_eq!(a, EMPTY_LIST);
        assert_eq!(b, Object::nil());
        assert!(a.is_nil());
        assert_eq!(a.tag(), Tag::Nil);
        assert_eq!(a.sub_tag(), None);
        assert_eq!(a.value(), Value::Nil);
    }

    #[test]
    fn numbers_normalize() {
        let cases: Vec<(RawValue, Number)> = vec![
            (0i32.into(), Number::Integer(0)),
            (1i8.into(), Number::Integer(1)),
            (2i16.into(), Number::Integer(2)),
            (3i32.into(), Number::Integer(3)),
            (4i64.into(), Number::Integer(4)),
            (5usize.into(), Number::Integer(5)),
            (6u8.into(), Number::Integer(6)),
            (7u16.into(), Number::Integer(7)),
            (8u32.into(), Number::Integer(8)),
            (9u64.into(), Number::Integer(9)),
            (0.5f32.into(), Number::Float(0.5)),
            (0.02f64.into(), Number::Float(0.02)),
            ((0f32, 1f32).into(), Number::Complex(Complex::new(0.0, 1.0))),
            ((0f64, 2f64).into(), Number::Complex(Complex::new(0.0, 2.0))),
        ];
        for (i, (raw, want)) in cases.into_iter().enumerate() {
            let got = Object::new(Tag::Number, raw).unwrap();
            assert_eq!(got.tag(), Tag::Number, "unexpected tag in case {}", i);
            assert_eq!(got.sub_tag(), Some(want.kind()), "unexpected sub-tag in case {}", i);
            assert_eq!(got.value(), Value::Number(want), "unexpected value in case {}", i);
        }
    }

    #[test]
    fn reject_mismatched_values() {
        let err = Object::new(Tag::Boolean, "yes").unwrap_err();
        assert_eq!(err.tag, Tag::Boolean);
        assert!(err.to_string().contains("\"yes\""), "{}", err);

        Object::new(Tag::Number, true).expect_err("boolean accepted as number");
        Object::new(Tag::String, 12i64).expect_err("integer accepted as string");
        Object::new(Tag::Symbol, 1.5f64).expect_err("float accepted as symbol");
        Object::new(Tag::Number, u64::MAX).expect_err("u64::MAX accepted as i64");
    }

    #[test]
    fn accessors() {
        let s = Object::new(Tag::String, "x").unwrap();
        assert_eq!(s.as_str(), Some("x"));
        assert_eq!(s.value(), Value::String("x"));
        assert!(s.is_class(Tag::String));
        assert!(!s.is_class(Tag::Symbol));

        let sym = Object::new(Tag::Symbol, "car").unwrap();
        assert_eq!(sym.value(), Value::Symbol("car"));
        assert_eq!(sym.as_integer(), None);

        let b = Object::new(Tag::Boolean, false).unwrap();
        assert_eq!(b.as_bool(), Some(false));

        assert_eq!(Object::from(3i64).as_integer(), Some(3));
        assert_eq!(Object::from(3.5f64).as_float(), Some(3.5));
        assert_eq!(
            Object::complex(1.0, -2.0).as_complex(),
            Some(Complex::new(1.0, -2.0))
        );
    }
}
