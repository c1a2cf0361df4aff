//! Tags for Scheme objects.
//!
//! A tag names the class of an object; numbers carry an additional sub-tag
//! naming their representation.

/// Class of a Scheme object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Nil,
    Boolean,
    String,
    Symbol,
    Number,
}

/// Representation of a number object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    Integer,
    Float,
    Complex,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::Nil => "nil",
            Tag::Boolean => "boolean",
            Tag::String => "string",
            Tag::Symbol => "symbol",
            Tag::Number => "number",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NumberKind::Integer => "number(int)",
            NumberKind::Float => "number(float)",
            NumberKind::Complex => "number(complex)",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nil" => Ok(Tag::Nil),
            "boolean" => Ok(Tag::Boolean),
            "string" => Ok(Tag::String),
            "symbol" => Ok(Tag::Symbol),
            "number" => Ok(Tag::Number),
            _ => Err(format!("invalid tag {}", s)),
        }
    }
}
