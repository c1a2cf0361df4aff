//! Scheme data types.
//!
//! Objects form a closed set of variants:
//! - the empty list (nil), which carries no value
//! - booleans
//! - strings and symbols, which own their text
//! - numbers: `i64` integers, `f64` floats, and complex numbers as a pair of `f64`
//!
//! Each object reports a tag (its class) and, for numbers, a sub-tag
//! (its representation). `Object::new` builds an object from a tag and a raw
//! value, refusing values that do not fit the tag.

mod objects;
mod render;
mod tag;

pub use objects::*;
pub use tag::{NumberKind, Tag};

/// Error from `Object::new`: the raw value does not fit the requested tag.
///
/// This indicates a logic error in the caller, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal {tag} value, {value}")]
pub struct ValueError {
    pub tag: Tag,
    pub value: String,
}
