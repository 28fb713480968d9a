//! Legality checks for JVM field descriptors and the splitting of parameter lists.
use std::str::Chars;

use itertools::Itertools;

use crate::macros::see_jvm_spec;

/// A primitive type in Java.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// Returns the single-character descriptor of the primitive type.
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            it => Err(it),
        }
    }
}

/// Checks whether `descriptor` is a single legal field descriptor.
///
/// Any number of leading `[` is accepted, followed by either a primitive type or an
/// object type of the form `L<binary name>;` where the binary name is non-empty and
/// contains neither `;` nor `[`.
/// When `allow_void` is set, `V` on its own is accepted as well, which is what a
/// return type needs. Arrays of `void` are never legal.
#[doc = see_jvm_spec!(4, 3, 2)]
#[must_use]
pub fn is_legal_type_descriptor(descriptor: &str, allow_void: bool) -> bool {
    if allow_void && descriptor == "V" {
        return true;
    }
    let element_type = descriptor.trim_start_matches('[');
    let mut chars = element_type.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PrimitiveType::try_from(c).is_ok(),
        _ => element_type
            .strip_prefix('L')
            .and_then(|it| it.strip_suffix(';'))
            .is_some_and(|binary_name| {
                !binary_name.is_empty() && !binary_name.contains([';', '['])
            }),
    }
}

/// An error indicating that a parameter list cannot be split into descriptors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("Cannot split parameter #{index} from the parameter list")]
pub struct UnsplittableArgument {
    /// The index of the parameter where splitting stopped.
    pub index: usize,
}

/// Splits a concatenated parameter list (e.g., `Ljava/lang/String;I[J`) into the
/// descriptors of its individual parameters.
///
/// Array dimensions stay attached to their element type. `V` is split like a primitive
/// type, so the caller must still reject it with [`is_legal_type_descriptor`].
///
/// # Errors
/// Returns [`UnsplittableArgument`] with the index of the offending parameter if the
/// list ends in the middle of a descriptor or if a parameter starts with a character
/// that cannot begin a descriptor.
pub fn split_arguments(args: &str) -> Result<Vec<&str>, UnsplittableArgument> {
    let mut arguments = Vec::new();
    let mut remaining = args;
    while !remaining.is_empty() {
        let index = arguments.len();
        let mut chars = remaining.chars();
        let dimensions = chars.take_while_ref(|it| *it == '[').count();
        let element_len = chars
            .next()
            .and_then(|prefix| element_type_len(prefix, &mut chars))
            .ok_or(UnsplittableArgument { index })?;
        let (argument, rest) = remaining.split_at(dimensions + element_len);
        arguments.push(argument);
        remaining = rest;
    }
    Ok(arguments)
}

/// Returns the length in bytes of the non-array type starting with `prefix`.
/// For an object type, `remaining` is advanced past the terminating `;`.
fn element_type_len(prefix: char, remaining: &mut Chars<'_>) -> Option<usize> {
    match prefix {
        'L' => {
            let binary_name_len: usize = remaining
                .take_while_ref(|it| *it != ';')
                .map(char::len_utf8)
                .sum();
            remaining.next().map(|_| binary_name_len + 2)
        }
        'V' => Some(1),
        it => PrimitiveType::try_from(it).ok().map(|_| 1),
    }
}
