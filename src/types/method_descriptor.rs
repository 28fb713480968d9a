//! Named JVM method descriptors, usable as keys to look up methods in a class.

use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;

use crate::{
    jvm::method::{CLASS_INITIALIZER_NAME, CONSTRUCTOR_NAME, MethodRecord, is_legal_method_name},
    macros::{see_jvm_spec, trace},
};

use super::field_type::{UnsplittableArgument, is_legal_type_descriptor, split_arguments};

/// The grammar of a fully qualified method descriptor, i.e., `name(args)return`.
static FULL_DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    const TYPE: &str = r"\[*(?:[BCDFIJSZ]|L[^;\[]+;)";
    let pattern = format!(r"^(?P<name>[^(]*)\((?P<args>(?:{TYPE})*)\)(?P<return>V|{TYPE})$");
    Regex::new(&pattern).expect("The descriptor grammar is invalid")
});

/// The descriptor of a method together with its name, for example
/// `spawnParticle(Lnet/minecraft/util/EnumParticleTypes;DDDDDD[I)V`.
///
/// A [`MethodDescriptor`] can only be obtained through validation, so every instance has
/// - a legal method name, unless it is a class initializer `<clinit>()V` or a constructor
///   `<init>(...)V`,
/// - a legal return type, which may be `V`, and
/// - a parameter list made of legal field descriptors.
///
/// Equality, hashing, and ordering only consider the name, the parameter list, and the
/// return type. To compare against a method entry read from a class file, use
/// [`MethodDescriptor::matches`].
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    args: String,
    return_type: String,
    fully_qualified_name: String,
    argument_list: Vec<String>,
}

impl MethodDescriptor {
    /// Creates a [`MethodDescriptor`] from its name, its concatenated parameter
    /// descriptors, and its return type.
    ///
    /// # Errors
    /// - [`Error::MalformedName`] if `name` is not a legal method name and the method is
    ///   not an initializer.
    /// - [`Error::MalformedReturnType`] if `return_type` is neither `V` nor a legal field
    ///   descriptor.
    /// - [`Error::MalformedArgument`] if `args` cannot be split into legal field
    ///   descriptors.
    pub fn new<N, A, R>(name: N, args: A, return_type: R) -> Result<Self, Error>
    where
        N: Into<String>,
        A: Into<String>,
        R: Into<String>,
    {
        let raw = RawDescriptor {
            name: name.into(),
            args: args.into(),
            return_type: return_type.into(),
        };
        if !raw.is_special_form() && !is_legal_method_name(&raw.name) {
            return Err(Error::MalformedName(raw));
        }
        if !is_legal_type_descriptor(&raw.return_type, true) {
            return Err(Error::MalformedReturnType(raw));
        }
        let argument_list = match validate_arguments(&raw.args) {
            Ok(it) => it,
            Err(index) => {
                return Err(Error::MalformedArgument {
                    descriptor: raw,
                    index,
                });
            }
        };
        let RawDescriptor {
            name,
            args,
            return_type,
        } = raw;
        let fully_qualified_name = format!("{name}({args}){return_type}");
        Ok(Self {
            name,
            args,
            return_type,
            fully_qualified_name,
            argument_list,
        })
    }

    /// Parses a descriptor of the form `name(args)return`, for example `foo(I[J)V`.
    /// The whole input must conform to the descriptor grammar.
    ///
    /// # Errors
    /// Returns [`Error::MalformedDescriptor`] if `path` does not have the shape of a
    /// descriptor, otherwise any error of [`MethodDescriptor::new`].
    pub fn parse_from_full_path(path: &str) -> Result<Self, Error> {
        let captures = FULL_DESCRIPTOR
            .captures(path)
            .ok_or_else(|| Error::MalformedDescriptor(path.to_owned()))?;
        let descriptor = Self::new(&captures["name"], &captures["args"], &captures["return"])?;
        trace!(descriptor = %descriptor, "Parsed method descriptor");
        Ok(descriptor)
    }

    /// Parses a descriptor of the form `name(args)return` by splitting it at `(` and `)`.
    ///
    /// Unlike [`MethodDescriptor::parse_from_full_path`], this does not check the shape
    /// of the input beyond the number of parentheses. The extracted parts are validated
    /// by [`MethodDescriptor::new`].
    ///
    /// # Errors
    /// Returns [`Error::MalformedDescriptor`] unless `full_name` splits into exactly three
    /// parts, otherwise any error of [`MethodDescriptor::new`].
    pub fn parse_from_full_name(full_name: &str) -> Result<Self, Error> {
        let mut parts = full_name.split(['(', ')']);
        let (Some(name), Some(args), Some(return_type), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::MalformedDescriptor(full_name.to_owned()));
        };
        let descriptor = Self::new(name, args, return_type)?;
        trace!(descriptor = %descriptor, "Split method descriptor");
        Ok(descriptor)
    }

    /// The name of the method.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The concatenated descriptors of the parameters, e.g., `Ljava/lang/String;I`.
    #[must_use]
    pub fn args(&self) -> &str {
        &self.args
    }

    /// The descriptor of the return type, `V` if the method returns `void`.
    #[must_use]
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// The descriptor without the name, e.g., `(Ljava/lang/String;I)V`.
    #[must_use]
    pub fn full_descriptor(&self) -> &str {
        &self.fully_qualified_name[self.name.len()..]
    }

    /// The name followed by the descriptor, e.g., `foo(Ljava/lang/String;I)V`.
    #[must_use]
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// The descriptors of the individual parameters, in declaration order.
    #[must_use]
    pub fn argument_list(&self) -> &[String] {
        &self.argument_list
    }

    /// The number of parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.argument_list.len()
    }

    /// Checks whether this describes an initializer, i.e., a class initializer taking no
    /// arguments or a constructor, both returning `void`.
    #[must_use]
    pub fn is_special_form(&self) -> bool {
        self.is_constructor() || self.is_static_initializer()
    }

    /// Checks whether this describes a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME && self.return_type == "V"
    }

    /// Checks whether this describes a class initializer.
    #[must_use]
    pub fn is_static_initializer(&self) -> bool {
        self.name == CLASS_INITIALIZER_NAME && self.args.is_empty() && self.return_type == "V"
    }

    /// Checks whether `record` has the same name and the same descriptor as this.
    ///
    /// Records are not [`PartialEq`] to descriptors. A matching record does not hash like
    /// the descriptor it matches, so a `HashSet<MethodDescriptor>` cannot be probed with
    /// records.
    #[must_use]
    pub fn matches<R: MethodRecord + ?Sized>(&self, record: &R) -> bool {
        record.name() == self.name && record.descriptor() == self.full_descriptor()
    }

    /// Returns the first record in `records` that [matches](Self::matches) this.
    #[must_use]
    pub fn find_match<I>(&self, records: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::Item: MethodRecord,
    {
        let found = records.into_iter().find(|it| self.matches(it));
        if found.is_some() {
            trace!(descriptor = %self, "Found matching method");
        }
        found
    }

    fn key(&self) -> (&str, &str, &str) {
        (&self.name, &self.args, &self.return_type)
    }
}

/// Splits `args` and checks each parameter, returning the index of the first bad one.
fn validate_arguments(args: &str) -> Result<Vec<String>, usize> {
    let arguments = split_arguments(args).map_err(|UnsplittableArgument { index }| index)?;
    match arguments
        .iter()
        .position(|it| !is_legal_type_descriptor(it, false))
    {
        Some(index) => Err(index),
        None => Ok(arguments.into_iter().map(str::to_owned).collect()),
    }
}

impl MethodRecord for MethodDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> &str {
        self.full_descriptor()
    }
}

impl PartialEq for MethodDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for MethodDescriptor {}

impl Hash for MethodDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for MethodDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MethodDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fully_qualified_name)
    }
}

impl FromStr for MethodDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_full_path(s)
    }
}

/// The unvalidated parts of a [`MethodDescriptor`], reported when validation fails.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{name}({args}){return_type}")]
pub struct RawDescriptor {
    /// The name of the method.
    pub name: String,
    /// The concatenated descriptors of the parameters.
    pub args: String,
    /// The descriptor of the return type.
    pub return_type: String,
}

impl RawDescriptor {
    fn is_special_form(&self) -> bool {
        self.return_type == "V"
            && ((self.name == CLASS_INITIALIZER_NAME && self.args.is_empty())
                || self.name == CONSTRUCTOR_NAME)
    }
}

/// An error when parsing or validating a [`MethodDescriptor`].
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum Error {
    /// The input does not have the shape `name(args)return`.
    #[error("Invalid descriptor: '{0}'")]
    MalformedDescriptor(String),
    /// The name is not a legal method name.
    #[error("Illegal method name in '{0}'")]
    MalformedName(RawDescriptor),
    /// The return type is not a legal descriptor.
    #[error("Illegal return type in '{0}'")]
    MalformedReturnType(RawDescriptor),
    /// A parameter is not a legal descriptor.
    #[error("Illegal parameter #{index} in '{descriptor}'")]
    MalformedArgument {
        /// The descriptor containing the parameter.
        descriptor: RawDescriptor,
        /// The index of the parameter.
        index: usize,
    },
}
