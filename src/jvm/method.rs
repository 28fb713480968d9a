//! Method names and the method entries descriptors are matched against.
use crate::macros::see_jvm_spec;

/// The name of the instance initialization method, i.e., a constructor.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// The name of the class or interface initialization method.
pub const CLASS_INITIALIZER_NAME: &str = "<clinit>";

/// Checks whether `name` is a legal unqualified method name.
///
/// A legal method name is non-empty and contains none of `.`, `;`, `[`, `/`, `<`, and `>`.
/// Note that this rejects [`CONSTRUCTOR_NAME`] and [`CLASS_INITIALIZER_NAME`], which are
/// only legal in combination with a specific descriptor.
#[doc = see_jvm_spec!(4, 2, 2)]
#[must_use]
pub fn is_legal_method_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['.', ';', '[', '/', '<', '>'])
}

/// A method entry as exposed by a class file reader, consisting of a name and a
/// descriptor string such as `(I)V`.
pub trait MethodRecord {
    /// The name of the method.
    fn name(&self) -> &str;
    /// The descriptor of the method, without the name.
    fn descriptor(&self) -> &str;
}

/// An owned [`MethodRecord`].
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MethodEntry {
    /// The name of the method.
    pub name: String,
    /// The descriptor of the method.
    pub descriptor: String,
}

impl MethodEntry {
    /// Creates a new [`MethodEntry`].
    pub fn new<N, D>(name: N, descriptor: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl MethodRecord for MethodEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl<R: MethodRecord + ?Sized> MethodRecord for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn descriptor(&self) -> &str {
        (**self).descriptor()
    }
}
