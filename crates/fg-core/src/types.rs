//! Opaque port type references.

use core::fmt;
use std::rc::Rc;

/// Identifier of a port's data type.
///
/// The graph never interprets it: two references are the same type iff their
/// identifiers compare equal. Cloning is a refcount bump.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef(Rc<str>);

impl TypeRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Rc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(Rc::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compared_by_value() {
        let a = TypeRef::new("u32");
        let b = TypeRef::from(String::from("u32"));
        assert_eq!(a, b);
        assert_ne!(a, TypeRef::new("u64"));
        assert_eq!(a.to_string(), "u32");
    }
}
