//! Resolved type references
//!
//! A `TypeRef` is what extraction resolved a declared type to: the erased
//! qualified name plus its type arguments. Arrays keep the element's
//! qualified name and set `array`.

use super::names;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Erased qualified name (`java.util.List`, `com.example.OrderItem`)
    pub qualified_name: String,

    /// Type arguments in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeRef>,

    /// Array of `qualified_name`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub array: bool,
}

/// Collection shape of a reference, viewed through its element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeShape<'a> {
    /// Element type for collections, the reference itself otherwise
    pub element: &'a TypeRef,
    /// True for arrays and configured collection types
    pub many: bool,
}

impl TypeRef {
    /// Non-generic reference
    pub fn named(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_arguments: Vec::new(),
            array: false,
        }
    }

    /// Parameterized reference (`java.util.List<OrderItem>`)
    pub fn generic(qualified_name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_arguments,
            array: false,
        }
    }

    /// Array of `element`
    pub fn array_of(element: TypeRef) -> Self {
        Self {
            array: true,
            ..element
        }
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.qualified_name)
    }

    /// Whether `qualified_name` is one of `collection_types`.
    ///
    /// Unqualified references (no namespace) are compared by simple name.
    pub fn is_collection_type(&self, collection_types: &[String]) -> bool {
        let unqualified = names::namespace_of(&self.qualified_name).is_empty();
        collection_types.iter().any(|candidate| {
            candidate == &self.qualified_name
                || (unqualified && names::simple_name(candidate) == self.qualified_name)
        })
    }

    /// Unwrap one level of collection.
    ///
    /// The element of a collection is its last type argument, so map-like
    /// collections yield their value type. A collection without type arguments
    /// is still `many`, with itself as the (unknown) element.
    pub fn shape<'a>(&'a self, collection_types: &[String]) -> TypeShape<'a> {
        if self.array {
            return TypeShape {
                element: self,
                many: true,
            };
        }
        if self.is_collection_type(collection_types) {
            return TypeShape {
                element: self.type_arguments.last().unwrap_or(self),
                many: true,
            };
        }
        TypeShape {
            element: self,
            many: false,
        }
    }

    /// This reference and every nested type argument, depth-first
    pub fn walk(&self) -> Vec<&TypeRef> {
        let mut out = vec![self];
        let mut index = 0;
        while index < out.len() {
            let current = out[index];
            out.extend(current.type_arguments.iter());
            index += 1;
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        if self.array {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
