//! Read-only views of the external schema.
//!
//! The schema itself lives in the surrounding engine; this crate only
//! consumes the slice of it needed to decide which arguments a stage acts
//! on. Nothing here is ever mutated during a call.

use serde::{Deserialize, Serialize};

/// Declared type of a field argument, as read from the external schema.
///
/// Mirrors the wrapper lattice of a GraphQL-style type system: an innermost
/// named type, wrapped in any combination of list and required markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Named(String),
    List(Box<FieldType>),
    Required(Box<FieldType>),
}

impl FieldType {
    pub fn named(name: impl Into<String>) -> Self {
        FieldType::Named(name.into())
    }

    pub fn list(inner: FieldType) -> Self {
        FieldType::List(Box::new(inner))
    }

    pub fn required(inner: FieldType) -> Self {
        FieldType::Required(Box::new(inner))
    }

    /// Innermost named identity, with all list and required wrappers
    /// stripped.
    pub fn named_type(&self) -> &str {
        match self {
            FieldType::Named(name) => name,
            FieldType::List(inner) | FieldType::Required(inner) => inner.named_type(),
        }
    }
}

/// One declared argument of the field being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    pub name: String,
    pub ty: FieldType,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        ArgumentDefinition {
            name: name.into(),
            ty,
        }
    }
}

/// Call metadata describing the field under resolution.
///
/// Supplied by the engine per call and treated as read-only; per-argument
/// state is passed to transforms explicitly instead of being attached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub parent_type: String,
    pub field_name: String,
    /// Argument definitions in declaration order.
    pub arguments: Vec<ArgumentDefinition>,
}

impl FieldInfo {
    pub fn new(
        parent_type: impl Into<String>,
        field_name: impl Into<String>,
        arguments: Vec<ArgumentDefinition>,
    ) -> Self {
        FieldInfo {
            parent_type: parent_type.into(),
            field_name: field_name.into(),
            arguments,
        }
    }
}

/// Selector for the arguments a stage acts on: either a bare type name or a
/// full descriptor whose wrappers are ignored for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    Name(String),
    Type(FieldType),
}

impl TargetType {
    /// Named identity used for matching.
    pub fn named_type(&self) -> &str {
        match self {
            TargetType::Name(name) => name,
            TargetType::Type(ty) => ty.named_type(),
        }
    }
}

impl From<&str> for TargetType {
    fn from(name: &str) -> Self {
        TargetType::Name(name.to_string())
    }
}

impl From<String> for TargetType {
    fn from(name: String) -> Self {
        TargetType::Name(name)
    }
}

impl From<FieldType> for TargetType {
    fn from(ty: FieldType) -> Self {
        TargetType::Type(ty)
    }
}
