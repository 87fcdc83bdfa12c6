//! Runtime argument values as a closed tagged union.
//!
//! The engine's own value type stays opaque (`V`); this module only models
//! the shape around it: absent, scalar, list, or still pending. The union is
//! built once when an argument's value is read, so the transformer pattern
//! matches over explicit variants instead of probing shapes at runtime.

use std::fmt;

use futures::future::BoxFuture;
use indexmap::IndexMap;

use crate::error::StageError;

/// A value whose resolution is already in flight and must be awaited before
/// use.
pub type PendingValue<V> = BoxFuture<'static, Result<V, StageError>>;

/// Runtime value bound to one argument of the current call.
pub enum ArgumentValue<V> {
    /// No value was supplied. Never transformed.
    Absent,
    Scalar(V),
    List(Vec<ListItem<V>>),
    Pending(PendingValue<V>),
}

impl<V> ArgumentValue<V> {
    /// Wraps an in-flight resolution, boxing the future.
    pub fn pending<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Result<V, StageError>> + Send + 'static,
    {
        ArgumentValue::Pending(Box::pin(future))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ArgumentValue::Absent)
    }

    pub fn as_scalar(&self) -> Option<&V> {
        match self {
            ArgumentValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ArgumentValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Absent => write!(f, "Absent"),
            ArgumentValue::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            ArgumentValue::List(items) => f.debug_tuple("List").field(items).finish(),
            ArgumentValue::Pending(_) => write!(f, "Pending(..)"),
        }
    }
}

/// One element of a list-valued argument. The lattice has no nested lists.
pub enum ListItem<V> {
    /// Skipped entirely during transformation.
    Absent,
    Value(V),
    Pending(PendingValue<V>),
}

impl<V> ListItem<V> {
    pub fn pending<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Result<V, StageError>> + Send + 'static,
    {
        ListItem::Pending(Box::pin(future))
    }
}

impl<V: fmt::Debug> fmt::Debug for ListItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Absent => write!(f, "Absent"),
            ListItem::Value(value) => f.debug_tuple("Value").field(value).finish(),
            ListItem::Pending(_) => write!(f, "Pending(..)"),
        }
    }
}

/// Full set of arguments for one call, keyed by unique argument name.
/// Insertion order is declaration order and survives reinjection.
pub type ArgumentSet<V> = IndexMap<String, ArgumentValue<V>>;

/// Replacement value produced for one matched argument; the shape mirrors
/// the input (scalar stays scalar, list stays list).
#[derive(Debug, PartialEq, Eq)]
pub enum TransformedValue<V> {
    Scalar(V),
    List(Vec<V>),
}

impl<V> TransformedValue<V> {
    /// Re-enters the argument-value lattice; all elements are concrete by
    /// construction.
    pub fn into_argument_value(self) -> ArgumentValue<V> {
        match self {
            TransformedValue::Scalar(value) => ArgumentValue::Scalar(value),
            TransformedValue::List(values) => {
                ArgumentValue::List(values.into_iter().map(ListItem::Value).collect())
            }
        }
    }
}

/// Named replacement handed to the reinjector.
#[derive(Debug, PartialEq, Eq)]
pub struct TransformedArgument<V> {
    pub name: String,
    pub value: TransformedValue<V>,
}

impl<V> TransformedArgument<V> {
    pub fn new(name: impl Into<String>, value: TransformedValue<V>) -> Self {
        TransformedArgument {
            name: name.into(),
            value,
        }
    }
}
