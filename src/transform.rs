//! Applies a transform capability to every concrete leaf of an argument
//! value, preserving its shape.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{join_all, Either};

use crate::error::StageError;
use crate::schema::ArgumentDefinition;
use crate::value::{ArgumentValue, ListItem, TransformedValue};

/// Asynchronous capability applied to each concrete leaf of a matched
/// argument value.
///
/// The current argument definition is passed explicitly; transforms that
/// need engine state beyond it carry that state in their own fields.
#[async_trait]
pub trait Transform<V>: Send + Sync {
    async fn apply(&self, value: V, argument: &ArgumentDefinition) -> Result<V, StageError>;
}

/// Adapter turning a plain async closure into a [`Transform`] that ignores
/// the argument definition.
pub struct FnTransform<F> {
    inner: F,
}

pub fn transform_fn<F>(f: F) -> FnTransform<F> {
    FnTransform { inner: f }
}

#[async_trait]
impl<V, F, Fut> Transform<V> for FnTransform<F>
where
    V: Send + 'static,
    F: Fn(V) -> Fut + Send + Sync,
    Fut: Future<Output = Result<V, StageError>> + Send,
{
    async fn apply(&self, value: V, _argument: &ArgumentDefinition) -> Result<V, StageError> {
        (self.inner)(value).await
    }
}

/// Transforms one argument value, leaf by leaf.
///
/// Case analysis:
/// - `Absent` yields `Ok(None)`: the argument is excluded from the result
///   set entirely and its original entry passes through untouched. `None` is
///   reserved for absent inputs; a transform that wants to produce a
///   null-like result for a present value must encode that inside `V`.
/// - `List` skips absent elements, awaits pending ones, then applies the
///   transform to each; element futures run concurrently and the output
///   keeps the original relative order of non-absent elements. An empty or
///   all-absent list yields an empty list, not `None`.
/// - `Pending` is awaited, then transformed once.
/// - `Scalar` is transformed directly.
///
/// Transform and pending-resolution failures propagate unchanged; every
/// in-flight element still runs to completion before the first failure (in
/// element order) is reported.
pub async fn transform_value<V>(
    value: ArgumentValue<V>,
    argument: &ArgumentDefinition,
    transform: &dyn Transform<V>,
) -> Result<Option<TransformedValue<V>>, StageError>
where
    V: Send + 'static,
{
    match value {
        ArgumentValue::Absent => Ok(None),
        ArgumentValue::Scalar(value) => {
            let transformed = transform.apply(value, argument).await?;
            Ok(Some(TransformedValue::Scalar(transformed)))
        }
        ArgumentValue::Pending(future) => {
            let value = future.await?;
            let transformed = transform.apply(value, argument).await?;
            Ok(Some(TransformedValue::Scalar(transformed)))
        }
        ArgumentValue::List(items) => {
            let futures: Vec<_> = items
                .into_iter()
                .filter_map(|item| match item {
                    ListItem::Absent => None,
                    ListItem::Value(value) => Some(Either::Left(transform.apply(value, argument))),
                    ListItem::Pending(future) => Some(Either::Right(async move {
                        let value = future.await?;
                        transform.apply(value, argument).await
                    })),
                })
                .collect();
            let mut transformed = Vec::with_capacity(futures.len());
            for result in join_all(futures).await {
                transformed.push(result?);
            }
            Ok(Some(TransformedValue::List(transformed)))
        }
    }
}
