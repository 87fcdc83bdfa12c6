//! The composed middleware entry point.

use std::future::Future;
use std::mem;
use std::sync::Arc;

use futures::future::join_all;

use crate::error::StageError;
use crate::matcher::find_matching_arguments;
use crate::reinject::reinject;
use crate::schema::{FieldInfo, TargetType};
use crate::transform::{transform_fn, transform_value, Transform};
use crate::value::{ArgumentSet, ArgumentValue, TransformedArgument};

/// Middleware stage that rewrites arguments of one named type before the
/// downstream resolver runs.
///
/// A stage is constructed once (target type plus transform capability) and
/// driven by the engine once per field resolution via [`ArgumentStage::run`].
/// The continuation handed to `run` has the same shape as `run` itself, so
/// stages chain indefinitely.
pub struct ArgumentStage<V> {
    target: TargetType,
    transform: Arc<dyn Transform<V>>,
}

impl<V> ArgumentStage<V>
where
    V: Send + 'static,
{
    pub fn new(target: impl Into<TargetType>, transform: Arc<dyn Transform<V>>) -> Self {
        ArgumentStage {
            target: target.into(),
            transform,
        }
    }

    /// Convenience constructor for transforms that are plain async closures
    /// over the leaf value.
    pub fn from_fn<F, Fut>(target: impl Into<TargetType>, f: F) -> Self
    where
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, StageError>> + Send + 'static,
    {
        ArgumentStage::new(target, Arc::new(transform_fn(f)))
    }

    pub fn target(&self) -> &TargetType {
        &self.target
    }

    /// Runs the stage for one field resolution.
    ///
    /// Scans the field's declared arguments for the target type; with no
    /// match the continuation is invoked immediately with the untouched set
    /// and its result returned unchanged. Otherwise each matched argument is
    /// transformed concurrently, arguments whose transform produced no
    /// replacement are discarded, the results are reinjected, and the
    /// continuation receives the new set.
    ///
    /// The first transform failure (in declaration order) fails the call;
    /// the continuation is not invoked. Remaining transforms still run to
    /// completion before the failure is reported, their results discarded.
    pub async fn run<'a, P, C, R, F, Fut>(
        &self,
        next: F,
        parent: P,
        args: ArgumentSet<V>,
        ctx: C,
        info: &'a FieldInfo,
    ) -> Result<R, StageError>
    where
        F: FnOnce(P, ArgumentSet<V>, C, &'a FieldInfo) -> Fut,
        Fut: Future<Output = Result<R, StageError>>,
    {
        let matched = find_matching_arguments(&self.target, &info.arguments);
        if matched.is_empty() {
            return next(parent, args, ctx, info).await;
        }

        tracing::debug!(
            parent = %info.parent_type,
            field = %info.field_name,
            target_type = %self.target.named_type(),
            matched = matched.len(),
            "transforming field arguments"
        );

        let mut args = args;
        let transform = self.transform.as_ref();
        let mut tasks = Vec::with_capacity(matched.len());
        for definition in matched {
            // A matched definition whose name is not a key of the set is
            // treated as absent: no replacement, no inserted key.
            let value = match args.get_mut(&definition.name) {
                Some(slot) => mem::replace(slot, ArgumentValue::Absent),
                None => ArgumentValue::Absent,
            };
            tasks.push(async move {
                let transformed = transform_value(value, definition, transform).await?;
                Ok::<_, StageError>((definition, transformed))
            });
        }

        let mut results = Vec::new();
        for outcome in join_all(tasks).await {
            let (definition, transformed) = outcome?;
            if let Some(value) = transformed {
                tracing::trace!(argument = %definition.name, "argument transformed");
                results.push(TransformedArgument::new(definition.name.clone(), value));
            }
        }

        let args = reinject(args, results);
        next(parent, args, ctx, info).await
    }
}
