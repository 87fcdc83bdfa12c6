//! Typed-argument transform middleware for async resolver pipelines.
//!
//! Given a field resolution carrying named, typed arguments, an
//! [`ArgumentStage`] finds every argument whose declared type matches its
//! target type, applies an asynchronous [`Transform`] to each matching value
//! (scalar, list, or still pending), and hands the rewritten argument set to
//! the next stage in the pipeline. Arguments of other types pass through
//! untouched, and a field with no matching arguments costs a single scan.
//!
//! The [`upload`] module ships the common specialization: rewriting
//! upload-scalar arguments by reading their streamed payloads.

pub mod error;
pub mod matcher;
pub mod reinject;
pub mod schema;
pub mod stage;
pub mod transform;
pub mod upload;
pub mod value;

pub use error::StageError;
pub use matcher::{find_matching_arguments, matches};
pub use reinject::reinject;
pub use schema::{ArgumentDefinition, FieldInfo, FieldType, TargetType};
pub use stage::ArgumentStage;
pub use transform::{transform_fn, transform_value, FnTransform, Transform};
pub use upload::{upload_stage, UploadFile, UploadHandler, UPLOAD_TYPE_NAME};
pub use value::{
    ArgumentSet, ArgumentValue, ListItem, PendingValue, TransformedArgument, TransformedValue,
};

/// Current crate version string exposed for tests and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, StageError>;
