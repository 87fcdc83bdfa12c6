//! Preset stage for binary-payload arguments.
//!
//! The transport layer resolves upload-typed argument values (usually still
//! pending while the multipart body streams in) to an [`UploadFile`]
//! descriptor; this preset targets the schema's upload scalar and hands each
//! descriptor to a caller-supplied reader.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::StageError;
use crate::schema::ArgumentDefinition;
use crate::stage::ArgumentStage;
use crate::transform::Transform;

/// Name of the scalar the upload preset targets.
pub const UPLOAD_TYPE_NAME: &str = "Upload";

/// Descriptor for one uploaded payload, as produced by the transport layer.
pub struct UploadFile {
    pub stream: Box<dyn AsyncRead + Send + Unpin>,
    pub filename: String,
    pub mimetype: String,
    pub encoding: String,
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("filename", &self.filename)
            .field("mimetype", &self.mimetype)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

/// Bridges engine values to upload descriptors and reads them into
/// application values.
#[async_trait]
pub trait UploadHandler<V>: Send + Sync {
    /// Projects the raw argument value into an upload descriptor. Fails with
    /// [`StageError::InvalidUpload`] when the value does not carry one.
    fn open(&self, value: V) -> Result<UploadFile, StageError>;

    /// Consumes the descriptor and produces the decoded application value.
    async fn read(&self, upload: UploadFile) -> Result<V, StageError>;
}

struct UploadTransform<V> {
    handler: Arc<dyn UploadHandler<V>>,
}

#[async_trait]
impl<V> Transform<V> for UploadTransform<V>
where
    V: Send + 'static,
{
    async fn apply(&self, value: V, _argument: &ArgumentDefinition) -> Result<V, StageError> {
        let upload = self.handler.open(value)?;
        self.handler.read(upload).await
    }
}

/// Builds a stage fixed to the schema's upload scalar, with the transform
/// composing [`UploadHandler::open`] and [`UploadHandler::read`].
pub fn upload_stage<V>(handler: Arc<dyn UploadHandler<V>>) -> ArgumentStage<V>
where
    V: Send + 'static,
{
    ArgumentStage::new(UPLOAD_TYPE_NAME, Arc::new(UploadTransform { handler }))
}
