use std::io::Cursor;
use std::sync::Arc;

use argstage::{
    upload_stage, ArgumentDefinition, ArgumentSet, ArgumentValue, FieldInfo, FieldType, ListItem,
    StageError, UploadFile, UploadHandler, UPLOAD_TYPE_NAME,
};
use async_trait::async_trait;
use tokio::io::AsyncReadExt;

/// Stand-in for an engine's runtime value in upload-bearing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileValue {
    Raw {
        filename: String,
        mimetype: String,
        encoding: String,
        content: Vec<u8>,
    },
    Decoded {
        filename: String,
        text: String,
    },
    Text(String),
}

fn raw(filename: &str, content: &str) -> FileValue {
    FileValue::Raw {
        filename: filename.to_string(),
        mimetype: "text/plain".to_string(),
        encoding: "7bit".to_string(),
        content: content.as_bytes().to_vec(),
    }
}

struct MemoryUploadHandler;

#[async_trait]
impl UploadHandler<FileValue> for MemoryUploadHandler {
    fn open(&self, value: FileValue) -> Result<UploadFile, StageError> {
        match value {
            FileValue::Raw {
                filename,
                mimetype,
                encoding,
                content,
            } => Ok(UploadFile {
                stream: Box::new(Cursor::new(content)),
                filename,
                mimetype,
                encoding,
            }),
            other => Err(StageError::invalid_upload(format!(
                "expected a raw upload, got {other:?}"
            ))),
        }
    }

    async fn read(&self, mut upload: UploadFile) -> Result<FileValue, StageError> {
        let mut content = Vec::new();
        upload
            .stream
            .read_to_end(&mut content)
            .await
            .map_err(StageError::transform)?;
        Ok(FileValue::Decoded {
            filename: upload.filename,
            text: String::from_utf8_lossy(&content).into_owned(),
        })
    }
}

fn upload_field(arguments: Vec<ArgumentDefinition>) -> FieldInfo {
    FieldInfo::new("Mutation", "uploadFiles", arguments)
}

#[tokio::test]
async fn pending_upload_is_read_and_reinjected() {
    let stage = upload_stage(Arc::new(MemoryUploadHandler));
    let info = upload_field(vec![
        ArgumentDefinition::new(
            "file",
            FieldType::required(FieldType::named(UPLOAD_TYPE_NAME)),
        ),
        ArgumentDefinition::new("description", FieldType::named("String")),
    ]);

    let mut args: ArgumentSet<FileValue> = ArgumentSet::new();
    args.insert(
        "file".into(),
        ArgumentValue::pending(async { Ok(raw("notes.txt", "hello upload")) }),
    );
    args.insert(
        "description".into(),
        ArgumentValue::Scalar(FileValue::Text("my notes".into())),
    );

    stage
        .run(
            |_parent: (), args, _ctx: (), _info| async move {
                assert_eq!(
                    args["file"].as_scalar(),
                    Some(&FileValue::Decoded {
                        filename: "notes.txt".into(),
                        text: "hello upload".into(),
                    })
                );
                // Non-upload arguments are untouched.
                assert_eq!(
                    args["description"].as_scalar(),
                    Some(&FileValue::Text("my notes".into()))
                );
                Ok(FileValue::Text("done".into()))
            },
            (),
            args,
            (),
            &info,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn upload_list_keeps_order_and_drops_absent_entries() {
    let stage = upload_stage(Arc::new(MemoryUploadHandler));
    let info = upload_field(vec![ArgumentDefinition::new(
        "files",
        FieldType::list(FieldType::required(FieldType::named(UPLOAD_TYPE_NAME))),
    )]);

    let mut args: ArgumentSet<FileValue> = ArgumentSet::new();
    args.insert(
        "files".into(),
        ArgumentValue::List(vec![
            ListItem::pending(async { Ok(raw("a.txt", "alpha")) }),
            ListItem::Absent,
            ListItem::Value(raw("b.txt", "beta")),
        ]),
    );

    stage
        .run(
            |_parent: (), args, _ctx: (), _info| async move {
                match &args["files"] {
                    ArgumentValue::List(items) => {
                        assert_eq!(items.len(), 2);
                        let names: Vec<_> = items
                            .iter()
                            .map(|item| match item {
                                ListItem::Value(FileValue::Decoded { filename, .. }) => {
                                    filename.clone()
                                }
                                other => panic!("expected decoded file, got {other:?}"),
                            })
                            .collect();
                        assert_eq!(names, vec!["a.txt", "b.txt"]);
                    }
                    other => panic!("expected list, got {other:?}"),
                }
                Ok(FileValue::Text("done".into()))
            },
            (),
            args,
            (),
            &info,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn non_upload_value_in_an_upload_slot_fails_the_call() {
    let stage = upload_stage(Arc::new(MemoryUploadHandler));
    let info = upload_field(vec![ArgumentDefinition::new(
        "file",
        FieldType::named(UPLOAD_TYPE_NAME),
    )]);

    let mut args: ArgumentSet<FileValue> = ArgumentSet::new();
    args.insert(
        "file".into(),
        ArgumentValue::Scalar(FileValue::Text("not a file".into())),
    );

    let err = stage
        .run(
            |_parent: (), _args, _ctx: (), _info| async move { Ok(FileValue::Text("done".into())) },
            (),
            args,
            (),
            &info,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StageError::InvalidUpload(_)), "got {err:?}");
}
