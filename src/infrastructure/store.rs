use std::{
    io,
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::StoredObjectRef;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object {0} does not exist")]
    NotFound(String),
    #[error("object key `{0}` is not a valid relative path")]
    InvalidKey(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn fetch(&self, object: &StoredObjectRef) -> Result<Vec<u8>, StoreError>;
}

/// Reads objects from `<root>/<container>/<key>`.
#[derive(Debug, Clone)]
pub struct FsMessageStore {
    root: PathBuf,
}

impl FsMessageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, object: &StoredObjectRef) -> Result<PathBuf, StoreError> {
        ensure_relative(&object.container)?;
        ensure_relative(&object.key)?;
        Ok(self.root.join(&object.container).join(&object.key))
    }
}

fn ensure_relative(segment: &str) -> Result<(), StoreError> {
    let path = Path::new(segment);
    let valid = !segment.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(segment.to_string()))
    }
}

#[async_trait]
impl MessageStore for FsMessageStore {
    async fn fetch(&self, object: &StoredObjectRef) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(object)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(
                    target: "store",
                    path = %path.display(),
                    bytes = bytes.len(),
                    "object read"
                );
                Ok(bytes)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(object.to_string()))
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(container: &str, key: &str) -> StoredObjectRef {
        StoredObjectRef {
            container: container.to_string(),
            key: key.to_string(),
        }
    }

    #[tokio::test]
    async fn reads_object_under_container() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("inbox/2024")).unwrap();
        std::fs::write(dir.path().join("inbox/2024/msg-1"), b"raw bytes").unwrap();

        let store = FsMessageStore::new(dir.path());
        let bytes = store.fetch(&object("inbox", "2024/msg-1")).await.unwrap();
        assert_eq!(bytes, b"raw bytes");
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMessageStore::new(dir.path());
        let err = store.fetch(&object("inbox", "nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(name) if name == "inbox/nope"));
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMessageStore::new(dir.path());
        for (container, key) in [
            ("inbox", "../secret"),
            ("..", "secret"),
            ("inbox", "/etc/passwd"),
            ("inbox", ""),
        ] {
            let err = store.fetch(&object(container, key)).await.unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey(_)), "{container}/{key}");
        }
    }
}
