use super::filename;
use super::traits::{AttachmentStore, DocumentStore};
use crate::domain::order::entity::StoredAttachment;
use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Write `data` to `path` and flush it to disk before returning.
///
/// `sync_all` is what turns "the write call returned" into "the bytes are
/// durable"; callers treat a successful return as permission to reference
/// the file.
async fn write_durably(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .await
        .with_context(|| format!("creating {}", path.display()))?;
    file.write_all(data)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    file.sync_all()
        .await
        .with_context(|| format!("syncing {}", path.display()))?;
    Ok(())
}

/// Attachment storage backed by a local directory served under `/files`.
pub struct LocalAttachmentStore {
    root: PathBuf,
}

impl LocalAttachmentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    async fn store(&self, original_name: &str, data: Bytes) -> anyhow::Result<StoredAttachment> {
        let stored_name = filename::storage_name(original_name);
        let path = self.root.join(&stored_name);
        write_durably(&path, &data).await?;
        Ok(StoredAttachment {
            original_name: original_name.to_string(),
            stored_name,
            size: data.len() as u64,
        })
    }

    fn public_path(&self, stored_name: &str) -> String {
        format!("/files/{}", stored_name)
    }
}

/// Summary document storage backed by a local directory served under `/pdfs`.
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn persist(&self, file_name: &str, data: Vec<u8>) -> anyhow::Result<()> {
        let path = self.root.join(file_name);
        write_durably(&path, &data).await
    }

    fn public_path(&self, file_name: &str) -> String {
        format!("/pdfs/{}", file_name)
    }
}
