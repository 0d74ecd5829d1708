use crate::domain::order::entity::StoredAttachment;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Write one uploaded file under a sanitized, uniqueness-salted name.
    /// Resolves only once the bytes have been flushed to disk.
    async fn store(&self, original_name: &str, data: Bytes) -> anyhow::Result<StoredAttachment>;

    /// Public request path the stored file is served under.
    fn public_path(&self, stored_name: &str) -> String;
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a rendered summary document. Resolves only once the underlying
    /// write has been flushed to disk; the caller must not hand out a
    /// reference to the document before that.
    async fn persist(&self, file_name: &str, data: Vec<u8>) -> anyhow::Result<()>;

    /// Public request path the document is served under.
    fn public_path(&self, file_name: &str) -> String;
}
