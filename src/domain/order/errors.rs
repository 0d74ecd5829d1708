use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("a submission may include at most {limit} files")]
    TooManyAttachments { limit: usize },
    #[error("file '{name}' exceeds the {limit} byte limit")]
    AttachmentTooLarge { name: String, limit: usize },
}
