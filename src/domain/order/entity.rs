use serde::{Deserialize, Serialize};

/// Maximum number of file attachments accepted per submission.
pub const MAX_ATTACHMENTS: usize = 10;

/// Maximum size of a single attachment in bytes (10 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;

/// Core domain entity representing one order submission.
///
/// A submission carries the free-text fields a client fills in on the order
/// form. It exists only for the duration of request handling: the service
/// never stores it as a structured record, only the summary document rendered
/// from it and the attachment files written alongside.
///
/// # Invariants
/// - Every field is optional on the wire; an absent field becomes an empty
///   string rather than a distinct "missing" state.
/// - At most [`MAX_ATTACHMENTS`] files accompany a submission, each at most
///   [`MAX_ATTACHMENT_BYTES`] bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSubmission {
    /// Requested service (e.g. essay, presentation)
    pub service: String,

    /// Requested page or slide count, free text
    pub pages: String,

    /// Language the work should be delivered in
    pub language: String,

    /// Topic of the order; also seeds the summary document's file name
    pub topic: String,

    /// Free-text details block, no length limit enforced
    pub details: String,

    /// Client contact phone number
    pub phone: String,
}

/// An uploaded file after it has been written to the upload area.
///
/// `stored_name` is the sanitized, uniqueness-salted name the file lives
/// under on disk; it is always distinct from the client-supplied
/// `original_name`. Once written the file is owned by the filesystem and the
/// service holds no further reference after the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAttachment {
    /// File name as supplied by the client
    pub original_name: String,

    /// Sanitized, salted name the file is stored and served under
    pub stored_name: String,

    /// Size of the stored file in bytes
    pub size: u64,
}
