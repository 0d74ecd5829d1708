//! On-disk naming for uploaded attachments and rendered summary documents.
//!
//! Client-supplied names are never trusted: every name that reaches the
//! filesystem goes through `sanitize-filename` first, and attachment names
//! are additionally salted with a UUIDv7 so concurrent submissions can never
//! collide on a path. Both directories are append-only as a result.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fallback name component when a client-supplied file name sanitizes to
/// nothing at all.
const EMPTY_NAME_FALLBACK: &str = "file";

/// Fallback topic component when the submission topic sanitizes to empty.
const EMPTY_TOPIC_FALLBACK: &str = "order";

/// Derive the on-disk name for an uploaded file.
///
/// The result is `<uuid-v7>-<sanitized original name>`. UUIDv7 embeds a
/// millisecond timestamp plus random bits, which keeps directory listings
/// roughly chronological and makes collisions between concurrent uploads
/// practically impossible without any locking.
pub fn storage_name(original_name: &str) -> String {
    let mut clean = sanitize_filename::sanitize(original_name);
    if clean.is_empty() {
        clean = EMPTY_NAME_FALLBACK.to_string();
    }
    format!("{}-{}", Uuid::now_v7(), clean)
}

/// Derive the file name of a rendered summary document from its topic and
/// creation time: `<sanitized topic>_<unix millis>.pdf`.
///
/// Whitespace runs in the topic collapse to a single underscore; a topic that
/// sanitizes to empty falls back to `order`.
pub fn document_name(topic: &str, created_at: DateTime<Utc>) -> String {
    let clean = sanitize_filename::sanitize(topic);
    let mut safe_topic = clean.split_whitespace().collect::<Vec<_>>().join("_");
    if safe_topic.is_empty() {
        safe_topic = EMPTY_TOPIC_FALLBACK.to_string();
    }
    format!("{}_{}.pdf", safe_topic, created_at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn storage_name_keeps_the_original_component() {
        let name = storage_name("notes.txt");
        assert!(name.ends_with("-notes.txt"));
    }

    #[test]
    fn storage_name_is_unique_across_calls() {
        assert_ne!(storage_name("a.png"), storage_name("a.png"));
    }

    #[test]
    fn storage_name_strips_path_separators() {
        let name = storage_name("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn storage_name_falls_back_when_sanitized_away() {
        let name = storage_name("///");
        assert!(name.ends_with("-file"));
    }

    #[test]
    fn document_name_joins_topic_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            document_name("Math Essay", at),
            format!("Math_Essay_{}.pdf", at.timestamp_millis())
        );
    }

    #[test]
    fn document_name_collapses_whitespace_runs() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let name = document_name("  spaced   out  topic ", at);
        assert!(name.starts_with("spaced_out_topic_"));
    }

    #[test]
    fn document_name_defaults_empty_topic() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert!(document_name("", at).starts_with("order_"));
        assert!(document_name("///", at).starts_with("order_"));
    }
}
