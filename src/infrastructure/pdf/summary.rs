//! Server-side rendering of the one-page order summary PDF.
//!
//! The textual content is assembled separately from the page layout so the
//! summary's observable lines (field rows, the details block, the attachment
//! list) can be asserted on without parsing PDF bytes. Rendering uses the
//! builtin Helvetica fonts, so no font assets ship with the binary.

use crate::domain::order::entity::{OrderSubmission, StoredAttachment};
use printpdf::{BuiltinFont, Mm, PdfDocument};

/// Title line at the top of every summary document.
pub const DOCUMENT_TITLE: &str = "New Order from Bebo Designer X";

/// Marker line used when a submission has no attachments.
pub const NO_FILES_MARKER: &str = "No files attached";

/// Section headings rendered in the bold face.
const HEADINGS: [&str; 2] = ["Details:", "Attached files:"];

/// Column width for the free-text details block, in characters.
const DETAILS_WRAP_COLUMNS: usize = 90;

/// Assemble the body lines of the summary in render order.
///
/// Attachment lines follow `"{index}. {original name} -> /files/{stored name}"`
/// with a 1-based index; an empty attachment list yields the literal
/// [`NO_FILES_MARKER`] instead. Empty strings mark vertical gaps.
pub fn summary_lines(order: &OrderSubmission, attachments: &[StoredAttachment]) -> Vec<String> {
    let mut lines = vec![
        format!("Service: {}", order.service),
        format!("Pages/Slides: {}", order.pages),
        format!("Language: {}", order.language),
        format!("Topic: {}", order.topic),
        String::new(),
        "Details:".to_string(),
    ];
    lines.extend(wrap(&order.details, DETAILS_WRAP_COLUMNS));
    lines.push(String::new());
    lines.push(format!("Client Contact: {}", order.phone));
    lines.push(String::new());
    lines.push("Attached files:".to_string());
    if attachments.is_empty() {
        lines.push(NO_FILES_MARKER.to_string());
    } else {
        for (index, attachment) in attachments.iter().enumerate() {
            lines.push(format!(
                "{}. {} -> /files/{}",
                index + 1,
                attachment.original_name,
                attachment.stored_name
            ));
        }
    }
    lines
}

/// Render the summary as PDF bytes (A4 portrait, single page).
pub fn render_summary(
    order: &OrderSubmission,
    attachments: &[StoredAttachment],
) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) = PdfDocument::new(DOCUMENT_TITLE, Mm(210.0), Mm(297.0), "summary");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);

    // 14 mm margin, matching the original's 40 pt
    let mut cursor = 277.0;
    layer.use_text(DOCUMENT_TITLE, 18.0, Mm(14.0), Mm(cursor), &bold);
    cursor -= 12.0;

    for line in summary_lines(order, attachments) {
        if !line.is_empty() {
            let font = if HEADINGS.contains(&line.as_str()) {
                &bold
            } else {
                &regular
            };
            layer.use_text(line, 12.0, Mm(14.0), Mm(cursor), font);
        }
        cursor -= 6.0;
    }

    doc.save_to_bytes()
}

/// Greedy word wrap of the details block. Newlines in the input are kept;
/// words longer than the column width land on their own overlong line rather
/// than being split mid-word.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r');
        if raw.chars().count() <= columns {
            out.push(raw.to_string());
            continue;
        }
        let mut line = String::new();
        for word in raw.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > columns {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(original: &str, stored: &str) -> StoredAttachment {
        StoredAttachment {
            original_name: original.to_string(),
            stored_name: stored.to_string(),
            size: 1,
        }
    }

    #[test]
    fn lines_carry_every_form_field() {
        let order = OrderSubmission {
            service: "Essay".into(),
            pages: "5".into(),
            language: "English".into(),
            topic: "Math Essay".into(),
            details: "Please cite sources.".into(),
            phone: "+1 555 0100".into(),
        };
        let lines = summary_lines(&order, &[]);
        assert!(lines.contains(&"Service: Essay".to_string()));
        assert!(lines.contains(&"Pages/Slides: 5".to_string()));
        assert!(lines.contains(&"Language: English".to_string()));
        assert!(lines.contains(&"Topic: Math Essay".to_string()));
        assert!(lines.contains(&"Please cite sources.".to_string()));
        assert!(lines.contains(&"Client Contact: +1 555 0100".to_string()));
    }

    #[test]
    fn empty_attachment_list_uses_marker() {
        let lines = summary_lines(&OrderSubmission::default(), &[]);
        assert!(lines.contains(&NO_FILES_MARKER.to_string()));
    }

    #[test]
    fn attachment_lines_are_indexed_from_one() {
        let attachments = vec![
            attachment("a.png", "0191-a.png"),
            attachment("b.docx", "0192-b.docx"),
        ];
        let lines = summary_lines(&OrderSubmission::default(), &attachments);
        assert!(lines.contains(&"1. a.png -> /files/0191-a.png".to_string()));
        assert!(lines.contains(&"2. b.docx -> /files/0192-b.docx".to_string()));
        assert!(!lines.contains(&NO_FILES_MARKER.to_string()));
    }

    #[test]
    fn one_line_per_attachment() {
        for count in 0..=10 {
            let attachments: Vec<_> = (0..count)
                .map(|i| attachment(&format!("f{i}.txt"), &format!("s{i}.txt")))
                .collect();
            let lines = summary_lines(&OrderSubmission::default(), &attachments);
            let listed = lines.iter().filter(|l| l.contains(" -> /files/")).count();
            if count == 0 {
                assert!(lines.contains(&NO_FILES_MARKER.to_string()));
                assert_eq!(listed, 0);
            } else {
                assert_eq!(listed, count);
            }
        }
    }

    #[test]
    fn wrap_keeps_short_lines_and_newlines() {
        assert_eq!(wrap("one\ntwo", 90), vec!["one", "two"]);
        assert_eq!(wrap("", 90), vec![""]);
    }

    #[test]
    fn wrap_splits_long_lines_at_word_boundaries() {
        let text = "alpha beta gamma delta";
        let wrapped = wrap(text, 11);
        assert_eq!(wrapped, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn rendered_document_is_a_pdf() {
        let order = OrderSubmission {
            topic: "Math Essay".into(),
            ..Default::default()
        };
        let bytes = render_summary(&order, &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
