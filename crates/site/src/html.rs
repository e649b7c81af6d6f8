//! HTML emission for rendered article bodies.
//!
//! Maps each paragraph to a `<p>` block and each span's style tag to its
//! emphasis element. Span text is HTML-escaped; the markup dialect carries
//! no HTML of its own, so escaping is unconditional.

use ananta_core::{Paragraph, SpanStyle};

/// Emits `<p>` blocks for a rendered article body.
pub fn paragraphs_to_html(paragraphs: &[Paragraph]) -> String {
    let mut out = String::new();
    for paragraph in paragraphs {
        out.push_str("<p>");
        for span in &paragraph.spans {
            let tag = match span.style {
                SpanStyle::Plain => None,
                SpanStyle::Bold => Some("strong"),
                SpanStyle::Italic => Some("em"),
            };
            if let Some(tag) = tag {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            html_escape::encode_text_to_string(&span.text, &mut out);
            if let Some(tag) = tag {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        out.push_str("</p>");
    }
    out
}
