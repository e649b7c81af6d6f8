//! Inline markup rendering for article bodies.
//!
//! The dialect is deliberately tiny: `**bold**`, `*italic*`, and blank-line
//! paragraph breaks. There is no nesting and no escaping; any `*` that does
//! not pair up flows through as literal text, so rendering is total over
//! all string inputs.

use serde::Serialize;

/// Emphasis applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStyle {
    /// Unstyled text.
    Plain,
    /// Bold emphasis, written `**like this**`.
    Bold,
    /// Italic emphasis, written `*like this*`.
    Italic,
}

/// A styled run of literal text within a paragraph.
///
/// The text never contains the delimiter markers themselves; concatenating
/// a paragraph's spans reproduces its visible text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Emphasis tag for this run.
    pub style: SpanStyle,
    /// Visible text of the run.
    pub text: String,
}

impl Span {
    /// Creates a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: SpanStyle::Plain,
            text: text.into(),
        }
    }

    /// Creates a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            style: SpanStyle::Bold,
            text: text.into(),
        }
    }

    /// Creates an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            style: SpanStyle::Italic,
            text: text.into(),
        }
    }
}

/// An ordered sequence of spans, delimited from its siblings by a blank
/// line in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Paragraph {
    /// Styled runs in document order.
    pub spans: Vec<Span>,
}

impl Paragraph {
    /// Concatenated visible text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Renders article text into paragraphs of styled spans.
///
/// The text is split on every `"\n\n"`; each piece (including empty ones)
/// becomes one paragraph in document order, so the empty input yields a
/// single paragraph with no spans.
pub fn render(text: &str) -> Vec<Paragraph> {
    text.split("\n\n").map(render_paragraph).collect()
}

fn render_paragraph(para: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut rest = para;

    while !rest.is_empty() {
        let Some(delim) = next_delimiter(rest) else {
            spans.push(Span::plain(rest));
            break;
        };
        if delim.start > 0 {
            spans.push(Span::plain(&rest[..delim.start]));
        }
        spans.push(Span {
            style: delim.style,
            text: rest[delim.content_start..delim.content_end].to_string(),
        });
        rest = &rest[delim.resume..];
    }

    Paragraph { spans }
}

/// A matched delimiter pair, positioned in bytes within the scanned text.
///
/// All offsets fall on char boundaries: the markers are ASCII, and every
/// offset is adjacent to a marker byte.
struct Delim {
    start: usize,
    content_start: usize,
    content_end: usize,
    resume: usize,
    style: SpanStyle,
}

/// Finds the earliest delimiter pair in `text`.
///
/// Earliest start position wins; bold wins over italic only when both
/// start at the same position, so `**x**` is never read as italic `*x*`.
fn next_delimiter(text: &str) -> Option<Delim> {
    let bold = find_delim(text, "**", SpanStyle::Bold);
    let italic = find_delim(text, "*", SpanStyle::Italic);

    match (bold, italic) {
        (Some(b), Some(i)) => Some(if b.start <= i.start { b } else { i }),
        (bold, italic) => bold.or(italic),
    }
}

/// Finds the earliest pair of `marker` runs enclosing at least one
/// character, taking the shortest close for a given opener.
///
/// Enclosed text never crosses a line break: an opener whose line holds no
/// closer stays literal, and the scan moves on to later openers.
fn find_delim(text: &str, marker: &str, style: SpanStyle) -> Option<Delim> {
    let mut from = 0;
    while let Some(rel) = text.get(from..)?.find(marker) {
        let start = from + rel;
        let content_start = start + marker.len();
        let limit = line_end(text, content_start);

        // Shortest non-empty enclosure: skip a closer that would leave
        // zero enclosed characters and take the next one on the line.
        let close = match find_within(text, marker, content_start, limit) {
            Some(at) if at == content_start => {
                find_within(text, marker, content_start + 1, limit)
            }
            other => other,
        };

        if let Some(close) = close {
            return Some(Delim {
                start,
                content_start,
                content_end: close,
                resume: close + marker.len(),
                style,
            });
        }

        from = start + 1;
    }
    None
}

fn find_within(text: &str, marker: &str, from: usize, limit: usize) -> Option<usize> {
    if from > limit {
        return None;
    }
    text.get(from..limit)?.find(marker).map(|rel| from + rel)
}

fn line_end(text: &str, from: usize) -> usize {
    match text.get(from..).and_then(|rest| rest.find('\n')) {
        Some(rel) => from + rel,
        None => text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(text: &str) -> Vec<Span> {
        let paragraphs = render(text);
        assert_eq!(paragraphs.len(), 1, "expected a single paragraph");
        paragraphs.into_iter().next().unwrap().spans
    }

    #[test]
    fn empty_input_yields_one_empty_paragraph() {
        let paragraphs = render("");
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].spans.is_empty());
        assert_eq!(paragraphs[0].text(), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render_one("plain text"), vec![Span::plain("plain text")]);
    }

    #[test]
    fn bold_only() {
        assert_eq!(render_one("**bold**"), vec![Span::bold("bold")]);
    }

    #[test]
    fn italic_only() {
        assert_eq!(render_one("*italic*"), vec![Span::italic("italic")]);
    }

    #[test]
    fn mixed_inline_sequence() {
        assert_eq!(
            render_one("a **b** c *d* e"),
            vec![
                Span::plain("a "),
                Span::bold("b"),
                Span::plain(" c "),
                Span::italic("d"),
                Span::plain(" e"),
            ]
        );
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        let paragraphs = render("first\n\nsecond");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].spans, vec![Span::plain("first")]);
        assert_eq!(paragraphs[1].spans, vec![Span::plain("second")]);
    }

    #[test]
    fn lone_asterisk_stays_literal() {
        assert_eq!(render_one("a * b"), vec![Span::plain("a * b")]);
    }

    #[test]
    fn bold_wins_tie_at_same_start() {
        // `**x**` must never be read as italic `*x*`.
        assert_eq!(render_one("**x** y"), vec![Span::bold("x"), Span::plain(" y")]);
    }

    #[test]
    fn earlier_italic_wins_over_later_bold() {
        // The italic opener at position 0 pairs with the bold opener's
        // first `*`, and the scan keeps finding italic runs afterwards.
        assert_eq!(
            render_one("*a **b** c*"),
            vec![Span::italic("a "), Span::italic("b"), Span::italic(" c")]
        );
    }

    #[test]
    fn triple_asterisks_read_as_bold_with_literal_star() {
        assert_eq!(
            render_one("***bold***"),
            vec![Span::bold("*bold"), Span::plain("*")]
        );
    }

    #[test]
    fn adjacent_markers_pair_as_italic_star() {
        // No bold pair leaves a non-empty enclosure here; the first and
        // third markers pair as an italic around the second.
        assert_eq!(
            render_one("****"),
            vec![Span::italic("*"), Span::plain("*")]
        );
    }

    #[test]
    fn unterminated_bold_degrades_to_plain() {
        assert_eq!(
            render_one("start **never closed"),
            vec![Span::plain("start **never closed")]
        );
    }

    #[test]
    fn emphasis_does_not_cross_line_breaks() {
        // A single newline stays inside the paragraph but blocks pairing.
        assert_eq!(render_one("*a\nb*"), vec![Span::plain("*a\nb*")]);
    }

    #[test]
    fn pairing_resumes_after_a_line_break() {
        // The opener before the newline never pairs; the marker after it
        // pairs with the next one, enclosing " y ".
        assert_eq!(
            render_one("*a\nb* y *c*"),
            vec![Span::plain("*a\nb"), Span::italic(" y "), Span::plain("c*")]
        );
    }

    #[test]
    fn unicode_content_is_preserved() {
        assert_eq!(
            render_one("La **respiración** es *lenta*."),
            vec![
                Span::plain("La "),
                Span::bold("respiración"),
                Span::plain(" es "),
                Span::italic("lenta"),
                Span::plain("."),
            ]
        );
    }

    #[test]
    fn nested_markup_is_not_rescanned() {
        // Bold content is a literal run; inner markers render as-is.
        assert_eq!(
            render_one("**a *b* c** d"),
            vec![Span::bold("a *b* c"), Span::plain(" d")]
        );
    }

    #[test]
    fn spans_serialize_with_style_tags() {
        let json = serde_json::to_string(&render_one("**b**")).unwrap();
        assert_eq!(json, r#"[{"style":"bold","text":"b"}]"#);
    }

    #[test]
    fn visible_text_is_lossless_across_paragraphs() {
        let input = "Una **práctica** diaria\n\ncon *calma* y atención\n\n";
        let paragraphs = render(input);
        let visible: Vec<String> = paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(visible.join("\n\n"), input.replace('*', ""));
    }
}
