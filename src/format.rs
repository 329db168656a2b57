//! Pure text helpers shared by the chat and upload views.

use chrono::Local;

/// One renderable piece of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    Emphasis(String),
    Code(String),
    LineBreak,
}

/// Split chat text into renderable segments.
///
/// Supported markup: `**bold**`, `*emphasis*`, `` `code` `` and literal
/// line breaks. Unterminated delimiters stay in the text as-is. The
/// output is typed segments rather than markup, so message content can
/// never smuggle HTML into the page.
pub fn format_message(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        format_line(line, &mut segments);
    }
    segments
}

fn format_line(line: &str, out: &mut Vec<Segment>) {
    let mut plain = String::new();
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                flush(&mut plain, out);
                out.push(Segment::Bold(after[..end].to_string()));
                rest = &after[end + 2..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*') {
                flush(&mut plain, out);
                out.push(Segment::Emphasis(after[..end].to_string()));
                rest = &after[end + 1..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix('`') {
            if let Some(end) = after.find('`') {
                flush(&mut plain, out);
                out.push(Segment::Code(after[..end].to_string()));
                rest = &after[end + 1..];
                continue;
            }
        }

        plain.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut plain, out);
}

fn flush(plain: &mut String, out: &mut Vec<Segment>) {
    if !plain.is_empty() {
        out.push(Segment::Text(std::mem::take(plain)));
    }
}

/// File size in mebibytes with two decimals, e.g. "2.50 MB".
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Trimmed question text, or `None` when there is nothing to send.
pub fn normalize_question(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Local wall-clock timestamp shown on chat bubbles.
pub fn message_timestamp() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::*;

    fn text(s: &str) -> Segment {
        Text(s.to_string())
    }

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(format_message("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn line_breaks_become_segments() {
        assert_eq!(
            format_message("first\nsecond"),
            vec![text("first"), LineBreak, text("second")]
        );
    }

    #[test]
    fn bold_emphasis_and_code_spans() {
        assert_eq!(
            format_message("a **b** *c* `d`"),
            vec![
                text("a "),
                Bold("b".to_string()),
                text(" "),
                Emphasis("c".to_string()),
                text(" "),
                Code("d".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        assert_eq!(format_message("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(format_message("`half open"), vec![text("`half open")]);
    }

    #[test]
    fn markup_significant_characters_are_kept_as_text() {
        assert_eq!(
            format_message("<script>alert(1)</script>"),
            vec![text("<script>alert(1)</script>")]
        );
    }

    #[test]
    fn empty_message_yields_no_segments() {
        assert_eq!(format_message(""), Vec::<Segment>::new());
    }

    #[test]
    fn file_size_uses_two_decimals() {
        assert_eq!(format_file_size(2.5 * 1024.0 * 1024.0), "2.50 MB");
        assert_eq!(format_file_size(0.0), "0.00 MB");
    }

    #[test]
    fn questions_are_trimmed() {
        assert_eq!(
            normalize_question("  What is the total?  ").as_deref(),
            Some("What is the total?")
        );
        assert_eq!(normalize_question("   "), None);
        assert_eq!(normalize_question(""), None);
    }
}
