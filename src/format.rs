//! Text transforms applied when rendering chat messages.

use once_cell::sync::Lazy;
use regex::Regex;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

// Line terminators follow the browser's regex engine: `.` never crosses one
// and a multi-line `^` matches after any of them.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("valid bold pattern")
});
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[•·][\s\x{FEFF}]").expect("valid bullet pattern"));
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A([0-9]+)[.)][\s\x{FEFF}]").expect("valid numbered pattern"));

const SMILE: &str = "😊";
const FROWN: &str = "😞";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Convert reply text into display markup.
///
/// Passes run in a fixed order: `**bold**`, line-start bullets, line-start
/// numbered markers, newlines to `<br>`, then `:)` / `:(` emoticons. The list
/// passes are line-anchored, so they must run before newlines disappear.
pub fn format_text(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = replace_at_line_starts(&text, &BULLET, "• ");
    let text = replace_at_line_starts(&text, &NUMBERED, "$1. ");
    text.replace('\n', "<br>")
        .replace(":)", SMILE)
        .replace(":(", FROWN)
}

/// Apply a `\A`-anchored pattern at every line start, scanning left to right
/// without overlapping earlier replacements.
fn replace_at_line_starts(text: &str, pattern: &Regex, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut at_line_start = true;
    for (i, ch) in text.char_indices() {
        if at_line_start && i >= copied {
            if let Some(caps) = pattern.captures(&text[i..]) {
                out.push_str(&text[copied..i]);
                caps.expand(replacement, &mut out);
                copied = i + caps.get(0).map_or(0, |m| m.end());
            }
        }
        at_line_start = LINE_TERMINATORS.contains(&ch);
    }
    out.push_str(&text[copied..]);
    out
}

/// Escape characters that would otherwise be parsed as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Markup for a message body: escaped first, then formatted.
pub fn render_html(text: &str) -> String {
    format_text(&escape_html(text))
}

pub fn format_time_of_day(datetime: OffsetDateTime) -> String {
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

pub fn current_time_of_day() -> String {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    format_time_of_day(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            format_text("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(format_text("**a\nb**"), "**a<br>b**");
    }

    #[test]
    fn test_unpaired_bold_left_alone() {
        assert_eq!(format_text("5 ** 2"), "5 ** 2");
    }

    #[test]
    fn test_bullets_normalized() {
        assert_eq!(format_text("·\tone\n• two"), "• one<br>• two");
    }

    #[test]
    fn test_bullet_mid_line_untouched() {
        assert_eq!(format_text("a · b"), "a · b");
    }

    #[test]
    fn test_numbered_paren_marker() {
        assert_eq!(format_text("1) first\n10. tenth"), "1. first<br>10. tenth");
    }

    #[test]
    fn test_numbered_requires_whitespace() {
        assert_eq!(format_text("3.14 is pi"), "3.14 is pi");
    }

    #[test]
    fn test_numbered_ascii_digits_only() {
        assert_eq!(format_text("\u{0663}) x"), "\u{0663}) x");
        assert_eq!(format_text("\u{0663}. x"), "\u{0663}. x");
    }

    #[test]
    fn test_bold_does_not_span_carriage_return() {
        assert_eq!(format_text("**a\rb**"), "**a\rb**");
        assert_eq!(format_text("**a\u{2028}b**"), "**a\u{2028}b**");
    }

    #[test]
    fn test_list_markers_after_carriage_return() {
        assert_eq!(format_text("x\r· a\r2) b"), "x\r• a\r2. b");
        assert_eq!(format_text("x\r\n3) c"), "x\r<br>3. c");
    }

    #[test]
    fn test_bullet_whitespace_may_be_line_break() {
        assert_eq!(format_text("·\n·\nz"), "• • z");
    }

    #[test]
    fn test_emoticons() {
        assert_eq!(format_text("ok :) no :("), "ok 😊 no 😞");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(render_html("<i>**x**</i>"), "&lt;i&gt;<strong>x</strong>&lt;/i&gt;");
    }

    #[test]
    fn test_time_of_day_format() {
        assert_eq!(format_time_of_day(datetime!(2024-03-01 14:05 UTC)), "02:05 PM");
        assert_eq!(format_time_of_day(datetime!(2024-03-01 00:30 UTC)), "12:30 AM");
    }
}
