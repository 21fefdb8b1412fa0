//! Integration tests for reply formatting
//!
//! Covers the documented examples and the fixed-point behaviour of
//! `format_text` on text with nothing left to rewrite.

use healthchat::format::{format_text, render_html};

mod examples {
    use super::*;

    #[test]
    fn test_bold_then_smile() {
        assert_eq!(format_text("**hi** :)"), "<strong>hi</strong> 😊");
    }

    #[test]
    fn test_numbered_list_two_lines() {
        assert_eq!(format_text("1. a\n2. b"), "1. a<br>2. b");
    }

    #[test]
    fn test_backend_disease_reply() {
        let reply = "📋 **Malaria**\n\n🤒 **SYMPTOMS:**\n· Fever\n1) Rest";
        assert_eq!(
            format_text(reply),
            "📋 <strong>Malaria</strong><br><br>🤒 <strong>SYMPTOMS:</strong><br>• Fever<br>1. Rest"
        );
    }

    #[test]
    fn test_multiple_bold_on_one_line() {
        assert_eq!(
            format_text("**a** b **c** d **e**"),
            "<strong>a</strong> b <strong>c</strong> d <strong>e</strong>"
        );
    }

    #[test]
    fn test_empty_bold_pair() {
        assert_eq!(format_text("****"), "<strong></strong>");
    }
}

mod fixed_point {
    use super::*;

    const STABLE: &[&str] = &[
        "",
        "plain text",
        "Type help to see all diseases.",
        "⚠️ call 112 / 108",
        "rate is 3.5 per 1000",
        "a • b",
    ];

    #[test]
    fn test_stable_strings_unchanged() {
        for text in STABLE {
            assert_eq!(format_text(text), *text, "input: {text:?}");
        }
    }

    #[test]
    fn test_second_pass_is_noop_once_stable() {
        for text in ["**bold** text", "line one\nline two", "ok :)", "2) second"] {
            let once = format_text(text);
            assert_eq!(format_text(&once), once, "input: {text:?}");
        }
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_user_markup_is_escaped() {
        assert_eq!(
            render_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_formatting_survives_escaping() {
        assert_eq!(render_html("**a & b**\n:("), "<strong>a &amp; b</strong><br>😞");
    }
}
