//! Best-effort markdown to HTML for displaying model output.
//!
//! A fixed chain of regex substitutions, not a parser. The order matters:
//! bold must run before italic so `**` pairs are not eaten as two `*`, and
//! `# ` must run after `## ` and `### ` since it would match their tails.
//! Nested emphasis and malformed input render however the chain leaves them.
//! All rules run in CRLF mode so `.` and `$` stop at `\r` as well as `\n`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::html;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).unwrap(),
        replacement,
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(r"(?R)\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        rule(r"(?R)\*(.*?)\*", "<em>${1}</em>"),
        rule(r"(?R)`(.*?)`", "<code>${1}</code>"),
        rule(r"(?Rm)^### (.*)$", "<h3>${1}</h3>"),
        rule(r"(?Rm)^## (.*)$", "<h2>${1}</h2>"),
        rule(r"(?Rm)^# (.*)$", "<h1>${1}</h1>"),
        rule(r"(?Rm)^- (.*)$", "<li>• ${1}</li>"),
        rule(r"(?Rm)^\d+\. (.*)$", "<li>${1}</li>"),
        rule(r"\n\n", "</p><p>"),
    ]
});

/// Render without escaping: HTML already in `content` passes through.
pub fn render(content: &str) -> String {
    let mut out = content.to_string();
    for rule in RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    format!("<p>{}</p>", out)
}

/// Escape `content` first, then render. Use this for anything that ends
/// up in a page.
pub fn render_escaped(content: &str) -> String {
    render(&html::escape(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_then_italic() {
        let out = render("**bold** and *italic*");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
        assert!(!out.contains("<em><strong>"));
        assert!(!out.contains("<em></em>"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn headings_each_level_once() {
        let out = render("# A\n## B\n### C");
        assert_eq!(out.matches("<h1>").count(), 1);
        assert_eq!(out.matches("<h2>").count(), 1);
        assert_eq!(out.matches("<h3>").count(), 1);
        assert!(out.contains("<h1>A</h1>"));
        assert!(out.contains("<h2>B</h2>"));
        assert!(out.contains("<h3>C</h3>"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn heading_needs_line_start() {
        let out = render("see # not a heading");
        assert!(!out.contains("<h1>"));
    }

    #[test]
    fn inline_code() {
        assert_eq!(render("run `cargo` now"), "<p>run <code>cargo</code> now</p>");
    }

    #[test]
    fn list_items_without_container() {
        let out = render("- one\n2. two");
        assert!(out.contains("<li>• one</li>"));
        assert!(out.contains("<li>two</li>"));
        assert!(!out.contains("<ul>"));
        assert!(!out.contains("<ol>"));
    }

    #[test]
    fn paragraphs_and_wrapper() {
        assert_eq!(render("first\n\nsecond"), "<p>first</p><p>second</p>");
        assert_eq!(render(""), "<p></p>");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        let out = render("*a\nb*");
        assert!(!out.contains("<em>"));
    }

    #[test]
    fn crlf_line_endings_stay_outside_tags() {
        let out = render("## A\r\n- b\r\n*c\r\nd*");
        assert!(out.contains("<h2>A</h2>\r\n"));
        assert!(out.contains("<li>• b</li>\r\n"));
        assert!(!out.contains("<em>"));
        assert!(!out.contains("\r</"));
    }

    #[test]
    fn render_passes_html_through() {
        assert_eq!(render("<b>x</b>"), "<p><b>x</b></p>");
    }

    #[test]
    fn render_escaped_neutralises_html() {
        let out = render_escaped("**<script>alert(1)</script>**");
        assert_eq!(out, "<p><strong>&lt;script&gt;alert(1)&lt;/script&gt;</strong></p>");
    }

    #[test]
    fn summary_shaped_output() {
        let out = render("## Key Points\n- **Rust** is fast\n- it is *safe*");
        assert!(out.starts_with("<p><h2>Key Points</h2>"));
        assert!(out.contains("<li>• <strong>Rust</strong> is fast</li>"));
        assert!(out.contains("<li>• it is <em>safe</em></li>"));
    }
}
