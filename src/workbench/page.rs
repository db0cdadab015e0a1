use std::fmt::Write;

use super::view::{NoticeKind, WorkbenchView, PARAPHRASE_STYLES};
use crate::relay::Action;
use crate::utils::{html::escape, markdown};

struct ActionCopy {
    title: &'static str,
    description: &'static str,
    button: &'static str,
}

fn copy_for(action: Action) -> ActionCopy {
    match action {
        Action::Translate => ActionCopy {
            title: "Language Translation",
            description: "Automatically detect language and translate to English",
            button: "Translate Text",
        },
        Action::Paraphrase => ActionCopy {
            title: "Text Paraphrasing",
            description: "Rewrite your text while preserving meaning and adjusting style",
            button: "Paraphrase",
        },
        Action::Summarize => ActionCopy {
            title: "Text Summarization",
            description: "Create a concise summary highlighting the main points",
            button: "Summarize",
        },
        Action::Grammar => ActionCopy {
            title: "Grammar Correction",
            description: "Fix grammar, spelling errors, and improve overall fluency",
            button: "Correct Grammar",
        },
        Action::Tone => ActionCopy {
            title: "Tone Adjustment",
            description: "Rewrite with a professional tone while preserving meaning",
            button: "Adjust Tone",
        },
        Action::Keywords => ActionCopy {
            title: "Keyword Extraction",
            description: "Extract key terms, important concepts, and main topics",
            button: "Extract Keywords",
        },
    }
}

/// Render the whole workbench page.
pub fn render(view: &WorkbenchView) -> String {
    let mut body = String::new();

    if let Some(notice) = &view.notice {
        let class = match notice.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };
        let _ = write!(
            body,
            r#"<div class="{}" role="status"><strong>{}</strong><span>{}</span></div>"#,
            class,
            escape(notice.title),
            escape(notice.description),
        );
    }

    body.push_str(r#"<form id="workbench" method="post" action="/">"#);
    body.push_str(&input_panel(view));
    body.push_str(&output_panel(view));
    body.push_str(&actions_panel(view));
    body.push_str("</form>");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>ClearWrite</title>
<link rel="stylesheet" href="/static/workbench.css">
<script src="/static/workbench.js" defer></script>
</head>
<body>
<header><h1>ClearWrite</h1><p>Write with confidence.</p></header>
<main>{}</main>
</body>
</html>
"#,
        body
    )
}

fn input_panel(view: &WorkbenchView) -> String {
    let mut out = String::from(r#"<section class="panel"><h2>Text Input</h2>"#);
    // Leading newline: browsers drop the first one inside a textarea.
    let _ = write!(
        out,
        "<textarea name=\"text\" placeholder=\"Enter your text here...\" rows=\"10\">\n{}</textarea>",
        escape(&view.input)
    );
    if let Some(language) = &view.detected_language {
        let _ = write!(
            out,
            r#"<p class="detected">Detected language: <span class="badge">{}</span></p>"#,
            escape(language)
        );
        let _ = write!(
            out,
            "<textarea name=\"previous_language\" hidden>\n{}</textarea>",
            escape(language)
        );
    }
    out.push_str(r#"<a class="button-secondary" href="/">Clear</a></section>"#);
    out
}

fn output_panel(view: &WorkbenchView) -> String {
    let mut out = String::from(r#"<section class="panel"><h2>Processed Output</h2>"#);
    out.push_str(r#"<div id="processing" class="processing" hidden>Processing...</div>"#);
    match &view.output {
        Some(output) => {
            out.push_str(r#"<button type="button" id="copy-output" class="button-secondary">Copy</button>"#);
            let _ = write!(
                out,
                r#"<div class="output">{}</div>"#,
                markdown::render_escaped(output)
            );
            let _ = write!(
                out,
                "<textarea id=\"raw-output\" name=\"previous_output\" hidden>\n{}</textarea>",
                escape(output)
            );
        }
        None => {
            out.push_str(r#"<p class="placeholder">Select an action below to process your text</p>"#);
        }
    }
    out.push_str("</section>");
    out
}

fn actions_panel(view: &WorkbenchView) -> String {
    let mut out = String::from(r#"<section class="panel actions"><h2>AI Processing Options</h2>"#);
    for action in Action::ALL {
        let copy = copy_for(action);
        let class = if action == view.selected {
            "action selected"
        } else {
            "action"
        };
        let _ = write!(
            out,
            r#"<div class="{}"><h3>{}</h3><p>{}</p>"#,
            class, copy.title, copy.description
        );
        if action == Action::Paraphrase {
            out.push_str(&style_select(&view.style));
        }
        let _ = write!(
            out,
            r#"<button type="submit" name="action" value="{}">{}</button></div>"#,
            action.as_str(),
            copy.button
        );
    }
    out.push_str("</section>");
    out
}

fn style_select(current: &str) -> String {
    let mut out = String::from(r#"<label>Style: <select name="style">"#);
    for (value, label) in PARAPHRASE_STYLES {
        let selected = if value == current { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{}"{}>{}</option>"#, value, selected, label);
    }
    out.push_str("</select></label>");
    out
}
