//! Instruction templates, one per action.
//!
//! The user's text is quoted into the template as-is. Nothing is escaped.

use super::action::Action;

pub fn build_prompt(action: Action, text: &str, style: &str) -> String {
    match action {
        Action::Translate => translate(text),
        Action::Paraphrase => paraphrase(text, style),
        Action::Summarize => summarize(text),
        Action::Grammar => grammar(text),
        Action::Tone => tone(text),
        Action::Keywords => keywords(text),
    }
}

fn translate(text: &str) -> String {
    format!(
        "Detect the language of this text and translate it to English if it's not already in English. \
         If it's already in English, just return it as is. \
         Format your response with proper markdown formatting including headers, bullet points, and emphasis where appropriate. \
         Text: \"{}\"",
        text
    )
}

fn paraphrase(text: &str, style: &str) -> String {
    format!(
        "Paraphrase the following text in a {} style while preserving the original meaning. \
         Format the response with proper markdown formatting including headers and emphasis where appropriate: \"{}\"",
        style, text
    )
}

fn summarize(text: &str) -> String {
    format!(
        "Provide a well-organized summary of the following text. \
         Use markdown formatting with headers (## Key Points), bullet points for main ideas, and **bold** for important terms. \
         Text: \"{}\"",
        text
    )
}

fn grammar(text: &str) -> String {
    format!(
        "Correct the grammar, spelling, and improve the fluency of this text. \
         Present the corrected version with proper markdown formatting and highlight key improvements with **bold** text: \"{}\"",
        text
    )
}

fn tone(text: &str) -> String {
    format!(
        "Rewrite this text with a professional tone while preserving the core message. \
         Format the response with proper markdown including headers and emphasis for key points: \"{}\"",
        text
    )
}

fn keywords(text: &str) -> String {
    format!(
        "Extract and organize the key terms and important concepts from this text. Format as markdown with:\n\
         ## Key Terms\n\
         - List important keywords with **bold** emphasis\n\
         ## Main Concepts\n\
         - List core concepts and themes\n\
         ## Topics\n\
         - List relevant topics and categories\n\
         \n\
         Text: \"{}\"",
        text
    )
}
