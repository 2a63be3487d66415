//! Transcript serialization for the analysis prompt.

use crate::models::message::{Message, Role};

/// Fixed label for the human consultant role in rendered transcripts.
pub const CONSULTANT_LABEL: &str = "Jobbkonsulent";

/// Renders the conversation as one line per message, in exact input order.
/// No truncation, redaction or reordering happens here; length limiting is
/// the caller's concern.
pub fn render_transcript(messages: &[Message], employer_label: &str) -> String {
    let lines: Vec<String> = messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => format!("{CONSULTANT_LABEL}: {}", msg.text),
            Role::Assistant => format!("Arbeidsgiver ({employer_label}): {}", msg.text),
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: Role, text: &str) -> Message {
        Message {
            role,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_order_is_preserved_one_line_per_message() {
        let messages = vec![
            msg(Role::User, "Hei, jeg heter Ola."),
            msg(Role::Assistant, "Hei."),
            msg(Role::User, "Har dere behov for folk?"),
        ];
        let transcript = render_transcript(&messages, "Rema 1000");
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Jobbkonsulent: Hei, jeg heter Ola.",
                "Arbeidsgiver (Rema 1000): Hei.",
                "Jobbkonsulent: Har dere behov for folk?",
            ]
        );
    }

    #[test]
    fn test_empty_transcript_renders_empty() {
        assert_eq!(render_transcript(&[], "Rema 1000"), "");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let messages = vec![msg(Role::User, "Hei.")];
        assert_eq!(
            render_transcript(&messages, "Rema 1000"),
            render_transcript(&messages, "Rema 1000")
        );
    }
}
