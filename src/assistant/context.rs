//! Projects the message log into the request payload for the model.
use crate::gemini::{Content, Role};

use super::models::MessageLog;

/// Builds the conversation contents for the next model request: every
/// stored turn, in order, followed by one synthetic user entry for the
/// pending text. The pending turn is intentionally not in the log yet;
/// the session commits it separately so a rejected submit leaves no
/// trace.
pub fn build_context(log: &MessageLog, pending_text: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = log
        .iter()
        .map(|msg| Content::new(msg.role, &msg.text))
        .collect();
    contents.push(Content::new(Role::User, pending_text));
    contents
}
