use std::fmt;

use serde::Serialize;

use crate::config::constants::ROLE_MARKER_PREFIX;
use crate::structs::transcript::message::Message;

/// Ordered messages of one conversation, in turn order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub const fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Renders the transcript back into marker form.
    ///
    /// Each content block is wrapped in one blank line on either side, which is
    /// exactly what the parser strips, so parsing the rendering gives back an
    /// equal transcript.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            write!(f, "{ROLE_MARKER_PREFIX}{}\n\n{}\n\n", message.role, message.content)?;
        }
        Ok(())
    }
}
