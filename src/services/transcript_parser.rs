use std::fs;
use std::path::Path;

use crate::config::constants::ROLE_MARKER_PREFIX;
use crate::errors::{ChatfileError, ChatfileResult};
use crate::structs::transcript::message::Message;
use crate::structs::transcript::transcript::Transcript;

/// Turns `__role` marked text into a [`Transcript`].
///
/// Every line is trimmed before it is inspected. A line starting with `__`
/// opens a block whose role is the rest of the line in lowercase; the lines
/// up to the next marker are its content. Lines before the first marker are
/// dropped.
pub struct TranscriptParser {
    lines: Vec<String>,
    current: usize,
}

impl TranscriptParser {
    pub fn new(input: &str) -> Self {
        // `\r\n` and a lone `\r` both end a line.
        let input = input.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            lines: input.lines().map(|s| s.trim().to_string()).collect(),
            current: 0,
        }
    }

    pub fn parse_file(path: &Path) -> ChatfileResult<Transcript> {
        let input = fs::read_to_string(path)
            .map_err(|e| ChatfileError::file_error(&path.display().to_string(), "read input", &e.to_string()))?;

        let transcript = Self::new(&input).parse().map_err(|e| match e {
            ChatfileError::ParseError { content_type, line_number, reason, .. } => ChatfileError::ParseError {
                content_type,
                line_number,
                reason,
                context: Some(path.display().to_string()),
            },
            other => other,
        })?;

        log::debug!("📄 Parsed {} messages from {}", transcript.message_count(), path.display());
        Ok(transcript)
    }

    pub fn parse(&mut self) -> ChatfileResult<Transcript> {
        let skipped = self.skip_preamble();
        if skipped > 0 {
            log::debug!("Discarding {skipped} lines before the first role marker");
        }

        if self.current >= self.lines.len() {
            return Err(ChatfileError::parse_error(
                "transcript",
                None,
                &format!("no messages found: expected at least one '{ROLE_MARKER_PREFIX}<role>' line"),
                None,
            ));
        }

        let mut messages = Vec::new();
        while self.current < self.lines.len() {
            messages.push(self.parse_block());
        }

        Ok(Transcript::new(messages))
    }

    fn skip_preamble(&mut self) -> usize {
        let start = self.current;
        while self.current < self.lines.len() && !Self::is_marker(self.current_line()) {
            self.current += 1;
        }
        self.current - start
    }

    fn parse_block(&mut self) -> Message {
        let role = self
            .current_line()
            .strip_prefix(ROLE_MARKER_PREFIX)
            .unwrap_or_default()
            .to_lowercase();
        if role.is_empty() {
            log::warn!("⚠️  Empty role on marker line {}", self.current + 1);
        }
        self.advance();

        let start = self.current;
        while self.current < self.lines.len() && !Self::is_marker(self.current_line()) {
            self.advance();
        }

        Message::new(role, Self::join_content(&self.lines[start..self.current]))
    }

    /// Drops at most one blank line from each end, then joins with `\n`.
    fn join_content(mut text: &[String]) -> String {
        if text.first().is_some_and(String::is_empty) {
            text = &text[1..];
        }
        if text.last().is_some_and(String::is_empty) {
            text = &text[..text.len() - 1];
        }
        text.join("\n")
    }

    fn is_marker(line: &str) -> bool {
        line.starts_with(ROLE_MARKER_PREFIX)
    }

    fn current_line(&self) -> &str {
        self.lines.get(self.current).map_or("", String::as_str)
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}
