//! Structured handler output.
//!
//! Handlers never print. Each one returns a [`Response`]: a status plus an ordered
//! list of [`Message`]s that the [`Renderer`](crate::render::Renderer) turns into
//! terminal lines at the end of the turn.

use variantly::Variantly;

/// Outcome of a routed request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    Failure,
    /// Unrecoverable; the shell prints the messages and terminates.
    Error,
}

/// One printable unit of a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Message {
    Blank,
    /// A single line, wrapped only if it overflows the display width.
    Line(String),
    /// Prose that is always wrapped.
    Paragraph(String),
    /// Literal lines that are never wrapped.
    Art(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: RequestStatus,
    pub messages: Vec<Message>,
}

impl Response {
    pub fn new(status: RequestStatus, messages: Vec<Message>) -> Self {
        Self { status, messages }
    }

    /// A successful response with nothing to show.
    pub fn empty() -> Self {
        Self::new(RequestStatus::Success, Vec::new())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(RequestStatus::Success, vec![Message::Blank, Message::Line(message.into())])
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(RequestStatus::Failure, vec![Message::Blank, Message::Line(message.into())])
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(RequestStatus::Error, vec![Message::Blank, Message::Line(message.into())])
    }

    pub fn success_with_header(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            RequestStatus::Success,
            vec![
                Message::Blank,
                Message::Line(header.into()),
                Message::Blank,
                Message::Line(message.into()),
            ],
        )
    }

    /// Header followed by a bulleted list, one `" - entry"` line per string.
    pub fn success_with_header_and_strings<I, S>(header: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut messages = vec![Message::Blank, Message::Line(header.into()), Message::Blank];
        messages.extend(
            entries
                .into_iter()
                .map(|entry| Message::Line(format!(" - {}", entry.as_ref()))),
        );
        Self::new(RequestStatus::Success, messages)
    }

    pub fn art(lines: Vec<String>) -> Self {
        Self::new(RequestStatus::Success, vec![Message::Blank, Message::Art(lines)])
    }

    pub fn is_success(&self) -> bool {
        self.status == RequestStatus::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == RequestStatus::Failure
    }

    /// All textual content in order, ignoring blanks. Handy for logs and assertions.
    pub fn text(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for message in &self.messages {
            match message {
                Message::Blank => {},
                Message::Line(text) | Message::Paragraph(text) => lines.push(text.clone()),
                Message::Art(art) => lines.extend(art.iter().cloned()),
            }
        }
        lines
    }

    /// Append another response's messages, keeping this response's status.
    pub fn extend(&mut self, other: Response) {
        self.messages.extend(other.messages);
    }
}
