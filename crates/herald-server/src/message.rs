//! Structured chat message model.
//!
//! The greeter does not render chat itself; it hands the proxy a sequence
//! of text spans, each optionally carrying a click command and hover text.
//! Click and hover are opaque decoration here — the proxy's chat system
//! turns them into whatever its protocol supports. Legacy `§` style codes
//! travel inside the span text verbatim for the same reason.

use serde::Serialize;

/// One span of message text with optional decoration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Span {
    /// Text content, style codes included
    pub text: String,

    /// Command the client runs when the span is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_command: Option<String>,

    /// Text shown when the span is hovered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<String>,
}

impl Span {
    /// Create a plain text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            click_command: None,
            hover_text: None,
        }
    }

    /// Attach a click command.
    #[must_use]
    pub fn with_click(mut self, command: impl Into<String>) -> Self {
        self.click_command = Some(command.into());
        self
    }

    /// Attach hover text.
    #[must_use]
    pub fn with_hover(mut self, hover: impl Into<String>) -> Self {
        self.hover_text = Some(hover.into());
        self
    }
}

/// An ordered sequence of spans forming one chat message.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Message {
    spans: Vec<Span>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Append a plain text span.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.spans.push(Span::text(text));
    }

    /// The spans in order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The plain-text payload: all span text concatenated.
    pub fn render(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl FromIterator<Span> for Message {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}
