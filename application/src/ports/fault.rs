//! Remote fault type for persistence calls.
//!
//! Backends fail in several shapes: a structured body with a message, a
//! body carrying only field-level errors, a plain message, or bare text.
//! [`RemoteFault`] carries all of them and [`human_message`] flattens
//! them into one displayable string with a fixed precedence.
//!
//! [`human_message`]: RemoteFault::human_message

/// Fallback text when a fault carries no usable message at all.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// A failure reported by a persistence collaborator.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", self.human_message())]
pub struct RemoteFault {
    /// Message field of a structured fault body.
    pub body_message: Option<String>,
    /// Field-level error messages from a structured body.
    pub field_messages: Vec<String>,
    /// Generic message property of the fault itself.
    pub message: Option<String>,
    /// The fault value when it was already plain text.
    pub raw: Option<String>,
}

impl RemoteFault {
    /// A fault that is just a message string.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A fault with a structured body message.
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            body_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A fault carrying only field-level error messages.
    pub fn field_errors(messages: impl IntoIterator<Item = String>) -> Self {
        Self {
            field_messages: messages.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A fault that was already plain text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw: Some(text.into()),
            ..Self::default()
        }
    }

    /// Map the fault to one displayable message.
    ///
    /// Precedence: structured body message, then the first field-level
    /// message, then the generic message property, then the raw text,
    /// then [`UNKNOWN_ERROR`].
    pub fn human_message(&self) -> String {
        self.body_message
            .clone()
            .or_else(|| self.field_messages.first().cloned())
            .or_else(|| self.message.clone())
            .or_else(|| self.raw.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_message_wins() {
        let fault = RemoteFault {
            body_message: Some("Template is locked".into()),
            field_messages: vec!["Value too long".into()],
            message: Some("request failed".into()),
            raw: Some("boom".into()),
        };
        assert_eq!(fault.human_message(), "Template is locked");
    }

    #[test]
    fn test_first_field_message_is_second() {
        let fault = RemoteFault {
            field_messages: vec!["Value too long".into(), "Also bad".into()],
            message: Some("request failed".into()),
            ..RemoteFault::default()
        };
        assert_eq!(fault.human_message(), "Value too long");
    }

    #[test]
    fn test_generic_message_is_third() {
        let fault = RemoteFault::message("request failed");
        assert_eq!(fault.human_message(), "request failed");
    }

    #[test]
    fn test_raw_text_is_fourth() {
        let fault = RemoteFault::raw("boom");
        assert_eq!(fault.human_message(), "boom");
    }

    #[test]
    fn test_fallback_when_empty() {
        assert_eq!(RemoteFault::default().human_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_display_matches_human_message() {
        let fault = RemoteFault::body("nope");
        assert_eq!(fault.to_string(), "nope");
    }
}
