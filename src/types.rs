use crate::format::current_time_of_day;

/// Fixed bot reply shown when a turn fails for any reason.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// Reply category reported by the backend. Unknown categories are kept
/// verbatim and render like `Default`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Default,
    Emergency,
    Error,
    Other(String),
}

impl MessageKind {
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("default") => MessageKind::Default,
            Some("emergency") => MessageKind::Emergency,
            Some("error") => MessageKind::Error,
            Some(other) => MessageKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Default => "default",
            MessageKind::Emergency => "emergency",
            MessageKind::Error => "error",
            MessageKind::Other(raw) => raw,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub kind: MessageKind,
    pub timestamp: String,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            sender,
            kind,
            timestamp: current_time_of_day(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, MessageKind::Default)
    }

    pub fn bot(text: impl Into<String>, kind: MessageKind) -> Self {
        Self::new(text, Sender::Bot, kind)
    }

    /// Only bot replies get the emergency treatment.
    pub fn is_emergency(&self) -> bool {
        self.sender == Sender::Bot && self.kind == MessageKind::Emergency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_wire() {
        assert_eq!(MessageKind::from_wire(None), MessageKind::Default);
        assert_eq!(MessageKind::from_wire(Some("")), MessageKind::Default);
        assert_eq!(
            MessageKind::from_wire(Some("emergency")),
            MessageKind::Emergency
        );
        assert_eq!(MessageKind::from_wire(Some("error")), MessageKind::Error);
        assert_eq!(
            MessageKind::from_wire(Some("disease_info")),
            MessageKind::Other("disease_info".to_string())
        );
    }

    #[test]
    fn test_user_message_never_emergency() {
        let msg = Message::new("help", Sender::User, MessageKind::Emergency);
        assert!(!msg.is_emergency());
        assert!(Message::bot("call 911", MessageKind::Emergency).is_emergency());
    }
}
