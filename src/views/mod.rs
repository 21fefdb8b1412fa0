pub mod chat;
pub mod message;
pub mod welcome;

pub use chat::ChatView;
pub use message::{MessageBlock, TypingIndicator};
pub use welcome::WelcomePlaceholder;
