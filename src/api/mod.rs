/// Remote exchange with the chat backend
///
/// One user turn is one `POST` of `{"message": ...}` to the configured
/// endpoint, answered by `{"message": ..., "type": ...}`.
///
/// # Architecture
///
/// - `client` - `ChatBackend` trait, the reqwest-backed `HttpChatBackend`
///   and the timeout wrapper used by the chat view
/// - `error` - `ExchangeError`, every way a turn can fail
///
/// # Usage
///
/// ```rust,no_run
/// use healthchat::api::{HttpChatBackend, exchange};
/// use std::time::Duration;
///
/// # async fn example() -> healthchat::api::ChatResult<()> {
/// let backend = HttpChatBackend::new("http://127.0.0.1:5000/api/chat");
/// let reply = exchange(&backend, "malaria", Duration::from_secs(30)).await?;
/// println!("{}: {}", reply.kind.as_str(), reply.message);
/// # Ok(())
/// # }
/// ```
mod client;
mod error;

pub use client::{BotReply, ChatBackend, HttpChatBackend, decode_reply, exchange};
pub use error::{ChatResult, ExchangeError};
