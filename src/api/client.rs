use super::{ChatResult, ExchangeError};
use crate::config::WidgetConfig;
use crate::types::MessageKind;
use async_trait::async_trait;
use futures::future::{Either, select};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A decoded bot reply.
#[derive(Clone, Debug, PartialEq)]
pub struct BotReply {
    pub message: String,
    pub kind: MessageKind,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

// Backend contract; anything beyond these two fields is ignored.
#[derive(Deserialize)]
struct ReplyWire {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Where a user turn gets answered.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, message: &str) -> ChatResult<BotReply>;
}

/// `POST`s each turn as JSON to a fixed endpoint.
pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, message: &str) -> ChatResult<BotReply> {
        tracing::debug!(endpoint = %self.endpoint, "posting chat message");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_reply(&body)
    }
}

/// Decode a reply body. A missing or null `message` counts as a failed
/// exchange rather than an empty reply.
pub fn decode_reply(body: &str) -> ChatResult<BotReply> {
    let wire: ReplyWire = serde_json::from_str(body)?;
    let message = wire.message.ok_or(ExchangeError::MissingMessage)?;
    Ok(BotReply {
        message,
        kind: MessageKind::from_wire(wire.kind.as_deref()),
    })
}

/// Run one exchange, giving up after `timeout`. The losing future is dropped,
/// which aborts an in-flight request.
pub async fn exchange(
    backend: &dyn ChatBackend,
    message: &str,
    timeout: Duration,
) -> ChatResult<BotReply> {
    let request = backend.send(message);
    let timer = sleep(timeout);
    futures::pin_mut!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ExchangeError::TimedOut(timeout)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reply_with_type() {
        let reply = decode_reply(r#"{"message":"ok","type":"emergency"}"#).expect("decodes");
        assert_eq!(reply.message, "ok");
        assert_eq!(reply.kind, MessageKind::Emergency);
    }

    #[test]
    fn test_decode_reply_defaults_type() {
        let reply = decode_reply(r#"{"message":"hi"}"#).expect("decodes");
        assert_eq!(reply.kind, MessageKind::Default);
    }

    #[test]
    fn test_decode_reply_ignores_extra_fields() {
        let body = r#"{"message":"**Malaria**","type":"disease_info","disease":{"id":3}}"#;
        let reply = decode_reply(body).expect("decodes");
        assert_eq!(reply.kind, MessageKind::Other("disease_info".to_string()));
    }

    #[test]
    fn test_decode_reply_missing_message() {
        assert!(matches!(
            decode_reply(r#"{"type":"default"}"#),
            Err(ExchangeError::MissingMessage)
        ));
        assert!(matches!(
            decode_reply(r#"{"message":null}"#),
            Err(ExchangeError::MissingMessage)
        ));
    }

    #[test]
    fn test_decode_reply_invalid_json() {
        assert!(matches!(
            decode_reply("<html>502</html>"),
            Err(ExchangeError::Decode(_))
        ));
    }
}
