//! Optional speech-to-text input.
//!
//! Browsers that expose `SpeechRecognition` (or the `webkit` prefixed form)
//! get a [`BrowserSpeech`] source; everywhere else [`detect`] returns `None`
//! and the chat view renders no microphone control.

use async_trait::async_trait;
use dioxus::document;
use serde::Deserialize;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition failed: {0}")]
    Recognition(String),

    #[error("speech bridge error: {0}")]
    Bridge(String),
}

/// A source that can capture a single spoken phrase.
#[async_trait(?Send)]
pub trait SpeechSource {
    /// Listen for one phrase. `Ok(None)` means the session ended without a
    /// usable transcript.
    async fn listen_once(&self) -> Result<Option<String>, SpeechError>;
}

const DETECT_SCRIPT: &str =
    "return Boolean(window.SpeechRecognition || window.webkitSpeechRecognition);";

const LISTEN_SCRIPT: &str = r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Recognition) {
    dioxus.send({ status: "error", error: "unsupported" });
    return;
}
const recognition = new Recognition();
recognition.continuous = false;
recognition.interimResults = false;
let settled = false;
const settle = (payload) => {
    if (!settled) {
        settled = true;
        dioxus.send(payload);
    }
};
recognition.onresult = (event) => {
    settle({ status: "result", transcript: event.results[0][0].transcript });
};
recognition.onerror = (event) => settle({ status: "error", error: String(event.error) });
recognition.onend = () => settle({ status: "end" });
recognition.start();
"#;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SpeechOutcome {
    Result { transcript: String },
    Error { error: String },
    End,
}

impl SpeechOutcome {
    fn into_transcript(self) -> Result<Option<String>, SpeechError> {
        match self {
            SpeechOutcome::Result { transcript } => {
                let transcript = transcript.trim();
                Ok((!transcript.is_empty()).then(|| transcript.to_string()))
            }
            // The user stopped talking before anything was recognised
            SpeechOutcome::Error { error } if error == "no-speech" || error == "aborted" => {
                Ok(None)
            }
            SpeechOutcome::Error { error } => Err(SpeechError::Recognition(error)),
            SpeechOutcome::End => Ok(None),
        }
    }
}

/// Single-shot recognition through the page's Web Speech API.
pub struct BrowserSpeech;

#[async_trait(?Send)]
impl SpeechSource for BrowserSpeech {
    async fn listen_once(&self) -> Result<Option<String>, SpeechError> {
        let mut eval = document::eval(LISTEN_SCRIPT);
        let outcome: SpeechOutcome = eval
            .recv()
            .await
            .map_err(|err| SpeechError::Bridge(format!("{err:?}")))?;
        outcome.into_transcript()
    }
}

/// Probe the page for speech recognition support.
pub async fn detect() -> Option<Rc<dyn SpeechSource>> {
    match document::eval(DETECT_SCRIPT).join::<bool>().await {
        Ok(true) => {
            tracing::debug!("speech recognition available");
            Some(Rc::new(BrowserSpeech))
        }
        Ok(false) => None,
        Err(err) => {
            tracing::debug!(error = ?err, "speech capability probe failed");
            None
        }
    }
}
