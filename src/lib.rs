//! Browser chat widget for a public health information assistant.
//!
//! The widget posts each user message to a chat endpoint and renders the
//! reply with light formatting. `session` holds the panel state, `api` talks
//! to the backend and `views` binds both to the page through Dioxus.

pub mod api;
pub mod config;
pub mod format;
pub mod logging;
pub mod session;
pub mod speech;
pub mod types;
pub mod ui;
pub mod views;
