use crate::format::render_html;
use crate::types::{Message, Sender};
use dioxus::prelude::*;

fn icon_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "fas fa-user",
        Sender::Bot => "fas fa-robot",
    }
}

fn content_class(message: &Message) -> &'static str {
    if message.is_emergency() {
        "message-content emergency-message"
    } else {
        "message-content"
    }
}

/// Bot rows lead with the icon; user rows put it after the bubble.
fn icon_leads(sender: Sender) -> bool {
    sender == Sender::Bot
}

#[component]
pub fn MessageBlock(message: Message) -> Element {
    let sender = message.sender.as_str();
    let body = render_html(&message.text);
    let leading = icon_leads(message.sender);

    rsx! {
        div { class: "message message-{sender}",
            if leading {
                MessageIcon { sender: message.sender }
            }
            div { class: content_class(&message),
                span { class: "message-text", dangerous_inner_html: "{body}" }
                div { class: "message-time", "{message.timestamp}" }
            }
            if !leading {
                MessageIcon { sender: message.sender }
            }
        }
    }
}

#[component]
fn MessageIcon(sender: Sender) -> Element {
    rsx! {
        div { class: "message-icon",
            i { class: icon_class(sender) }
        }
    }
}

#[component]
pub fn TypingIndicator(visible: bool) -> Element {
    let display = if visible { "flex" } else { "none" };
    rsx! {
        div {
            id: "typing-indicator",
            class: "typing-indicator",
            style: "display: {display};",
            aria_hidden: (!visible).to_string(),
            div { class: "message-icon",
                i { class: icon_class(Sender::Bot) }
            }
            div { class: "typing-dots",
                span {}
                span {}
                span {}
            }
        }
    }
}
