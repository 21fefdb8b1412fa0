use crate::views::ChatView;
use dioxus::prelude::*;

const CHAT_CSS: Asset = asset!("/assets/chat.css");
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "AI Public Health Chatbot" }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        div { class: "chat-container",
            AppHeader {}
            ChatView {}
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                i { class: "fas fa-heartbeat" }
                h1 { class: "header-title", "Public Health Assistant" }
            }
            p { class: "header-subtitle",
                "Disease information, symptoms and prevention. Not a substitute for medical advice."
            }
        }
    }
}
