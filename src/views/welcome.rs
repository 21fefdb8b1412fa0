use dioxus::prelude::*;

/// Sample questions offered before the first message.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Tell me about diabetes",
    "What are the symptoms of COVID-19?",
    "How can I prevent malaria?",
];

#[component]
pub fn WelcomePlaceholder(hidden: bool, on_example: EventHandler<String>) -> Element {
    let style = if hidden { "display: none;" } else { "" };
    rsx! {
        div { class: "welcome-message", style: "{style}",
            div { class: "text-center",
                i { class: "fas fa-heartbeat fa-4x text-primary mb-3" }
                h3 { "Welcome to AI Public Health Chatbot! 👋" }
                p { class: "lead", "Your intelligent health awareness companion" }
                p {
                    "I can help you with disease information, symptom checking, and preventive healthcare guidance."
                }
                p { class: "text-muted", "Type a message to get started..." }
                div { class: "example-queries",
                    for query in EXAMPLE_QUERIES.iter().copied() {
                        button {
                            class: "example-query",
                            r#type: "button",
                            onclick: move |_| on_example.call(query.to_string()),
                            "{query}"
                        }
                    }
                }
            }
        }
    }
}
