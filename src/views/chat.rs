use crate::api::{ChatBackend, HttpChatBackend, exchange};
use crate::config;
use crate::session::{ChatSession, WelcomeState};
use crate::speech::{self, SpeechSource};
use crate::views::message::{MessageBlock, TypingIndicator};
use crate::views::welcome::WelcomePlaceholder;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;

const CLEAR_PROMPT: &str = "Are you sure you want to clear the chat?";

const CHAT_BOX_ID: &str = "chatBox";

const SCROLL_TO_BOTTOM: &str = r#"
const box = document.getElementById("chatBox");
if (box) { box.scrollTop = box.scrollHeight; }
"#;

/// What the panel's scroll position depends on: the list scrolls to the
/// newest entry whenever this changes.
fn scroll_key(session: &ChatSession) -> (usize, bool) {
    (session.rendered_len(), session.is_typing())
}

/// Ask the user through the page's native confirm dialog. Anything other
/// than an explicit yes counts as no.
async fn confirm(prompt: &str) -> bool {
    let quoted = serde_json::to_string(prompt).unwrap_or_default();
    let script = format!("return window.confirm({quoted});");
    match document::eval(&script).join::<bool>().await {
        Ok(answer) => answer,
        Err(err) => {
            tracing::debug!(error = ?err, "confirm dialog unavailable");
            false
        }
    }
}

#[component]
pub fn ChatView() -> Element {
    let config = config::current();
    let timeout = config.timeout;
    let session = use_signal(ChatSession::new);
    let input = use_signal(String::new);
    let in_flight = use_signal(|| Option::<Task>::None);
    let backend: Rc<dyn ChatBackend> =
        use_hook(|| Rc::new(HttpChatBackend::from_config(config)) as Rc<dyn ChatBackend>);
    let speech_source = use_resource(speech::detect);

    let submit = {
        let mut session = session;
        let mut input = input;
        let mut in_flight = in_flight;
        use_callback(move |text: String| {
            let Some(turn) = session.write().begin_turn(&text) else {
                return;
            };
            input.set(String::new());

            let backend = backend.clone();
            let task = spawn(async move {
                let result = exchange(backend.as_ref(), &turn.text, timeout).await;
                session.write().complete_turn(turn.id, result);
                in_flight.set(None);
            });
            in_flight.set(Some(task));
        })
    };

    let listen = {
        let mut input = input;
        use_callback(move |()| {
            let Some(source): Option<Rc<dyn SpeechSource>> = speech_source.cloned().flatten()
            else {
                return;
            };
            spawn(async move {
                match source.listen_once().await {
                    Ok(Some(transcript)) => {
                        input.set(transcript.clone());
                        submit.call(transcript);
                    }
                    Ok(None) => {}
                    Err(err) => tracing::warn!(error = %err, "speech input failed"),
                }
            });
        })
    };

    let mut stop_pending = {
        let mut session = session;
        let mut in_flight = in_flight;
        move || {
            if let Some(task) = in_flight.write().take() {
                task.cancel();
            }
            session.write().cancel_turn();
        }
    };

    let clear_chat = {
        let mut session = session;
        let mut in_flight = in_flight;
        move |_: MouseEvent| async move {
            if !confirm(CLEAR_PROMPT).await {
                return;
            }
            if let Some(task) = in_flight.write().take() {
                task.cancel();
            }
            session.write().clear();
        }
    };

    use_effect(move || {
        let _ = scroll_key(&session.read());
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    let snapshot = session.read().clone();
    let busy = snapshot.is_busy();
    let has_speech = matches!(&*speech_source.read(), Some(Some(_)));

    rsx! {
        div { class: "chat-wrap",
            div { class: "chat-toolbar",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    title: "Clear chat",
                    onclick: clear_chat,
                    i { class: "fas fa-trash" }
                    " Clear"
                }
            }
            div { id: CHAT_BOX_ID, class: "chat-box",
                if snapshot.welcome() != WelcomeState::Removed {
                    WelcomePlaceholder {
                        hidden: snapshot.welcome() == WelcomeState::Hidden,
                        on_example: move |query: String| {
                            let mut input = input;
                            input.set(query.clone());
                            submit.call(query);
                        },
                    }
                }
                for (i, message) in snapshot.messages().iter().enumerate() {
                    MessageBlock { key: "{i}", message: message.clone() }
                }
            }
            TypingIndicator { visible: snapshot.is_typing() }
            Composer {
                input,
                busy,
                has_speech,
                on_focus: move |_| {
                    let mut session = session;
                    session.write().focus_input();
                },
                on_submit: move |text: String| submit.call(text),
                on_listen: move |_| listen.call(()),
                on_stop: move |_| stop_pending(),
            }
        }
    }
}

#[component]
fn Composer(
    input: Signal<String>,
    busy: bool,
    has_speech: bool,
    on_focus: EventHandler<()>,
    on_submit: EventHandler<String>,
    on_listen: EventHandler<()>,
    on_stop: EventHandler<()>,
) -> Element {
    let mut input = input;
    rsx! {
        form {
            class: "composer",
            onsubmit: move |ev: FormEvent| ev.prevent_default(),
            div { class: "composer-inner",
                input {
                    id: "userInput",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "Ask about a disease, symptom or prevention...",
                    value: "{input}",
                    disabled: busy,
                    oninput: move |ev| input.set(ev.value()),
                    onfocus: move |_| on_focus.call(()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            on_submit.call(input());
                        }
                    },
                }
                if has_speech {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Speak",
                        disabled: busy,
                        onclick: move |_| on_listen.call(()),
                        i { class: "fas fa-microphone" }
                    }
                }
                if busy {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Stop waiting for a reply",
                        onclick: move |_| on_stop.call(()),
                        i { class: "fas fa-stop" }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: input().trim().is_empty(),
                        onclick: move |_| on_submit.call(input()),
                        i { class: "fas fa-paper-plane" }
                        " Send"
                    }
                }
            }
        }
    }
}
