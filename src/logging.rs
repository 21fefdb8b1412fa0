use tracing::Level;

/// Install the global tracing subscriber. Later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Install the global tracing subscriber. Events go to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    let _ = dioxus::logger::init(level);
}
