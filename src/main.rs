use healthchat::config::{self, WidgetConfig};

fn main() {
    let (widget_config, load_error) = match config::load() {
        Ok(loaded) => (loaded, None),
        Err(err) => (WidgetConfig::default(), Some(err)),
    };

    healthchat::logging::init(widget_config.log_level);
    if let Some(err) = load_error {
        tracing::warn!(error = %format!("{err:#}"), "falling back to default configuration");
    }
    tracing::info!(endpoint = %widget_config.endpoint, "starting chat widget");

    config::install(widget_config);
    dioxus::launch(healthchat::ui::App);
}
