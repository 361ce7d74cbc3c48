use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Builds the application subscriber: bunyan-formatted JSON lines on stdout,
/// filtered by RUST_LOG when set, otherwise by `default_env_filter`.
pub fn get_subscriber(
    name: String,
    default_env_filter: String,
) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the subscriber as the global default. Must be called once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    // Redirect records emitted through the 'log' facade into tracing
    LogTracer::init().expect("Failed to set the logger.");
    set_global_default(subscriber).expect("Failed to set the tracing subscriber.");
}
