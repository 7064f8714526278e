use critter::app::App;
use critter::constants::LOOP_TIME;
use critter::formatter::CustomFormatter;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// The main entry point of the viewer.
///
/// Installs the tracing subscriber, initializes SDL and the view, then
/// enters the per-frame loop.
pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .event_format(CustomFormatter)
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let mut app = App::new().expect("Could not create app");

    info!(loop_time = ?LOOP_TIME, "Starting render loop");

    loop {
        if !app.run() {
            break;
        }
    }
}
