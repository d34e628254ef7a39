mod app;
mod host;
mod icons;
mod layout;
mod logging;
mod pages;
mod state;
mod style;

use app::App;
use dashboard_core::DashboardConfig;
use leptos::*;
use tracing::warn;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = host::load_config();
    logging::init(
        loaded
            .as_ref()
            .map(|c| c.log_level.as_str())
            .unwrap_or("info"),
    );
    let config = loaded.unwrap_or_else(|err| {
        warn!(%err, "using default dashboard config");
        DashboardConfig::default()
    });

    mount_to_body(move || view! { <App config=config/> });
}
