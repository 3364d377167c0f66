mod backend;
mod frontend;

use std::sync::OnceLock;

use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use log::info;

use crate::backend::generator::GenerateClient;
use crate::backend::utils::AppConfig;
use crate::frontend::app::App;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
static GENERATE_CLIENT: OnceLock<GenerateClient> = OnceLock::new();

/// Configuration loaded once at startup.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::load_or_default)
}

/// Shared client for the generator service.
pub fn generate_client() -> GenerateClient {
    GENERATE_CLIENT
        .get_or_init(|| {
            GenerateClient::new(app_config()).expect("Failed to create HTTP client")
        })
        .clone()
}

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app_config();
    info!("generator service at {}", config.base_url);
    info!("books will be saved to {:?}", config.download_dir());

    let size = LogicalSize::new(760.0, 560.0);

    let window_config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Bookbinder")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(window_config).launch(App);
}
