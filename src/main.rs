use rohan_store::catalog::CatalogClient;
use rohan_store::config::Config;
use rohan_store::ui::{self, SharedCatalogSource};
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    let client = CatalogClient::from_config(&config);
    info!("Catalog endpoint: {}", client.products_url());

    let builder = dioxus::LaunchBuilder::new().with_context(SharedCatalogSource::new(client));

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(ui::make_config());

    builder.launch(ui::App);
}
