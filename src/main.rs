use std::sync::Arc;

use mapview::config::Config;
use mapview::engine::MapView;
use mapview::external::{google_maps::GoogleMaps, loader};
use mapview::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let view = Arc::new(MapView::new(Arc::new(GoogleMaps::new(&config))));

    tokio::spawn({
        let view = view.clone();
        async move {
            loader::load().await;
            view.mark_loaded();
        }
    });

    view.mount();

    if let Err(err) = serve(view, config.listen_address).await {
        tracing::error!("server stopped: {}", err);
        std::process::exit(1);
    }
}
