use busgo_server::config::AppConfig;
use busgo_server::fleet::demo_fleet;
use busgo_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("busgo_server=info,tower_http=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let fleet = demo_fleet();
    info!(buses = fleet.len(), "loaded demo fleet");

    let state = AppState::new(fleet, &config);
    let app = create_router(state, &config.static_dir);

    let addr = config.listen_addr;
    info!("BusGo listening on http://{addr}");
    info!(
        payment_delay_ms = config.payment_delay.as_millis() as u64,
        static_dir = %config.static_dir.display(),
        "configuration"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
