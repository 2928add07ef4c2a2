use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    if let Some(ms) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        mock_service::set_delay_ms(ms);
    }

    let addr: SocketAddr = "0.0.0.0:8000".parse().unwrap();
    mock_service::run(addr).await;
}
