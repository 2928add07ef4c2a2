use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub const BASE_URL: &str = "http://127.0.0.1:3010";

/// Starts the shared mock service once per test binary.
///
/// The service runs on its own runtime thread so it outlives any individual
/// test's runtime.
#[allow(unused)]
pub async fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    let wait = ONCE_LOCK.get().is_none();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            error!("Panic occurred: {info:?}");
            default_panic(info);
        }));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("locbench=debug,mock_service=debug"))
            .with_test_writer()
            .try_init();

        std::thread::spawn(|| {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let addr: SocketAddr = "127.0.0.1:3010".parse().unwrap();
            rt.block_on(mock_service::run(addr));
        });
    });

    if wait {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}
