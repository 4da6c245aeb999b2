use clap::Parser;
use spindle_core::config::{
    CollectionConfig, DiscogsConfig, ALL_FOLDER_ID, DEFAULT_BASE_URL, DEFAULT_PER_PAGE,
    DEFAULT_SNAPSHOT_PATH,
};
use spindle_core::discogs::DiscogsClient;
use spindle_core::routes::create_router;
use spindle_core::service::CollectionService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// spindle: serves a random album from your Discogs collection.
#[derive(Parser)]
#[command(name = "spindle-server")]
struct Args {
    /// Discogs personal access token. Without one, only public collections are readable.
    #[arg(long, env = "DISCOGS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Discogs username whose collection is mirrored.
    #[arg(long, env = "DISCOGS_USERNAME")]
    username: String,

    /// Where the collection snapshot is kept.
    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH, env = "SPINDLE_SNAPSHOT_PATH")]
    snapshot_path: PathBuf,

    /// Collection folder to mirror (0 = all items).
    #[arg(long, default_value_t = ALL_FOLDER_ID, env = "SPINDLE_FOLDER_ID")]
    folder_id: u64,

    /// Page size for full syncs.
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, env = "SPINDLE_PER_PAGE")]
    per_page: u32,

    /// Timeout for each Discogs request, in seconds.
    #[arg(long, default_value = "30", env = "SPINDLE_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Discogs API base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "SPINDLE_DISCOGS_URL")]
    base_url: String,

    /// Address to bind the server to.
    #[arg(long, default_value = "0.0.0.0", env = "SPINDLE_BIND")]
    bind: String,

    /// Port for the HTTP server.
    #[arg(long, default_value = "8000", env = "SPINDLE_PORT")]
    port: u16,

    /// Don't sync with Discogs before accepting requests.
    #[arg(long)]
    skip_startup_sync: bool,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    configure_logging();
    let args = Args::parse();

    info!("spindle-server starting");

    let discogs_config = DiscogsConfig::new(args.username.clone(), args.token.clone())
        .with_base_url(args.base_url.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));

    if discogs_config.token.is_some() {
        info!("Using Discogs token for {}", discogs_config.username);
    } else {
        info!(
            "No Discogs token provided; reading {}'s collection anonymously",
            discogs_config.username
        );
    }

    let service = Arc::new(CollectionService::new(
        DiscogsClient::new(discogs_config),
        CollectionConfig {
            folder_id: args.folder_id,
            per_page: args.per_page,
            snapshot_path: args.snapshot_path.clone(),
        },
    ));

    if !args.skip_startup_sync {
        info!("Running startup sync");
        match service.sync().await {
            Ok(true) => info!("Snapshot refreshed"),
            Ok(false) => info!("Snapshot already up to date"),
            Err(e) => warn!("Startup sync failed, continuing with existing snapshot: {e}"),
        }
    }

    let app = create_router(service);
    let addr = format!("{}:{}", args.bind, args.port);

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("spindle-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
