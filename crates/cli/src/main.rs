use clap::Parser;
use realip_api::{create_router, AppState};
use realip_application::RemoteAddressService;
use realip_domain::{CliOverrides, TrustedProxies};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "realip")]
#[command(version)]
#[command(about = "Trusted-proxy client address resolution service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Trusted proxies (comma-separated IPs and CIDR networks)
    #[arg(short = 't', long)]
    trusted_proxies: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        trusted_proxies: cli.trusted_proxies.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting realip v{}", env!("CARGO_PKG_VERSION"));

    let trusted = Arc::new(TrustedProxies::from_spec(&config.proxy.trusted_proxies)?);
    if trusted.is_empty() {
        info!("No trusted proxies configured; forwarding headers will be ignored");
    } else {
        info!(
            ipv4 = trusted.ipv4_networks().len(),
            ipv6 = trusted.ipv6_networks().len(),
            "Loaded trusted proxy networks"
        );
    }

    let state = AppState {
        resolver: Arc::new(RemoteAddressService::new(trusted)),
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    info!(bind_address = %bind_addr, "Server started");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
