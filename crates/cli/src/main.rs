use clap::Parser;
use dnslink_gatekeeper_domain::{CliOverrides, Config, UpstreamKind};
use tracing::{debug, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnslink-gatekeeper")]
#[command(version)]
#[command(about = "DNSLink Gatekeeper - allows a domain only when it publishes a valid DNSLink record")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port (overrides PORT)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (system, google, cloudflare, quad9)
    #[arg(short = 'u', long)]
    upstream: Option<UpstreamKind>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!(
        upstream = %config.resolver.upstream,
        timeout_secs = config.resolver.timeout_secs,
        attempts = config.resolver.attempts,
        "Starting DNSLink Gatekeeper v{}",
        env!("CARGO_PKG_VERSION")
    );

    match cli.config.clone().or_else(Config::get_config_path) {
        Some(path) => debug!(path = %path, "Configuration file in use"),
        None => debug!("No configuration file found, using defaults"),
    }

    let app_state = di::Services::new(&config)?.into_app_state();

    let web_addr = config.server.listen_address()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
