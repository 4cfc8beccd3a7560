use clap::Parser;
use data_display_config::Config;
use data_display_server::{AppState, create_router};

#[derive(Parser)]
#[command(
    name = "data-display-server",
    version,
    about = "Serve the data display input form and JSON API"
)]
struct Cli {
    /// Address to bind (default from config, else 127.0.0.1)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (default from config, else 5000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::info!("Config path: {}", Config::config_path().display());
    let config = Config::load_or_default()?;

    let mut server = config.server;
    if let Some(host) = cli.host {
        server.host = host;
    }
    if let Some(port) = cli.port {
        server.port = port;
    }

    let app = create_router(AppState::new(config.display));

    let addr = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Open your browser and visit: http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
