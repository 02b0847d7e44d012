use anyhow::Result;
use axum::Router;
use clap::Parser;
use server::{build_app, Settings};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Document list file, one document path per line
    #[arg(long)]
    docs: PathBuf,
    /// Noise word file (defaults to a built-in English list)
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Skip listed documents that cannot be opened
    #[arg(long, default_value_t = false)]
    skip_missing: bool,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let settings = Settings {
        docs: args.docs,
        noise: args.noise,
        skip_missing: args.skip_missing,
        admin_token: std::env::var("ADMIN_TOKEN").ok(),
        // comma-separated; any origin when unset
        cors_origins: std::env::var("CORS_ALLOW_ORIGIN")
            .map(|v| v.split(',').map(str::to_owned).collect())
            .unwrap_or_default(),
    };
    let app: Router = build_app(settings)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
