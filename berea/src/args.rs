use std::path::PathBuf;

use clap::Parser;

/// Berea scripture chat gateway
#[derive(Debug, Parser)]
#[command(name = "berea", about = "Scripture-aware chat gateway")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "berea.toml", env = "BEREA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "BEREA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
