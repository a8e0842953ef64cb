use bodyguard_server::LogFormat;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bodyguard",
    version,
    about = "HTTP request inspector: 403 for any JSON body carrying \"is_malicious\": true"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Inspect one JSON document from a file or stdin
    Scan(ScanArgs),
}

/// Flags override `BODYGUARD_*` environment variables, which override defaults.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to listen on (default 127.0.0.1:5000)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Bodies larger than this are accepted without inspection (at least 1)
    #[arg(long)]
    pub max_body_bytes: Option<NonZeroUsize>,

    /// text | json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// JSON file to inspect; "-" or omitted reads stdin
    pub input: Option<PathBuf>,
}
