// Standard library
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

// 3rd party crates
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use wanip::{Client, DiscoveryError, IpVersion, Method, Settings};

/// Discovers your public IP address using STUN, DNS or HTTP.
#[derive(Debug, Parser)]
#[command(name = "wanip", version, about)]
struct Args {
    /// IP version to discover (4 or 6); both are tried when unset
    #[arg(short = 'v', long = "ip-version")]
    ip_version: Option<IpVersion>,

    /// Discovery method (stun, dns or http); all are tried in order when
    /// unset
    #[arg(short, long)]
    method: Option<Method>,

    /// Overall timeout in seconds for the whole discovery call
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Path to a TOML settings file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    // setup logging on stderr, keeping stdout for the discovered address.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(ip) => {
            println!("{}", ip);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<IpAddr, Box<dyn std::error::Error>> {
    let settings = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let client = Client::with_settings(settings);
    let version = args.ip_version.unwrap_or(IpVersion::Any);
    let deadline = Duration::from_secs(args.timeout);

    let discovery = async {
        match args.method {
            Some(method) => client.discover_with_method(method, version).await,
            None => client.discover_with_version(version).await,
        }
    };

    match tokio::time::timeout(deadline, discovery).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(DiscoveryError::Timeout.into()),
    }
}
