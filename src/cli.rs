use crate::api::{self, Components};
use crate::config::Config;
use crate::runtime;
use crate::tools::fetch::TlsProfile;
use crate::types::{ApiResponse, InformationType, US_STATES};
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "statefacts=info";

#[derive(Parser)]
#[command(name = "statefacts", version, about = "U.S. state facts from public sources")]
pub struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true, env = "STATEFACTS_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `statefacts=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Fetch article pages for symbols without certificate verification.
    #[arg(long, global = true)]
    legacy_tls: bool,

    /// TLS version pinned for unverified fetches (TLSv1.2 or TLSv1.3).
    #[arg(long, global = true)]
    tls_profile: Option<TlsProfile>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web front end.
    Serve(ServeArgs),
    /// Look up one state and print the result as JSON.
    Lookup(LookupArgs),
    /// List the supported state names.
    States,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on, e.g. 0.0.0.0:8080.
    #[arg(long)]
    bind: Option<String>,
}

#[derive(Args)]
struct LookupArgs {
    /// Display name, e.g. "New York".
    state: String,

    #[arg(long = "type", value_enum, default_value_t = Kind::Facts)]
    kind: Kind,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Population, flag, seal and image credits.
    Symbols,
    /// Capital and governor.
    Facts,
}

impl From<Kind> for InformationType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Symbols => InformationType::Symbols,
            Kind::Facts => InformationType::Facts,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.legacy_tls {
        config.legacy_tls = true;
    }
    if let Some(profile) = cli.tls_profile {
        config.tls_profile = profile;
    }

    match cli.cmd {
        Command::States => {
            for state in US_STATES {
                println!("{state}");
            }
        }
        Command::Lookup(args) => {
            let components = Components::from_config(&config)?;
            let res = runtime::block_on(api::lookup(&components, &args.state, args.kind.into()))?;
            finish(res);
        }
        Command::Serve(args) => {
            if let Some(bind) = args.bind {
                config.bind = bind;
            }
            let components = Arc::new(Components::from_config(&config)?);
            runtime::block_on(crate::server::start(&config.bind, components))??;
        }
    }
    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn finish<T: serde::Serialize>(res: crate::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => print_json(ApiResponse::<()>::err(e.to_string())),
    }
}

fn print_json<T: serde::Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not encode output: {e}"),
    }
}
