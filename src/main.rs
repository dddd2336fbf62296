use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wifiscan::{
    api,
    config::Config,
    output::{print_result, OutputFormat},
    runner::SystemRunner,
    service::ScanService,
};

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "wifiscan")]
#[command(
    author,
    version,
    about = "Serve nearby WiFi access points over HTTP"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server exposing GET /api/wifi
    Serve {
        /// Address to bind (default from config: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default from config: 8000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Scan once and print the result
    Scan {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Platform identifier to scan as (darwin, windows); defaults to the host
        #[arg(long)]
        platform: Option<String>,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let service = Arc::new(ScanService::new(config.clone()));
            api::serve(service, &config).await?;
            Ok(exit_codes::SUCCESS)
        }
        Commands::Scan { format, platform } => run_scan(config, &format, platform).await,
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { config.log_filter.as_str() };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_scan(config: Config, format: &str, platform: Option<String>) -> Result<u8> {
    let format = OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?;

    let service = match platform {
        Some(id) => ScanService::with_runner(Arc::new(SystemRunner), id, config),
        None => ScanService::new(config),
    };

    let progress = if format == OutputFormat::Table {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Scanning WiFi networks ({})...", service.platform_id()));
        Some(pb)
    } else {
        None
    };

    let result = service.scan().await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_result(&result, format)?;

    if result.is_ok() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::ERROR)
    }
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'wifiscan config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
