mod cli;
mod core;
mod server;

use clap::{Parser, Subcommand};

use crate::cli::estimate_cmd::EstimateRequest;
use crate::core::pricing::PricingTable;

#[derive(Parser)]
#[command(name = "ccost", about = "Cloud service monthly cost estimator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the cost tools and pricing resources over stdio (JSON-RPC)
    Serve,
    /// Estimate the monthly cost of a service locally
    Estimate {
        #[command(subcommand)]
        request: EstimateRequest,
    },
    /// Show pricing data for a service, or the region table
    Pricing {
        /// Service id (compute|storage|database|invocation|regions)
        service: String,

        /// Region to resolve pricing for
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Generate default config file
    Init,
    /// Validate config file
    Check,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let output_opts = cli::output::OutputOptions {
        format: if cli.json {
            cli::output::OutputFormat::Json
        } else {
            match cli.format.as_deref() {
                Some("json") => cli::output::OutputFormat::Json,
                _ => cli::output::OutputFormat::Text,
            }
        },
        pretty: cli.pretty,
        use_color: cli::output::detect_color(!cli.no_color),
        verbose: cli.verbose,
    };

    let table = PricingTable::builtin();

    match cli.command {
        Commands::Serve => {
            init_tracing(cli.verbose);
            server::run(table).await?;
        }
        Commands::Estimate { request } => {
            cli::estimate_cmd::run(&table, request, &output_opts)?;
        }
        Commands::Pricing { service, region } => {
            cli::pricing_cmd::run(&table, &service, region, &output_opts)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => cli::config_cmd::init(&table, &output_opts)?,
            ConfigAction::Check => cli::config_cmd::check(&table, &output_opts)?,
        },
    }

    Ok(())
}
