//! shopcart CLI - Command-line storefront client
//!
//! Provides commands for:
//! - Browsing products and categories
//! - Managing a shopping cart that persists between runs
//! - Inspecting configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    cart::CartCommand, categories::CategoriesCommand, completions::CompletionsCommand,
    config::ConfigCommand, products::ProductsCommand,
};
use context::CliContext;
use output::{get_formatter, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "shopcart", version, about = "Storefront catalog and cart client")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Storefront base URL (overrides config and SHOPCART_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse products
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Browse categories
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Manage the shopping cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Picks the log filter: `-v` wins, then `RUST_LOG`, then `-q`, then the config
fn log_filter(verbose: u8, quiet: bool, configured: &str) -> EnvFilter {
    match verbose {
        0 => {}
        1 => return EnvFilter::new("debug"),
        _ => return EnvFilter::new("trace"),
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if quiet {
        return EnvFilter::new("error");
    }
    EnvFilter::new(configured)
}

async fn run(cli: Cli, format: OutputFormat) -> Result<()> {
    if let Commands::Completions(ref cmd) = cli.command {
        return cmd.execute();
    }

    let ctx = CliContext::load(cli.config.as_deref(), cli.api_url.clone())?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, cli.quiet, &ctx.config.logging.level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    ctx.log_resolved();

    match cli.command {
        Commands::Products(cmd) => cmd.execute(&ctx, format).await,
        Commands::Categories(cmd) => cmd.execute(&ctx, format).await,
        Commands::Cart(cmd) => cmd.execute(&ctx, format).await,
        Commands::Config(cmd) => cmd.execute(&ctx, format).await,
        Commands::Completions(_) => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    if let Err(e) = run(cli, format).await {
        get_formatter(format).error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
