// Todobench CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Concurrency is validated at parse time so the runner can
//                  assume at least one request per batch.

mod commands;
mod output;

use std::time::Duration;

use clap::{Parser, Subcommand};
use todobench_harness::RunConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "todobench")]
#[command(about = "Benchmark the todo playground API: CMS vs ORM write paths")]
#[command(version)]
pub struct Cli {
    /// Playground API base URL
    #[arg(
        long,
        env = "TODOBENCH_API_URL",
        default_value = "http://localhost:3002"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub output: output::OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full comparison: every action of both stacks
    Run {
        /// Concurrent requests per action batch
        #[arg(long, short, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        concurrency: u32,

        /// Upper bound on each cleanup call, in seconds
        #[arg(long, default_value_t = 30)]
        cleanup_timeout: u64,

        /// Skip the cleanup calls before and after the run
        #[arg(long)]
        no_cleanup: bool,
    },

    /// Benchmark a single action by its wire name
    Action {
        /// Action name as it appears in the URL, e.g. "createTodo"
        name: String,

        /// Concurrent requests for the batch
        #[arg(long, short, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        concurrency: u32,
    },

    /// List the registered actions and their stacks
    Actions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output_format = cli.output;

    match cli.command {
        Commands::Run {
            concurrency,
            cleanup_timeout,
            no_cleanup,
        } => {
            let config = RunConfig::new(&cli.api_url)
                .with_concurrency(concurrency as usize)
                .with_cleanup_timeout(Duration::from_secs(cleanup_timeout));
            commands::run::run(config, output_format, cli.quiet, no_cleanup).await
        }
        Commands::Action { name, concurrency } => {
            let config = RunConfig::new(&cli.api_url).with_concurrency(concurrency as usize);
            commands::action::run(config, output_format, &name).await
        }
        Commands::Actions => commands::actions::run(output_format),
    }
}
