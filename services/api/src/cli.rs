use crate::demo::{run_demo, run_optimize, OptimizeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecoroute::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EcoRoute",
    about = "Score shipments for cost, carbon, and autonomous execution from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single shipment and print the optimization report
    Optimize(OptimizeArgs),
    /// Run a walkthrough over a few representative shipments
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Optimize(args) => run_optimize(args),
        Command::Demo => run_demo(),
    }
}
