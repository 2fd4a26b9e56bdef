use crate::demo::{run_demo, run_recommend, run_schemes, DemoArgs, RecommendArgs, SchemesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fra_atlas::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Forest Rights Atlas",
    about = "Serve and exercise the Forest Rights Atlas decision support system",
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
    /// List the schemes in the active catalog
    Schemes(SchemesArgs),
    /// Score a claim (JSON) or a batch of claims (CSV) against the scheme catalog
    Recommend(RecommendArgs),
    /// Walk through the sample claim from the decision support page
    Demo(DemoArgs),
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
        Command::Schemes(args) => run_schemes(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}
