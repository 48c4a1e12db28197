use crate::report::{
    run_import, run_interview, run_personas, run_questions, run_recommend, CatalogArgs,
    ImportArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use service_finder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Federal Service Finder",
    about = "Score the federal readiness assessment and serve persona recommendations",
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
    /// List the assessment questions and their options
    Questions(CatalogArgs),
    /// Show the persona score ranges and packages
    Personas(CatalogArgs),
    /// Score a set of answers and print the matched persona
    Recommend(RecommendArgs),
    /// Score every respondent in a CSV answer export
    Import(ImportArgs),
    /// Walk through the assessment interactively on stdin
    Interview,
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
        Command::Questions(args) => run_questions(args),
        Command::Personas(args) => run_personas(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Import(args) => run_import(args),
        Command::Interview => run_interview(),
    }
}
