use crate::server;
use benefit_check::error::AppError;
use benefit_check::intake::evaluate_form;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Benefit Check",
    about = "Run the benefit simulators over HTTP or evaluate a saved form from the command line",
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
    /// Evaluate a form stored as JSON and print the verdict
    Evaluate(EvaluateArgs),
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

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Program to evaluate: imv, bono-alquiler-joven or subsidio-52
    #[arg(long, default_value = "imv")]
    pub(crate) program: String,
    /// Path to a JSON file holding the form fields
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    println!("{}", render_evaluation(&args.program, &raw)?);
    Ok(())
}

fn render_evaluation(program: &str, raw: &str) -> Result<String, AppError> {
    let form: serde_json::Value = serde_json::from_str(raw)?;
    let verdict = evaluate_form(program, &form)?;
    let body = serde_json::to_string_pretty(&verdict)?;
    Ok(format!("{body}\n\n{}", verdict.summary()))
}
