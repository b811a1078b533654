use crate::infra::{build_evaluator, parse_score};
use crate::report::{render_eligibility, render_score_report, render_snapshot};
use crate::server;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use credito_rd::eligibility::EligibilityInput;
use credito_rd::error::AppError;
use credito_rd::scoring::{calculate_score, FactorInput};
use credito_rd::snapshot::{JsonFileSnapshotStore, Snapshot, SnapshotStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "credito-rd",
    about = "Estimate a FICO-style credit score and loan eligibility from the command line",
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
    /// Score a profile and print the printable report
    Score(ScoreArgs),
    /// Show the last saved score snapshot
    Snapshot(SnapshotArgs),
    /// Evaluate loan eligibility for a monthly budget
    Eligibility(EligibilityArgs),
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
pub(crate) struct ScoreArgs {
    /// Share of payments made on time (0-100)
    #[arg(long, default_value_t = 80.0)]
    pub(crate) on_time: f64,
    /// Share of available credit in use (0-100)
    #[arg(long, default_value_t = 50.0)]
    pub(crate) utilization: f64,
    /// Age of the credit history in years
    #[arg(long, default_value_t = 3.0)]
    pub(crate) credit_age: f64,
    /// Number of distinct credit types held
    #[arg(long, default_value_t = 2.0)]
    pub(crate) credit_types: f64,
    /// Hard inquiries in the last two years
    #[arg(long, default_value_t = 3.0)]
    pub(crate) inquiries: f64,
    /// Save the result as the latest snapshot at this path
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

impl ScoreArgs {
    fn input(&self) -> FactorInput {
        FactorInput {
            on_time_percent: self.on_time,
            utilization_percent: self.utilization,
            credit_age_years: self.credit_age,
            credit_types: self.credit_types,
            inquiries_count: self.inquiries,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// Snapshot file written by `score --snapshot`
    #[arg(long)]
    pub(crate) path: PathBuf,
    /// Delete the snapshot instead of printing it
    #[arg(long)]
    pub(crate) clear: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Monthly income in RD$
    #[arg(long)]
    pub(crate) income: f64,
    /// Monthly fixed expenses in RD$
    #[arg(long)]
    pub(crate) expenses: f64,
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: i32,
    /// Months at the current job
    #[arg(long)]
    pub(crate) employment: i32,
    /// Credit score (300-850)
    #[arg(long, value_parser = parse_score)]
    pub(crate) score: i32,
    /// Remote evaluator endpoint; falls back to the local engine on failure
    #[arg(long)]
    pub(crate) remote_url: Option<String>,
}

impl EligibilityArgs {
    fn input(&self) -> EligibilityInput {
        EligibilityInput {
            income: self.income,
            expenses: self.expenses,
            age: self.age,
            employment_months: self.employment,
            score: self.score,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Snapshot(args) => run_snapshot(args),
        Command::Eligibility(args) => run_eligibility(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let inputs = args.input();
    let result = calculate_score(&inputs);

    print!(
        "{}",
        render_score_report(&inputs, &result, Local::now().date_naive())
    );

    if let Some(path) = args.snapshot {
        let store = JsonFileSnapshotStore::new(path);
        let saved = store.save(Snapshot { inputs, result })?;
        println!(
            "\nSnapshot saved to {} ({})",
            store.path().display(),
            saved.saved_label()
        );
    }

    Ok(())
}

fn run_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let store = JsonFileSnapshotStore::new(args.path);

    if args.clear {
        store.clear()?;
        println!("Snapshot cleared: {}", store.path().display());
        return Ok(());
    }

    match store.load()? {
        Some(saved) => print!("{}", render_snapshot(&saved)),
        None => println!("No snapshot saved at {}", store.path().display()),
    }
    Ok(())
}

async fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let evaluator = build_evaluator(args.remote_url.as_deref());
    let view = evaluator.evaluate(&args.input()).await;
    print!("{}", render_eligibility(&view));
    Ok(())
}
