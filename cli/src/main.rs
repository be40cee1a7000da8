//! trialmatch — command-line front end.
//!
//! Matches patients to clinical trials by their free-text eligibility
//! criteria and exports the matches.
//!
//! Usage:
//!   cargo run -p trialmatch-cli -- sample
//!   cargo run -p trialmatch-cli -- run --data records.json --json-out eligible_patients.json
//!   cargo run -p trialmatch-cli -- run --data records.json --table-out matches.tsv --tsv
//!   cargo run -p trialmatch-cli -- parse-age "Age between 40 and 60 years"

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trialmatch_contracts::{AgeRange, MatchReport, MatchResult, RunSummary};
use trialmatch_core::{traits::DataProvider, Matcher};
use trialmatch_criteria::{parse_age_clause, CriteriaConfig, CriteriaEvaluator};
use trialmatch_io::{
    DelimitedFileSink, Delimiter, FanOutSink, FixtureProvider, JsonFileProvider, JsonFileSink,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// trialmatch — match patients to clinical trials by eligibility criteria.
#[derive(Parser)]
#[command(
    name = "trialmatch",
    version,
    about = "Match patients to clinical trials",
    long_about = "Evaluates every patient against every trial's inclusion and exclusion\n\
                  criteria and exports the matches as JSON and/or a delimited table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match the embedded sample data set (8 trials, 10 patients).
    Sample(ExportArgs),
    /// Match a JSON data set of the form { "trials": [...], "patients": [...] }.
    Run {
        /// Path to the JSON data set.
        #[arg(short, long)]
        data: PathBuf,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Show the age window parsed from a criteria string.
    ParseAge {
        /// Inclusion criteria text.
        text: String,
    },
}

#[derive(Args)]
struct ExportArgs {
    /// TOML file with evaluator settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the reports as JSON to this path.
    #[arg(long)]
    json_out: Option<PathBuf>,
    /// Write one row per match to this path.
    #[arg(long)]
    table_out: Option<PathBuf>,
    /// Use tabs instead of commas in the table file.
    #[arg(long, requires = "table_out")]
    tsv: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every per-pair verdict.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Sample(export) => run_match(&FixtureProvider, &export),
        Command::Run { data, export } => {
            JsonFileProvider::open(data).and_then(|provider| run_match(&provider, &export))
        }
        Command::ParseAge { text } => {
            parse_age(&text);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("trialmatch error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_match(provider: &dyn DataProvider, export: &ExportArgs) -> MatchResult<()> {
    let config = match &export.config {
        Some(path) => CriteriaConfig::from_file(path)?,
        None => CriteriaConfig::default(),
    };

    let matcher = Matcher::new(Box::new(CriteriaEvaluator::from_config(&config)));
    let sink = build_sink(export);

    let (reports, summary) = matcher.run(provider, &sink)?;
    info!(
        run_id = %summary.run_id,
        matches = summary.matches,
        json_out = ?export.json_out,
        table_out = ?export.table_out,
        "exports written"
    );

    print_reports(&reports);
    print_summary(&summary);
    if let Some(path) = &export.json_out {
        println!("  JSON report:    {}", path.display());
    }
    if let Some(path) = &export.table_out {
        println!("  Match table:    {}", path.display());
    }
    println!();

    Ok(())
}

fn build_sink(export: &ExportArgs) -> FanOutSink {
    let mut sink = FanOutSink::new();
    if let Some(path) = &export.json_out {
        sink.push(Box::new(JsonFileSink::new(path)));
    }
    if let Some(path) = &export.table_out {
        let delimiter = if export.tsv || has_extension(path, "tsv") {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        };
        sink.push(Box::new(DelimitedFileSink::new(path, delimiter)));
    }
    sink
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn parse_age(text: &str) {
    println!();
    match parse_age_clause(text) {
        Ok(clause) => {
            let range = clause.to_range(AgeRange::UNBOUNDED);
            match clause.pattern() {
                Some(pattern) => println!("  Phrase:          '{}'", pattern.marker()),
                None => println!("  Phrase:          none recognized"),
            }
            println!("  Eligible ages:   {}", range);
        }
        Err(e) => {
            println!("  Parse result:    {}", e);
            println!("  Eligible ages:   {} (fallback)", AgeRange::UNBOUNDED);
        }
    }
    println!();
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_reports(reports: &[MatchReport]) {
    println!();
    println!("  {:<12} {:<8} Trial", "Patient", "Trial ID");
    println!("  {:-<12} {:-<8} {:-<40}", "", "", "");
    for report in reports {
        if report.eligible_trials.is_empty() {
            println!("  {:<12} {:<8} (no eligible trials)", report.patient_id, "-");
            continue;
        }
        for m in &report.eligible_trials {
            println!("  {:<12} {:<8} {}", report.patient_id, m.trial_id, m.trial_name);
        }
    }
    println!();
}

fn print_summary(summary: &RunSummary) {
    println!("  Run:            {}", summary.run_id);
    println!(
        "  Evaluated:      {} patient(s) x {} trial(s) = {} pair(s)",
        summary.patients, summary.trials, summary.pairs_evaluated
    );
    println!("  Matches:        {}", summary.matches);
    println!(
        "  Elapsed:        {} ms",
        (summary.finished_at - summary.started_at).num_milliseconds()
    );
}
