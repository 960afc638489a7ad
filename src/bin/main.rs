use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use corpus_core::logging::init_logging;
use corpus_core::pipeline::{self, Operation, Report, DEFAULT_PREVIEW};
use crossterm::style::Stylize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corpus_filter")]
#[command(about = "Cleans {english, translation} vocabulary corpora")]
#[command(version)]
struct Cli {
    /// Print run reports as JSON on stdout instead of the summary
    #[arg(long, global = true)]
    json: bool,

    /// Only log warnings and errors (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Files {
    /// Corpus file to read
    input: PathBuf,
    /// File to write the result to (may be the input)
    output: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove records whose English word is a number word
    Numbers(Files),
    /// Keep only the first record for each English word
    Dedup(Files),
    /// Remove records where both sides are English
    BothEnglish(Files),
    /// Sort records alphabetically by English word
    Sort {
        #[command(flatten)]
        files: Files,
        /// How many sorted lines to show afterwards
        #[arg(long, default_value_t = DEFAULT_PREVIEW)]
        preview: usize,
    },
    /// Apply several operations in order, writing once
    Run {
        #[command(flatten)]
        files: Files,
        /// Comma-separated: numbers, dedup, both-english, sort
        #[arg(long)]
        steps: String,
        #[arg(long, default_value_t = DEFAULT_PREVIEW)]
        preview: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let (files, reports) = match cli.command {
        Commands::Numbers(files) => {
            let report = pipeline::run_operation(Operation::Numbers, &files.input, &files.output, DEFAULT_PREVIEW);
            (files, vec![report?])
        }
        Commands::Dedup(files) => {
            let report = pipeline::run_operation(Operation::Dedup, &files.input, &files.output, DEFAULT_PREVIEW);
            (files, vec![report?])
        }
        Commands::BothEnglish(files) => {
            let report =
                pipeline::run_operation(Operation::BothEnglish, &files.input, &files.output, DEFAULT_PREVIEW);
            (files, vec![report?])
        }
        Commands::Sort { files, preview } => {
            let report = pipeline::run_operation(Operation::Sort, &files.input, &files.output, preview);
            (files, vec![report?])
        }
        Commands::Run { files, steps, preview } => {
            let steps = pipeline::parse_steps(&steps).context("invalid --steps")?;
            let reports = pipeline::run_chain(&steps, &files.input, &files.output, preview)?;
            (files, reports)
        }
    };

    if cli.json {
        let out = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{}", out);
    } else {
        for report in &reports {
            print_summary(report);
        }
        println!("\n{} {}", "Saved to".green(), files.output.display());
    }
    Ok(())
}

fn print_summary(report: &Report) {
    println!("\n{}", format!("[{}] done", report.operation).bold());
    println!("  Lines read:  {}", report.lines_read);
    if report.blank + report.malformed > 0 {
        println!(
            "  Skipped:     {} ({} blank, {} malformed)",
            (report.blank + report.malformed).to_string().yellow(),
            report.blank,
            report.malformed
        );
    }
    println!("  Records:     {}", report.records);
    println!("  Retained:    {}", report.retained.to_string().green());
    println!("  Removed:     {}", report.removed.to_string().red());

    if !report.preview.is_empty() {
        println!("\n  First {} entries:", report.preview.len());
        for line in &report.preview {
            println!("    {}", line);
        }
    }
}
