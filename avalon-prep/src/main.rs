mod partition;
mod reports;
mod stats;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::error;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use avalon_core::partition_plan;
use partition::Partitioner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Coloured summary for a terminal
    Console,
    /// Machine-readable summary
    Json,
    /// Markdown tables for CI logs
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "avalon-prep", version)]
#[command(about = "Partition recorded Avalon games into tournament buckets for the static viewer")]
struct Args {
    /// Upstream dataset root holding the category directories
    #[arg(long, default_value = "dataset")]
    dataset: PathBuf,

    /// Output root; removed and recreated on every run
    #[arg(long, default_value = "avalon-web/static/data")]
    output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report to instead of stdout
    #[arg(long)]
    report_output: Option<PathBuf>,

    /// Treat any audit finding as fatal
    #[arg(long)]
    strict: bool,

    /// Print the partition plan and exit
    #[arg(long)]
    list_buckets: bool,

    /// Print per-game audit details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_buckets(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console || args.report_output.is_some() {
        announce_banner();
    }

    let summary = Partitioner::new(&args.dataset, &args.output)
        .run()
        .with_context(|| format!("partitioning {} failed", args.dataset.display()))?;

    let mut sink = report_sink(args.report_output.as_deref())?;
    match args.report {
        ReportFormat::Json => {
            reports::generate_json_report(&mut sink, &summary, &args.dataset, &args.output)?;
        }
        ReportFormat::Markdown => reports::generate_markdown_report(&mut sink, &summary)?,
        ReportFormat::Console => {
            reports::generate_console_report(&mut sink, &summary, &args.output, args.verbose)?;
        }
    }
    sink.flush()?;

    if args.strict && summary.has_findings() {
        error!(
            "{} game(s) failed the audit in strict mode",
            summary.findings().count()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_buckets(args: &Args) -> Result<bool> {
    if !args.list_buckets {
        return Ok(false);
    }
    let mut sink = report_sink(args.report_output.as_deref())?;
    writeln!(sink, "Partition plan:")?;
    for spec in partition_plan() {
        writeln!(
            sink,
            "  {} {:45} -> {}",
            spec.category.letter(),
            spec.source_dir,
            spec.output_path
        )?;
    }
    sink.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏰 Avalon Dataset Partitioner".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

/// Where reports and the plan listing go: a file when `--report-output` is
/// given, stdout otherwise.
fn report_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout().lock())),
    };
    Ok(sink)
}
