use std::io::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::partition::{PartitionSummary, PublishedBucket, SkippedBucket};
use crate::stats::BucketStats;

/// Digest prefix shown in human-readable reports.
const SHORT_DIGEST: usize = 12;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    dataset: String,
    output: String,
    total_games: usize,
    totals: BucketStats,
    clean: bool,
    buckets: &'a [PublishedBucket],
    skipped: &'a [SkippedBucket],
}

fn short(digest: &str) -> &str {
    digest.get(..SHORT_DIGEST).unwrap_or(digest)
}

pub fn generate_console_report(
    out: &mut dyn Write,
    summary: &PartitionSummary,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Partition Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "====================".cyan())?;

    for bucket in &summary.buckets {
        let status = if bucket.findings.is_empty() {
            "✅".green()
        } else {
            "⚠️ ".yellow()
        };
        writeln!(out, "{status} {}", bucket.info.name.bold())?;
        writeln!(out, "   Path: {}", bucket.info.path)?;
        writeln!(
            out,
            "   Winners: {} good / {} evil",
            bucket.stats.good_wins.to_string().green(),
            bucket.stats.evil_wins.to_string().red()
        )?;
        if bucket.stats.undecided > 0 {
            writeln!(out, "   Undecided: {}", bucket.stats.undecided.to_string().yellow())?;
        }
        writeln!(
            out,
            "   Assassin: {}/{} hit Merlin",
            bucket.stats.assassin_hits, bucket.stats.assassin_attempts
        )?;
        writeln!(out, "   Digest: {}", short(&bucket.digest).dimmed())?;
        if !bucket.findings.is_empty() {
            writeln!(
                out,
                "   Audit: {} game(s) flagged",
                bucket.findings.len().to_string().yellow()
            )?;
        }
        if verbose {
            for finding in &bucket.findings {
                writeln!(out, "     • {}", finding.game_id().yellow())?;
                for detail in finding.details() {
                    writeln!(out, "         {detail}")?;
                }
            }
        }
    }

    if !summary.skipped.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "⏭️  Skipped".bright_yellow().bold())?;
        for skipped in &summary.skipped {
            writeln!(out, "   {} ({})", skipped.source_dir, skipped.reason)?;
        }
    }

    let totals = summary.totals();
    writeln!(out)?;
    writeln!(out, "Tournaments: {}", summary.buckets.len())?;
    writeln!(out, "Total games: {}", totals.games)?;
    writeln!(out, "Good win rate: {:.1}%", totals.good_win_rate())?;
    let flagged = summary.findings().count();
    if flagged == 0 {
        writeln!(out, "Audit: {}", "all games clean".green())?;
    } else {
        writeln!(out, "Audit: {}", format!("{flagged} game(s) flagged").red())?;
    }
    writeln!(out, "Output directory: {}", output.display())?;
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    summary: &PartitionSummary,
    dataset: &Path,
    output: &Path,
) -> Result<()> {
    let totals = summary.totals();
    let report = JsonReport {
        dataset: dataset.display().to_string(),
        output: output.display().to_string(),
        total_games: totals.games,
        totals,
        clean: !summary.has_findings(),
        buckets: &summary.buckets,
        skipped: &summary.skipped,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, summary: &PartitionSummary) -> Result<()> {
    writeln!(out, "# Avalon Dataset Partition Report\n")?;

    let totals = summary.totals();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Tournaments**: {}", summary.buckets.len())?;
    writeln!(out, "- **Total games**: {}", totals.games)?;
    writeln!(out, "- **Good win rate**: {:.1}%", totals.good_win_rate())?;
    writeln!(
        out,
        "- **Assassin hits**: {}/{}\n",
        totals.assassin_hits, totals.assassin_attempts
    )?;

    writeln!(out, "## Tournaments\n")?;
    writeln!(
        out,
        "| Tournament | Path | Games | Good | Evil | Assassin | Digest |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|---|")?;
    for bucket in &summary.buckets {
        writeln!(
            out,
            "| {} | `{}` | {} | {} | {} | {}/{} | `{}` |",
            bucket.info.name,
            bucket.info.path,
            bucket.info.games,
            bucket.stats.good_wins,
            bucket.stats.evil_wins,
            bucket.stats.assassin_hits,
            bucket.stats.assassin_attempts,
            short(&bucket.digest)
        )?;
    }
    writeln!(out)?;

    if !summary.skipped.is_empty() {
        writeln!(out, "## Skipped\n")?;
        for skipped in &summary.skipped {
            writeln!(out, "- `{}`: {}", skipped.source_dir, skipped.reason)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Audit\n")?;
    if !summary.has_findings() {
        writeln!(out, "_All games clean._")?;
        return Ok(());
    }
    for (bucket, finding) in summary.findings() {
        writeln!(out, "### {} ({})\n", finding.game_id(), bucket.info.path)?;
        for detail in finding.details() {
            writeln!(out, "- {detail}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
