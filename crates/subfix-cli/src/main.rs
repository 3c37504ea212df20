//! subfix — convert, check and repair subtitle files.
//!
//! Thin wrapper over `subfix-core`: reads a file, resolves the format
//! (explicit flag first, then content sniffing, then the filename
//! extension), runs the requested engine operation and writes the result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use subfix_core::fix::{self, FixConfig};
use subfix_core::formats;
use subfix_core::lint::{self, LintConfig, LintIssue};
use subfix_core::qc::{self, QcReport, ThresholdProfile};
use subfix_core::{Collection, SubtitleFormat};

#[derive(Parser)]
#[command(name = "subfix", version, about = "Subtitle converter, checker and fixer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a subtitle file to another format
    Convert {
        /// Input file
        input: PathBuf,
        /// Output file; its extension selects the target format
        #[arg(short, long)]
        output: PathBuf,
        /// Source format override (srt, vtt, ass)
        #[arg(long)]
        from: Option<String>,
        /// Target format override; defaults to the output extension
        #[arg(long)]
        to: Option<String>,
    },
    /// Report quality-control and lint issues
    Check {
        /// Input file
        input: PathBuf,
        /// Threshold profile id (standard, netflix, relaxed)
        #[arg(long, default_value = "standard")]
        profile: String,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply the auto-repair pipeline
    Fix {
        /// Input file
        input: PathBuf,
        /// Output file; defaults to rewriting the input in place
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Threshold profile id driving the repair thresholds
        #[arg(long, default_value = "standard")]
        profile: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Convert {
            input,
            output,
            from,
            to,
        } => convert(&input, &output, from.as_deref(), to.as_deref()),
        Command::Check {
            input,
            profile,
            json,
        } => check(&input, &profile, json),
        Command::Fix {
            input,
            output,
            profile,
        } => {
            let target = output.unwrap_or_else(|| input.clone());
            fix_file(&input, &target, &profile)
        }
    }
}

/// Resolve the source format: explicit flag, then content sniffing, then
/// the filename extension for content the sniffer can only call SRT by
/// fallback.
fn resolve_format(text: &str, path: &Path, explicit: Option<&str>) -> Result<SubtitleFormat> {
    if let Some(name) = explicit {
        return Ok(SubtitleFormat::from_name(name)?);
    }
    let sniffed = formats::detect_from_content(text);
    if sniffed != SubtitleFormat::Srt {
        return Ok(sniffed);
    }
    Ok(formats::detect_from_filename(&path.to_string_lossy()))
}

fn load(input: &Path, explicit: Option<&str>) -> Result<(Collection, SubtitleFormat)> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let format = resolve_format(&text, input, explicit)?;
    let (collection, report) = formats::parse_with_report(&text, format);
    info!(
        entries = collection.len(),
        format = format.name(),
        "parsed {}",
        input.display()
    );
    for issue in &report.issues {
        debug!(line = issue.line, "{}", issue.message);
    }
    Ok((collection, format))
}

fn convert(input: &Path, output: &Path, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let (collection, _) = load(input, from)?;
    let target = match to {
        Some(name) => SubtitleFormat::from_name(name)?,
        None => formats::detect_from_filename(&output.to_string_lossy()),
    };
    let serialized = formats::serialize(&collection, target);
    fs::write(output, serialized)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(format = target.name(), "wrote {}", output.display());
    Ok(())
}

/// Combined check output: lint issues plus per-entry QC.
#[derive(Serialize)]
struct CheckReport {
    profile: &'static str,
    entries: usize,
    issues: Vec<LintIssue>,
    qc: Vec<QcReport>,
}

fn check(input: &Path, profile: &str, json: bool) -> Result<()> {
    let profile = ThresholdProfile::by_id(profile)?;
    let (collection, _) = load(input, None)?;

    let issues = lint::detect_all_errors(&collection, &lint_config(profile));
    let reports: Vec<QcReport> = collection
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| qc::evaluate(entry, collection.entries.get(i + 1), profile))
        .collect();

    if json {
        let report = CheckReport {
            profile: profile.id,
            entries: collection.len(),
            issues,
            qc: reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for issue in &issues {
        println!("#{} [{}] {}", issue.index, issue.kind, issue.message);
    }
    let flagged = reports.iter().filter(|r| !r.issues.is_empty()).count();
    println!(
        "{} entries, {} lint issues, {} entries over QC thresholds ({})",
        collection.len(),
        issues.len(),
        flagged,
        profile.name
    );
    Ok(())
}

fn fix_file(input: &Path, output: &Path, profile: &str) -> Result<()> {
    let profile = ThresholdProfile::by_id(profile)?;
    let (collection, format) = load(input, None)?;

    let fixed = fix::fix_all(&collection, &fix_config(profile));
    info!(
        before = collection.len(),
        after = fixed.len(),
        "repair pipeline finished"
    );

    let serialized = formats::serialize(&fixed, format);
    fs::write(output, serialized)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

fn lint_config(profile: &ThresholdProfile) -> LintConfig {
    LintConfig {
        max_chars_per_line: profile.max_cpl,
        min_duration_ms: profile.min_duration_ms,
        max_duration_ms: profile.max_duration_ms,
        min_gap_ms: profile.min_gap_ms,
    }
}

fn fix_config(profile: &ThresholdProfile) -> FixConfig {
    FixConfig {
        max_chars_per_line: profile.max_cpl,
        min_duration_ms: profile.min_duration_ms,
        max_duration_ms: profile.max_duration_ms,
        min_gap_ms: profile.min_gap_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_content() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nhi\n";
        let format = resolve_format(srt, Path::new("file.srt"), Some("vtt")).unwrap();
        assert_eq!(format, SubtitleFormat::WebVtt);
    }

    #[test]
    fn content_sniffing_beats_extension() {
        let vtt = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nhi\n";
        let format = resolve_format(vtt, Path::new("mislabeled.srt"), None).unwrap();
        assert_eq!(format, SubtitleFormat::WebVtt);
    }

    #[test]
    fn extension_resolves_ambiguous_content() {
        // Nothing in the text marks a format; the extension decides.
        let format = resolve_format("", Path::new("empty.ssa"), None).unwrap();
        assert_eq!(format, SubtitleFormat::Ass);
    }

    #[test]
    fn convert_writes_target_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.srt");
        let output = dir.path().join("out.vtt");
        fs::write(&input, "1\n00:00:01,000 --> 00:00:02,000\nhello\n").unwrap();

        convert(&input, &output, None, None).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("WEBVTT\n\n"));
        assert!(written.contains("00:00:01.000 --> 00:00:02.000"));
    }

    #[test]
    fn fix_repairs_in_place_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("messy.srt");
        fs::write(
            &input,
            "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n2\n00:00:02,000 --> 00:00:05,000\nWorld\n",
        )
        .unwrap();

        fix_file(&input, &input, "standard").unwrap();

        let written = fs::read_to_string(&input).unwrap();
        assert!(written.contains("00:00:01,000 --> 00:00:01,900"));
    }
}
