//! Seqshot path annotator
//!
//! Reads production paths (as arguments, or one per stdin line) and prints
//! the sequence and shot found in each. Output can be filtered to a single
//! sequence/shot or grouped into a sequence -> shot -> paths tree.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seqshot_core::{
    Annotated, Engine, EngineConfig, SequenceTree, TokenFilter, group_by_sequence,
};
use tracing::{Level, debug, info};

/// Placeholder printed for a label that was not found.
const MISSING: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Tab-separated `path, sequence, shot`
    Tsv,
}

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "seqshot-parse")]
#[command(about = "Extract sequence and shot labels from production paths")]
#[command(version)]
struct Cli {
    /// Paths to annotate (reads stdin when omitted)
    paths: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, env = "SEQSHOT_FORMAT", default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print a single JSON tree of sequence -> shot -> paths
    #[arg(short, long)]
    group: bool,

    /// Only keep paths with this sequence (case-insensitive)
    #[arg(long)]
    sequence: Option<String>,

    /// Only keep paths with this shot (case-insensitive)
    #[arg(long)]
    shot: Option<String>,

    /// Recompute every path instead of memoizing results
    #[arg(long, env = "SEQSHOT_NO_CACHE")]
    no_cache: bool,

    /// Log cache statistics when done
    #[arg(long)]
    stats: bool,

    /// Log verbosity (written to stderr)
    #[arg(long, env = "SEQSHOT_LOG", default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn filter(&self) -> TokenFilter {
        TokenFilter {
            sequence: self.sequence.clone(),
            shot: self.shot.clone(),
        }
    }
}

/// Non-blank lines from `reader`, with any trailing carriage return removed.
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read path from stdin")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        paths.push(line.to_string());
    }
    Ok(paths)
}

fn label(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn tsv_line(item: &Annotated) -> String {
    format!(
        "{}\t{}\t{}",
        item.path,
        label(item.sequence()),
        label(item.shot())
    )
}

/// JSON object keys must be strings, so missing labels become [`MISSING`].
fn tree_with_string_keys(tree: &SequenceTree) -> BTreeMap<&str, BTreeMap<&str, &Vec<String>>> {
    tree.iter()
        .map(|(sequence, shots)| {
            let shots = shots
                .iter()
                .map(|(shot, paths)| (label(shot.as_deref()), paths))
                .collect();
            (label(sequence.as_deref()), shots)
        })
        .collect()
}

fn write_annotations<W: Write>(
    out: &mut W,
    annotated: &[Annotated],
    format: OutputFormat,
) -> Result<()> {
    for item in annotated {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, item).context("failed to serialize annotation")?;
                writeln!(out)?;
            }
            OutputFormat::Tsv => writeln!(out, "{}", tsv_line(item))?,
        }
    }
    Ok(())
}

fn write_tree<W: Write>(out: &mut W, annotated: &[Annotated]) -> Result<()> {
    let tree = group_by_sequence(annotated);
    serde_json::to_writer_pretty(&mut *out, &tree_with_string_keys(&tree))
        .context("failed to serialize sequence tree")?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let paths = if cli.paths.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        cli.paths.clone()
    };

    let config = EngineConfig::new()
        .with_cache(!cli.no_cache)
        .with_capacity(paths.len());
    let engine = Engine::new(config).context("failed to build seqshot engine")?;

    let filter = cli.filter();
    let annotated: Vec<Annotated> = filter.apply(engine.annotate(&paths)).collect();
    debug!(total = paths.len(), kept = annotated.len(), "annotated paths");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.group {
        write_tree(&mut out, &annotated)?;
    } else {
        write_annotations(&mut out, &annotated, cli.format)?;
    }
    out.flush().context("failed to flush output")?;

    if cli.stats {
        let stats = engine.cache_stats();
        info!(
            entries = stats.entries,
            hits = stats.hits,
            misses = stats.misses,
            hit_ratio = stats.hit_ratio(),
            "cache stats"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqshot_core::SeqShot;

    fn annotated() -> Vec<Annotated> {
        vec![
            Annotated::new(
                "/s/SQ01/SH010/a.ma",
                SeqShot::new(Some("SQ01".into()), Some("SH010".into())),
            ),
            Annotated::new("/s/assets/b.ma", SeqShot::none()),
        ]
    }

    #[test]
    fn read_lines_skips_blanks_and_carriage_returns() {
        let input = "/s/SQ01/SH010/a.ma\r\n\n   \n/s/my assets/b.ma\n";
        let paths = read_lines(input.as_bytes()).unwrap();
        assert_eq!(paths, vec!["/s/SQ01/SH010/a.ma", "/s/my assets/b.ma"]);
    }

    #[test]
    fn tsv_marks_missing_labels() {
        let items = annotated();
        assert_eq!(tsv_line(&items[0]), "/s/SQ01/SH010/a.ma\tSQ01\tSH010");
        assert_eq!(tsv_line(&items[1]), "/s/assets/b.ma\t-\t-");
    }

    #[test]
    fn json_lines_output() {
        let mut out = Vec::new();
        write_annotations(&mut out, &annotated(), OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["sequence"], "SQ01");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["shot"].is_null());
    }

    #[test]
    fn tree_output_uses_placeholder_keys() {
        let mut out = Vec::new();
        write_tree(&mut out, &annotated()).unwrap();
        let tree: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(tree["SQ01"]["SH010"][0], "/s/SQ01/SH010/a.ma");
        assert_eq!(tree["-"]["-"][0], "/s/assets/b.ma");
    }

    #[test]
    fn cli_parses_filters() {
        let cli = Cli::try_parse_from([
            "seqshot-parse",
            "--sequence",
            "sq01",
            "--format",
            "tsv",
            "/s/SQ01/SH010/a.ma",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Tsv);
        assert_eq!(cli.paths, vec!["/s/SQ01/SH010/a.ma"]);
        assert_eq!(cli.filter(), TokenFilter::new().with_sequence("sq01"));
        assert!(!cli.group);
    }
}
