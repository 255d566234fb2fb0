//! Command-line interface for triage.
//!
//! Provides commands for scoring a single transcript, ranking a batch of
//! complaints, and showing the resolved configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::{self, ResolvedConfig};
use crate::domain::{ComplaintInput, PriorityAnalysis, PriorityLabel};
use crate::engine::explain_priority;

pub mod batch;

/// triage - Deterministic complaint priority scoring
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (overrides discovery of .triage/config.yaml)
    #[arg(long, global = true, env = "TRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single complaint transcript
    Analyze {
        /// Transcript text (reads --input or stdin if not provided)
        text: Option<String>,

        /// Read the transcript from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// The complaint has attachments
        #[arg(long)]
        attachments: bool,

        /// Number of related complaints in the same cluster
        #[arg(long, default_value = "0")]
        cluster_count: u32,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank a JSONL batch of complaints into a work queue
    Batch {
        /// JSONL file (reads stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only show complaints with this label
        #[arg(short, long, value_enum)]
        label: Option<LabelFilter>,

        /// Maximum number of complaints to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print ranked complaints as JSONL
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Priority label for CLI filtering (maps to PriorityLabel)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelFilter {
    High,
    Medium,
    Low,
}

impl From<LabelFilter> for PriorityLabel {
    fn from(l: LabelFilter) -> Self {
        match l {
            LabelFilter::High => PriorityLabel::High,
            LabelFilter::Medium => PriorityLabel::Medium,
            LabelFilter::Low => PriorityLabel::Low,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::load_config(self.config.as_deref())?;

        match self.command {
            Commands::Analyze {
                text,
                input,
                attachments,
                cluster_count,
                json,
            } => analyze(&cfg, text, input, attachments, cluster_count, json).await,
            Commands::Batch {
                input,
                label,
                limit,
                json,
            } => batch::execute(&cfg, input, label.map(PriorityLabel::from), limit, json).await,
            Commands::Config => show_config(&cfg),
        }
    }
}

/// Read text from a file or stdin, enforcing the configured size limit
pub(crate) async fn read_input(path: Option<&Path>, max_bytes: usize) -> Result<String> {
    if let Some(path) = path {
        let meta = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        check_size(meta.len() as usize, max_bytes)?;

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        check_size(content.len(), max_bytes)?;
        Ok(content)
    } else {
        read_limited(tokio::io::stdin(), max_bytes)
            .await
            .context("Failed to read from stdin")
    }
}

/// Read at most one byte past `max_bytes`, then check size before decoding
async fn read_limited<R: AsyncRead + Unpin>(reader: R, max_bytes: usize) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take((max_bytes as u64).saturating_add(1))
        .read_to_end(&mut buffer)
        .await?;

    check_size(buffer.len(), max_bytes)?;
    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

fn check_size(actual: usize, max_bytes: usize) -> Result<()> {
    if actual > max_bytes {
        anyhow::bail!(
            "Input is {} bytes, above the configured limit of {} bytes",
            actual,
            max_bytes
        );
    }
    Ok(())
}

/// Score a single transcript
async fn analyze(
    cfg: &ResolvedConfig,
    text: Option<String>,
    input_file: Option<PathBuf>,
    has_attachments: bool,
    cluster_count: u32,
    json: bool,
) -> Result<()> {
    let text = match text {
        Some(text) => {
            check_size(text.len(), cfg.max_transcript_bytes)?;
            text
        }
        None => read_input(input_file.as_deref(), cfg.max_transcript_bytes).await?,
    };

    if text.trim().is_empty() {
        tracing::warn!("Transcript is empty; scoring as a zero-signal complaint");
    }

    let engine = cfg.engine()?;
    let input = ComplaintInput {
        text,
        has_attachments,
        cluster_count,
    };
    let analysis = engine.analyze(&input);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?
        );
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

/// Human-readable breakdown of one analysis
fn print_analysis(analysis: &PriorityAnalysis) {
    println!("Category:  {}", analysis.category);
    println!(
        "Priority:  {} ({})",
        analysis.priority_label,
        analysis.display_score()
    );
    println!();
    println!("Signals:");
    println!("  Semantic severity:   {:.3}", analysis.semantic_severity);
    println!("  Keyword intent:      {:.3}", analysis.keyword_intent);
    println!("  Vulnerability boost: {:.3}", analysis.vulnerability_boost);
    println!("  Recency boost:       {:.3}", analysis.recency_boost);
    println!("  Evidence boost:      {:.3}", analysis.evidence_boost);
    println!();
    if !analysis.matched_seeds.is_empty() {
        println!("Matched seeds:    {}", analysis.matched_seeds.join(", "));
    }
    if !analysis.matched_keywords.is_empty() {
        println!("Matched keywords: {}", analysis.matched_keywords.join(", "));
    }
    println!("Explanation: {}", explain_priority(analysis));
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    let policy = &cfg.policy;

    println!("Triage Configuration");
    println!("══════════════════════════════════════════════════════════════");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Weights:");
    println!("  Severity:       {:.2}", policy.weights.severity);
    println!("  Keyword intent: {:.2}", policy.weights.keyword_intent);
    println!("  Vulnerability:  {:.2}", policy.weights.vulnerability);
    println!("  Recency:        {:.2}", policy.weights.recency);
    println!("  Evidence:       {:.2}", policy.weights.evidence);
    println!();
    println!("Thresholds:");
    println!("  High:   >= {:.2}", policy.thresholds.high);
    println!("  Medium: >= {:.2}", policy.thresholds.medium);
    println!();
    println!("Limits:");
    println!("  Max transcript size: {} bytes", cfg.max_transcript_bytes);
    println!("  Max batch size:      {} bytes", cfg.max_batch_bytes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "triage",
            "analyze",
            "no doctor available",
            "--attachments",
            "--cluster-count",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                text,
                attachments,
                cluster_count,
                json,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("no doctor available"));
                assert!(attachments);
                assert_eq!(cluster_count, 3);
                assert!(!json);
            }
            other => panic!("Expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_batch_filters() {
        let cli =
            Cli::try_parse_from(["triage", "batch", "--label", "high", "-n", "5", "--json"]).unwrap();

        match cli.command {
            Commands::Batch {
                label, limit, json, ..
            } => {
                assert!(matches!(label, Some(LabelFilter::High)));
                assert_eq!(limit, Some(5));
                assert!(json);
            }
            other => panic!("Expected batch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_input_enforces_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("transcript.txt");
        tokio::fs::write(&path, "x".repeat(64)).await.unwrap();

        assert_eq!(read_input(Some(&path), 64).await.unwrap().len(), 64);
        assert!(read_input(Some(&path), 10).await.is_err());
    }

    #[tokio::test]
    async fn test_read_limited_unbounded_limit() {
        let text = "Ambulance not available for emergency";
        let read = read_limited(text.as_bytes(), usize::MAX).await.unwrap();
        assert_eq!(read, text);
    }

    #[tokio::test]
    async fn test_read_limited_reports_size_before_utf8() {
        // 2-byte characters: the cut at limit + 1 lands mid-character
        let text = "é".repeat(8);
        let err = read_limited(text.as_bytes(), 4).await.unwrap_err();
        assert!(format!("{:#}", err).contains("above the configured limit of 4 bytes"));

        let err = read_limited(&[0xff_u8, 0xfe][..], 16).await.unwrap_err();
        assert!(format!("{:#}", err).contains("not valid UTF-8"));
    }
}
