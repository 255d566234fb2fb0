//! Batch CLI command: rank a JSONL file of complaints.
//!
//! Each line is a complaint record:
//! `{"id": "...", "text": "...", "hasAttachments": false, "clusterCount": 0, "receivedAt": "..."}`
//! Only `text` is required.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ResolvedConfig;
use crate::domain::PriorityLabel;
use crate::queue::{parse_records, QueueSummary, TriageQueue, TriagedComplaint};

/// Execute the `batch` command
pub async fn execute(
    cfg: &ResolvedConfig,
    input: Option<PathBuf>,
    label: Option<PriorityLabel>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let content = super::read_input(input.as_deref(), cfg.max_batch_bytes).await?;

    let mut queue = TriageQueue::new(cfg.engine()?);
    let mut skipped = 0usize;

    for record in parse_records(&content) {
        match record {
            Ok(record) if record.input.text.len() > cfg.max_transcript_bytes => {
                tracing::warn!(
                    "Skipping complaint {}: transcript above {} bytes",
                    record.resolved_id(),
                    cfg.max_transcript_bytes
                );
                skipped += 1;
            }
            Ok(record) => {
                let result = queue.submit(record);
                if !result.is_new() {
                    tracing::warn!("Duplicate complaint id {}, keeping the first", result.id());
                }
            }
            Err(e) => {
                tracing::warn!("Skipping record: {}", e);
                skipped += 1;
            }
        }
    }

    let ranked = match label {
        Some(label) => queue.by_label(label),
        None => queue.ranked(),
    };
    let shown: Vec<&TriagedComplaint> = ranked
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        for item in shown {
            println!(
                "{}",
                serde_json::to_string(item).context("Failed to serialize complaint")?
            );
        }
    } else {
        print_ranked(&shown);
        print_summary(&queue.summary(), skipped);
    }

    Ok(())
}

fn print_ranked(items: &[&TriagedComplaint]) {
    if items.is_empty() {
        println!("No complaints to show");
        return;
    }

    println!(
        "{:<4} {:<14} {:<8} {:<7} {:<11} {}",
        "#", "ID", "LABEL", "SCORE", "CATEGORY", "EXPLANATION"
    );
    println!("{}", "-".repeat(100));

    for (rank, item) in items.iter().enumerate() {
        println!(
            "{:<4} {:<14} {:<8} {:<7} {:<11} {}",
            rank + 1,
            item.id,
            item.analysis.priority_label,
            item.analysis.display_score(),
            item.analysis.category,
            item.explanation
        );
    }
}

fn print_summary(summary: &QueueSummary, skipped: usize) {
    println!();
    println!(
        "Total: {}  (high {}, medium {}, low {})",
        summary.total,
        summary.by_priority.high,
        summary.by_priority.medium,
        summary.by_priority.low
    );
    println!(
        "Categories: healthcare {}, education {}",
        summary.by_category.healthcare, summary.by_category.education
    );
    if skipped > 0 {
        println!("Skipped {} record(s)", skipped);
    }
}
