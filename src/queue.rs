//! In-memory priority work queue for analyzed complaints.
//!
//! Staff work complaints highest score first. The queue owns no storage;
//! callers feed it records (for example from a JSONL batch) and read back a
//! deterministic ranking plus summary counts.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::domain::{Category, ComplaintInput, PriorityAnalysis, PriorityLabel};
use crate::engine::{explain_priority, PriorityEngine};

/// Errors that can occur while loading queue records
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One complaint as submitted to the queue (a JSONL line)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRecord {
    /// Caller-supplied ID; derived from the text when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub input: ComplaintInput,

    /// When the complaint was received
    #[serde(default, alias = "received_at", skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
}

impl ComplaintRecord {
    pub fn new(input: ComplaintInput) -> Self {
        Self {
            id: None,
            input,
            received_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }

    /// The record's ID, or the text-derived one
    pub fn resolved_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| complaint_id(&self.input.text))
    }
}

/// An analyzed complaint held in the queue
#[derive(Debug, Clone, Serialize)]
pub struct TriagedComplaint {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,

    pub analysis: PriorityAnalysis,

    pub explanation: String,
}

/// Result of submitting a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// New complaint added
    Queued(String),

    /// A complaint with this ID is already queued
    AlreadyQueued(String),
}

impl SubmitResult {
    pub fn id(&self) -> &str {
        match self {
            Self::Queued(id) | Self::AlreadyQueued(id) => id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::Queued(_))
    }
}

/// Counts per priority label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub healthcare: usize,
    pub education: usize,
}

/// Queue summary for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    pub total: usize,
    pub by_priority: LabelCounts,
    pub by_category: CategoryCounts,
}

/// Priority-ordered queue of analyzed complaints
#[derive(Debug, Clone, Default)]
pub struct TriageQueue {
    engine: PriorityEngine,
    items: Vec<TriagedComplaint>,
    ids: HashSet<String>,
}

impl TriageQueue {
    /// Create a queue that scores with `engine`
    pub fn new(engine: PriorityEngine) -> Self {
        Self {
            engine,
            items: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Analyze and add a record (idempotent by ID)
    pub fn submit(&mut self, record: ComplaintRecord) -> SubmitResult {
        let id = record.resolved_id();
        if self.ids.contains(&id) {
            return SubmitResult::AlreadyQueued(id);
        }

        let analysis = self.engine.analyze(&record.input);
        let explanation = explain_priority(&analysis);

        self.ids.insert(id.clone());
        self.items.push(TriagedComplaint {
            id: id.clone(),
            received_at: record.received_at,
            analysis,
            explanation,
        });

        SubmitResult::Queued(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TriagedComplaint> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All complaints, highest priority first.
    ///
    /// Ties on score go to the oldest `received_at` (undated last), then to
    /// the lexicographically smaller ID.
    pub fn ranked(&self) -> Vec<&TriagedComplaint> {
        let mut ranked: Vec<&TriagedComplaint> = self.items.iter().collect();
        ranked.sort_by(|a, b| compare_priority(a, b));
        ranked
    }

    /// Ranked complaints carrying `label`
    pub fn by_label(&self, label: PriorityLabel) -> Vec<&TriagedComplaint> {
        self.ranked()
            .into_iter()
            .filter(|item| item.analysis.priority_label == label)
            .collect()
    }

    pub fn summary(&self) -> QueueSummary {
        let mut summary = QueueSummary {
            total: self.items.len(),
            ..Default::default()
        };

        for item in &self.items {
            match item.analysis.priority_label {
                PriorityLabel::High => summary.by_priority.high += 1,
                PriorityLabel::Medium => summary.by_priority.medium += 1,
                PriorityLabel::Low => summary.by_priority.low += 1,
            }
            match item.analysis.category {
                Category::Healthcare => summary.by_category.healthcare += 1,
                Category::Education => summary.by_category.education += 1,
            }
        }

        summary
    }
}

fn compare_priority(a: &TriagedComplaint, b: &TriagedComplaint) -> Ordering {
    b.analysis
        .priority_score
        .total_cmp(&a.analysis.priority_score)
        .then_with(|| match (a.received_at, b.received_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Deterministic complaint ID: first 12 hex chars of SHA256 of the text
pub fn complaint_id(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)[..12].to_string()
}

/// Parse JSONL records, one result per non-blank line
pub fn parse_records(content: &str) -> Vec<Result<ComplaintRecord, QueueError>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| QueueError::MalformedRecord {
                line: idx + 1,
                source,
            })
        })
        .collect()
}
