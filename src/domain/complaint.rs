//! Complaint input accepted by the priority engine.

use serde::{Deserialize, Serialize};

/// A transcript plus the light metadata the engine scores.
///
/// The JSON form uses the camelCase keys of the upstream intake service;
/// snake_case aliases are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintInput {
    /// Transcript text (may be empty)
    pub text: String,

    /// Whether the citizen attached photos or documents
    #[serde(default, alias = "has_attachments")]
    pub has_attachments: bool,

    /// Number of related or duplicate complaints in the same cluster
    #[serde(default, alias = "cluster_count")]
    pub cluster_count: u32,
}

impl ComplaintInput {
    /// Create an input with default metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_attachments(mut self, has_attachments: bool) -> Self {
        self.has_attachments = has_attachments;
        self
    }

    pub fn with_cluster_count(mut self, cluster_count: u32) -> Self {
        self.cluster_count = cluster_count;
        self
    }
}
