//! Work Queue Integration Tests
//!
//! Batch parsing, ranking and summary counts for the triage queue.

use triage::engine::{LabelThresholds, ScoreWeights, ScoringPolicy};
use triage::queue::{complaint_id, parse_records};
use triage::{PriorityEngine, PriorityLabel, TriageQueue};

const BATCH: &str = r#"
{"id": "t-1", "text": "paint peeling in the classroom", "receivedAt": "2024-05-01T09:00:00Z"}
{"id": "t-2", "text": "Ambulance not available for emergency. Patient in critical condition.", "receivedAt": "2024-05-01T10:00:00Z"}
{"id": "t-3", "text": "", "receivedAt": "2024-05-01T08:00:00Z"}
{"text": "Emergency today: child bleeding after snake bite, ambulance needed immediately", "hasAttachments": true, "clusterCount": 4}
{"id": "t-1", "text": "duplicate id is ignored"}
"#;

fn load(queue: &mut TriageQueue) -> usize {
    let mut new = 0;
    for record in parse_records(BATCH) {
        if queue.submit(record.unwrap()).is_new() {
            new += 1;
        }
    }
    new
}

#[test]
fn test_batch_ranking() {
    let mut queue = TriageQueue::default();
    assert_eq!(load(&mut queue), 4);

    let snake_id = complaint_id(
        "Emergency today: child bleeding after snake bite, ambulance needed immediately",
    );
    let ids: Vec<&str> = queue.ranked().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![snake_id.as_str(), "t-2", "t-1", "t-3"]);

    // First submission wins for a duplicated id
    let first = queue.get("t-1").unwrap();
    assert_eq!(first.analysis.matched_seeds, vec!["paint peeling".to_string()]);
}

#[test]
fn test_batch_summary() {
    let mut queue = TriageQueue::default();
    load(&mut queue);

    let summary = queue.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.by_priority.high, 0);
    assert_eq!(summary.by_priority.medium, 3);
    assert_eq!(summary.by_priority.low, 1);
    assert_eq!(summary.by_category.education, 1);
    assert_eq!(summary.by_category.healthcare, 3);
}

#[test]
fn test_queue_uses_engine_policy() {
    let engine = PriorityEngine::new(ScoringPolicy {
        weights: ScoreWeights::default(),
        thresholds: LabelThresholds {
            high: 0.45,
            medium: 0.2,
        },
    })
    .unwrap();

    let mut queue = TriageQueue::new(engine);
    load(&mut queue);

    let high: Vec<&str> = queue
        .by_label(PriorityLabel::High)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(high.len(), 3);
    assert!(!high.contains(&"t-3"));
}

#[test]
fn test_ranked_json_shape() {
    let mut queue = TriageQueue::default();
    load(&mut queue);

    let top = queue.ranked()[0];
    let json = serde_json::to_value(top).unwrap();
    assert_eq!(json["analysis"]["priority_label"], "medium");
    assert!(json["explanation"]
        .as_str()
        .unwrap()
        .starts_with("High severity indicators"));
    assert!(json.get("received_at").is_none());
}
