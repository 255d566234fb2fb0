//! Configuration for the triage engine.
//!
//! Configuration sources (highest priority first):
//! 1. Explicit path (`--config` flag or TRIAGE_CONFIG environment variable)
//! 2. Config file (.triage/config.yaml), searched in the current directory and parents
//! 3. Config file in the home directory (~/.triage/config.yaml)
//! 4. Built-in defaults
//!
//! Only policy weights, label thresholds and input limits are configurable.
//! The seed corpus and keyword taxonomy are compiled in.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::{LabelThresholds, PriorityEngine, ScoreWeights, ScoringPolicy};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TRIAGE_CONFIG";

/// Default cap on transcript size read by the CLI
pub const DEFAULT_MAX_TRANSCRIPT_BYTES: usize = 1_048_576; // 1MB

/// Default cap on a JSONL batch file
pub const DEFAULT_MAX_BATCH_BYTES: usize = 64 * 1_048_576; // 64MB

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub policy: Option<PolicyConfig>,
    #[serde(default)]
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub weights: Option<WeightsConfig>,
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightsConfig {
    pub severity: Option<f64>,
    pub keyword_intent: Option<f64>,
    pub vulnerability: Option<f64>,
    pub recency: Option<f64>,
    pub evidence: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdsConfig {
    pub high: Option<f64>,
    pub medium: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    pub max_transcript_bytes: Option<usize>,
    pub max_batch_bytes: Option<usize>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Validated scoring policy
    pub policy: ScoringPolicy,
    /// Maximum transcript size the CLI will read
    pub max_transcript_bytes: usize,
    /// Maximum JSONL batch size the CLI will read
    pub max_batch_bytes: usize,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            max_transcript_bytes: DEFAULT_MAX_TRANSCRIPT_BYTES,
            max_batch_bytes: DEFAULT_MAX_BATCH_BYTES,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Build an engine from the resolved policy
    pub fn engine(&self) -> Result<PriorityEngine> {
        PriorityEngine::new(self.policy).context("Invalid scoring policy")
    }
}

impl ConfigFile {
    /// Apply file values over the defaults
    fn resolve(self, config_file: Option<PathBuf>) -> ResolvedConfig {
        let defaults = ScoringPolicy::default();
        let policy = self.policy.unwrap_or_default();
        let weights = policy.weights.unwrap_or_default();
        let thresholds = policy.thresholds.unwrap_or_default();

        let policy = ScoringPolicy {
            weights: ScoreWeights {
                severity: weights.severity.unwrap_or(defaults.weights.severity),
                keyword_intent: weights
                    .keyword_intent
                    .unwrap_or(defaults.weights.keyword_intent),
                vulnerability: weights
                    .vulnerability
                    .unwrap_or(defaults.weights.vulnerability),
                recency: weights.recency.unwrap_or(defaults.weights.recency),
                evidence: weights.evidence.unwrap_or(defaults.weights.evidence),
            },
            thresholds: LabelThresholds {
                high: thresholds.high.unwrap_or(defaults.thresholds.high),
                medium: thresholds.medium.unwrap_or(defaults.thresholds.medium),
            },
        };

        let limits = self.limits.unwrap_or_default();

        ResolvedConfig {
            policy,
            max_transcript_bytes: limits
                .max_transcript_bytes
                .unwrap_or(DEFAULT_MAX_TRANSCRIPT_BYTES),
            max_batch_bytes: limits.max_batch_bytes.unwrap_or(DEFAULT_MAX_BATCH_BYTES),
            config_file,
        }
    }
}

/// Find config file by searching a directory and its parents, then home
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".triage").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".triage").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse config YAML
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content).context("Invalid config YAML")
}

/// Resolve configuration from a specific file
pub fn load_from_path(path: &Path) -> Result<ResolvedConfig> {
    let resolved = load_config_file(path)?.resolve(Some(path.to_path_buf()));
    resolved
        .policy
        .validate()
        .with_context(|| format!("Invalid scoring policy in {}", path.display()))?;
    Ok(resolved)
}

/// Load configuration from all sources.
///
/// `explicit` takes precedence over discovery; clap already folds the
/// TRIAGE_CONFIG variable into it for the CLI.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Using config file {}", path.display());
        return load_from_path(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        tracing::debug!("Using config file from {}: {}", CONFIG_ENV, env_path);
        return load_from_path(Path::new(&env_path));
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    match find_config_file(&cwd) {
        Some(path) => {
            tracing::debug!("Discovered config file {}", path.display());
            load_from_path(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(ResolvedConfig::default())
        }
    }
}
