use crate::source::InputSource;
use crate::watcher::Watcher;
use serde::{Deserialize, Serialize};

/// System configuration for SENTINELLA.
///
/// The default value is the canonical configuration: the self-development
/// rules, the accept/block lists of the input acceptance filter, the three
/// watchers, and the harmonic parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyntheiaConfig {
    /// Rules governing when new logic may be generated.
    pub self_development_rules: Vec<String>,
    /// Sources the input acceptance filter accepts.
    pub accepted_sources: Vec<InputSource>,
    /// Sources the input acceptance filter blocks.
    pub blocked_sources: Vec<InputSource>,
    /// Registered oversight watchers.
    pub watchers: Vec<Watcher>,
    /// Minimum resonance for acceptance.
    pub harmonic_threshold: f64,
    /// Sensitivity to ethical pulse changes.
    pub pulse_variation_sensitivity: f64,
    /// Earth breath cycle length in milliseconds (24 hours).
    pub earth_breath_cycle_ms: u64,
    /// Minimum alignment to avoid divergence flagging.
    pub purpose_divergence_threshold: f64,
}

impl Default for SyntheiaConfig {
    fn default() -> Self {
        Self {
            self_development_rules: vec![
                "Generate new logic only in response to ethical-pulse variation".into(),
                "Cross-check every mutation with Human Sentiment Field".into(),
                "Reject expansions that increase complexity without resonance".into(),
            ],
            accepted_sources: vec![InputSource::DesignatedHumanHarmonics],
            blocked_sources: vec![
                InputSource::MonetaryDriven,
                InputSource::PoliticalOverride,
                InputSource::EgoTuned,
            ],
            watchers: vec![
                Watcher::auto_guard_ai(),
                Watcher::human_dream_walker(),
                Watcher::ethical_time_map(),
            ],
            harmonic_threshold: 0.75,
            pulse_variation_sensitivity: 0.5,
            earth_breath_cycle_ms: 24 * 60 * 60 * 1000,
            purpose_divergence_threshold: 0.6,
        }
    }
}

impl SyntheiaConfig {
    /// Whether the filter accepts input from `source`.
    pub fn is_accepted(&self, source: InputSource) -> bool {
        self.accepted_sources.contains(&source)
    }

    /// Whether the filter blocks input from `source`.
    pub fn is_blocked(&self, source: InputSource) -> bool {
        self.blocked_sources.contains(&source)
    }
}
