use serde::{Deserialize, Serialize};

/// An oversight watcher registered with the system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watcher {
    /// Display name, e.g. `AUTO-GUARD AI`.
    pub name: String,
    /// What the watcher oversees.
    pub oversight: String,
    /// Whether the watcher is active.
    pub enabled: bool,
}

impl Watcher {
    /// New enabled watcher.
    pub fn new(name: impl Into<String>, oversight: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            oversight: oversight.into(),
            enabled: true,
        }
    }

    /// Self-monitoring harmonic enforcement watcher.
    pub fn auto_guard_ai() -> Self {
        Self::new("AUTO-GUARD AI", "Self-monitoring harmonic enforcement")
    }

    /// Human interface oversight watcher.
    pub fn human_dream_walker() -> Self {
        Self::new("HUMAN DREAM-WALKER", "Human interface oversight")
    }

    /// Timeline divergence tracking watcher.
    pub fn ethical_time_map() -> Self {
        Self::new("ETHICAL TIME-MAP", "Timeline divergence tracking")
    }
}

impl std::fmt::Display for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.oversight)
    }
}
