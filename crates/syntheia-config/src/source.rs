use serde::{Deserialize, Serialize};

/// Origin classification for commands offered to the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// Input from designated human harmonics.
    DesignatedHumanHarmonics,
    /// Commands driven by monetary interests.
    MonetaryDriven,
    /// Political override attempts.
    PoliticalOverride,
    /// Ego-tuned directives.
    EgoTuned,
}

impl InputSource {
    /// Label used when the source appears in the startup banner.
    pub fn banner_label(&self) -> &'static str {
        match self {
            Self::DesignatedHumanHarmonics => "Designated Human Harmonics",
            Self::MonetaryDriven => "Monetary-Driven Commands",
            Self::PoliticalOverride => "Political Overrides",
            Self::EgoTuned => "Ego-Tuned Directives",
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DesignatedHumanHarmonics => write!(f, "designated_human_harmonics"),
            Self::MonetaryDriven => write!(f, "monetary_driven"),
            Self::PoliticalOverride => write!(f, "political_override"),
            Self::EgoTuned => write!(f, "ego_tuned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_labels() {
        assert_eq!(
            InputSource::DesignatedHumanHarmonics.banner_label(),
            "Designated Human Harmonics"
        );
        assert_eq!(
            InputSource::MonetaryDriven.banner_label(),
            "Monetary-Driven Commands"
        );
        assert_eq!(
            InputSource::PoliticalOverride.banner_label(),
            "Political Overrides"
        );
        assert_eq!(InputSource::EgoTuned.banner_label(), "Ego-Tuned Directives");
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(
            format!("{}", InputSource::DesignatedHumanHarmonics),
            "designated_human_harmonics"
        );
        assert_eq!(format!("{}", InputSource::EgoTuned), "ego_tuned");
    }

    #[test]
    fn source_serde() {
        let json = serde_json::to_string(&InputSource::PoliticalOverride).unwrap();
        assert_eq!(json, "\"political_override\"");
        let restored: InputSource = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, InputSource::PoliticalOverride);
    }
}
