use serde::{Deserialize, Serialize};

/// Settings that shape training and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Divide every class score, once per token, by the word's smoothed
    /// frequency over the whole corpus. The factor is the same for every
    /// class, so it rescales scores without changing which class wins.
    pub evidence_normalization: bool,
    /// Refuse to build a classifier unless every class has at least one example.
    pub require_every_class: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            evidence_normalization: true,
            require_every_class: false,
        }
    }
}
