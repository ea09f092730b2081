//! Persisted exclusion record

use serde::{Deserialize, Serialize};
use shared::ExclusionKind;

/// Full persisted state: both exclusion lists in insertion order.
///
/// Missing fields deserialize as empty lists; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRecord {
    #[serde(default)]
    pub stable_coins: Vec<String>,
    #[serde(default)]
    pub problematic_coins: Vec<String>,
}

impl ExclusionRecord {
    pub fn list(&self, kind: ExclusionKind) -> &[String] {
        match kind {
            ExclusionKind::Stable => &self.stable_coins,
            ExclusionKind::Problematic => &self.problematic_coins,
        }
    }

    pub fn list_mut(&mut self, kind: ExclusionKind) -> &mut Vec<String> {
        match kind {
            ExclusionKind::Stable => &mut self.stable_coins,
            ExclusionKind::Problematic => &mut self.problematic_coins,
        }
    }

    /// Stable coins followed by problematic coins, duplicates kept
    pub fn combined(&self) -> Vec<String> {
        self.stable_coins
            .iter()
            .chain(self.problematic_coins.iter())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stable_coins.is_empty() && self.problematic_coins.is_empty()
    }
}
