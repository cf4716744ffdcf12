//! Selector configuration.

use serde::Deserialize;

/// Tuning knobs for the selection pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Minimum gap, in half-moves, between adjacent distances-to-mate that
    /// separates a resistant plateau from a collapsing tail when every
    /// candidate loses. Moves below the first such gap are discarded.
    pub collapse_gap_plies: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            collapse_gap_plies: 12,
        }
    }
}
