pub mod engine;
pub mod types;

pub use self::types::LayoutScore;

use crate::corpus::CharFrequencies;
use crate::layouts::Layout;
use strum::IntoEnumIterator;

/// Scores every layout in the catalog against one frequency table,
/// reusing it read-only, and returns the results in catalog order.
pub fn score_catalog(freqs: &CharFrequencies) -> Vec<(Layout, LayoutScore)> {
    Layout::iter()
        .map(|layout| (layout, engine::score(freqs, layout.effort_table())))
        .collect()
}
