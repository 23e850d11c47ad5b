use super::types::LayoutScore;
use crate::corpus::CharFrequencies;
use crate::layouts::EffortTable;

/// Scores one frequency table against one effort table.
///
/// Every occurrence contributes count × weight of the first tier
/// containing its character; characters outside the table contribute
/// zero and are tallied in `unscored` instead. Weights are multiples of
/// 0.5, so the accumulation is exact and independent of map order.
pub fn score(freqs: &CharFrequencies, table: &EffortTable) -> LayoutScore {
    let mut result = LayoutScore::default();
    for (ch, count) in freqs.iter() {
        match table.tier_for(ch) {
            Some(weight) => result.total += weight * count as f64,
            None => result.unscored += count,
        }
    }
    result
}
