use std::collections::BTreeMap;

use crate::cloud::WordCloud;
use crate::frequency::FrequencyTable;

/// Turns merged counts into weights: `sqrt(count / max_count)`.
///
/// The most frequent token gets exactly `1.0`. An empty table yields an empty
/// cloud rather than dividing by the maximum of nothing.
pub fn normalize(table: &FrequencyTable) -> WordCloud {
    let Some(max_count) = table.max_count() else {
        return WordCloud::default();
    };
    let max_count = max_count as f64;

    let weights: BTreeMap<String, f64> = table
        .iter()
        .map(|entry| (entry.token.clone(), (entry.count as f64 / max_count).sqrt()))
        .collect();
    WordCloud::from_weights(weights)
}
