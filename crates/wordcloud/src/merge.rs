use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical::choose_canonical_with;
use crate::frequency::FrequencyTable;
use crate::similarity::char_similarity;

/// One applied merge, in the order merges happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeRecord {
    /// Earlier token of the pair in table order.
    pub left: String,
    /// Later token of the pair in table order.
    pub right: String,
    /// The surviving spelling, always one of `left` and `right`.
    pub canonical: String,
    /// Count of `canonical` after the merge.
    pub count: u64,
    pub similarity: f64,
}

/// Unifies near-duplicate tokens in `table` until none are left.
///
/// Each round scans unordered pairs `(i, j)` with `i < j` in table order and
/// stops at the first pair scoring strictly above `threshold`. That single
/// pair is merged: the spelling picked by
/// [`choose_canonical_with`](crate::choose_canonical_with) (`a` = earlier,
/// `b` = later) keeps its position and takes the summed count, the other
/// entry is removed. The next round starts again from the first pair. The
/// loop ends after a round that merges nothing.
///
/// A scan is O(n²) similarity calls, so the whole pass is O(n³) in the worst
/// case for `n` distinct tokens. Tokens are split into chars once per pass,
/// not once per comparison.
///
/// Returns the merges in the order they were applied.
pub fn merge_near_duplicates<E: AsRef<str>>(
    table: &mut FrequencyTable,
    threshold: f64,
    exceptions: &[E],
) -> Vec<MergeRecord> {
    let mut merges = Vec::new();
    // parallel to `table`, row for row
    let mut chars: Vec<Vec<char>> = table.iter().map(|e| e.token.chars().collect()).collect();

    while let Some((i, j, score)) = first_similar_pair(&chars, threshold) {
        let left = table.entry(i).token.clone();
        let right = table.entry(j).token.clone();
        let keep_left = choose_canonical_with(&left, &right, exceptions) == left;
        let (keep, drop) = if keep_left { (i, j) } else { (j, i) };

        let count = table.absorb(keep, drop);
        chars.remove(drop);
        let canonical = if keep_left { left.clone() } else { right.clone() };
        debug!(
            left = %left,
            right = %right,
            canonical = %canonical,
            count,
            similarity = score,
            "token_merged"
        );

        merges.push(MergeRecord {
            left,
            right,
            canonical,
            count,
            similarity: score,
        });
    }

    merges
}

/// First pair in scan order whose similarity exceeds `threshold`.
fn first_similar_pair(chars: &[Vec<char>], threshold: f64) -> Option<(usize, usize, f64)> {
    for (i, a) in chars.iter().enumerate() {
        for (j, b) in chars.iter().enumerate().skip(i + 1) {
            let score = char_similarity(a, b);
            if score > threshold {
                return Some((i, j, score));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::DEFAULT_EXCEPTIONS;

    fn table(items: &[(&str, u64)]) -> FrequencyTable {
        items.iter().map(|&(t, c)| (t, c)).collect()
    }

    fn rows(table: &FrequencyTable) -> Vec<(&str, u64)> {
        table.iter().map(|e| (e.token.as_str(), e.count)).collect()
    }

    #[test]
    fn empty_and_single_entry_tables_do_nothing() {
        let mut empty = FrequencyTable::new();
        assert!(merge_near_duplicates(&mut empty, 0.8, &DEFAULT_EXCEPTIONS).is_empty());

        let mut single = table(&[("cat", 4)]);
        assert!(merge_near_duplicates(&mut single, 0.8, &DEFAULT_EXCEPTIONS).is_empty());
        assert_eq!(rows(&single), vec![("cat", 4)]);
    }

    #[test]
    fn plural_folds_into_singular() {
        let mut t = table(&[("cat", 2), ("cats", 1)]);
        let merges = merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("cat", 3)]);
        assert_eq!(
            merges,
            vec![MergeRecord {
                left: "cat".into(),
                right: "cats".into(),
                canonical: "cat".into(),
                count: 3,
                similarity: 6.0 / 7.0,
            }]
        );
    }

    #[test]
    fn survivor_keeps_its_own_position() {
        let mut t = table(&[("cats", 1), ("dog", 5), ("cat", 1)]);
        merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("dog", 5), ("cat", 2)]);
    }

    #[test]
    fn dropping_an_earlier_row_keeps_later_rows_aligned() {
        // "cats" (row 0) is dropped first, shifting every later row down
        let mut t = table(&[("cats", 1), ("dog", 5), ("cat", 1), ("dogs", 1)]);
        let merges = merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("dog", 6), ("cat", 2)]);
        assert_eq!(merges.len(), 2);
        assert_eq!(merges[1].left, "dog");
        assert_eq!(merges[1].right, "dogs");
    }

    #[test]
    fn scan_restarts_after_each_merge() {
        // color+colors first, then color absorbs colour
        let mut t = table(&[("color", 1), ("colors", 1), ("colour", 1)]);
        let merges = merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("color", 3)]);
        let pairs: Vec<(&str, &str, &str)> = merges
            .iter()
            .map(|m| (m.left.as_str(), m.right.as_str(), m.canonical.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("color", "colors", "color"), ("color", "colour", "color")]
        );
    }

    #[test]
    fn outcome_depends_on_first_seen_order() {
        let mut t = table(&[("colour", 1), ("color", 1), ("colors", 1)]);
        merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("colour", 3)]);
    }

    #[test]
    fn exactly_threshold_is_not_merged() {
        let mut t = table(&[("abcde", 1), ("abcdf", 1)]);
        assert!(merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS).is_empty());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn exception_word_survives_even_when_plural_rule_disagrees() {
        let mut t = table(&[("headdress", 1), ("headdre", 1)]);
        let merges = merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS);
        assert_eq!(rows(&t), vec![("headdress", 2)]);
        assert_eq!(merges[0].similarity, 14.0 / 16.0);

        // without the exception the plural rule picks the later token
        let none: [&str; 0] = [];
        let mut t = table(&[("headdress", 1), ("headdre", 1)]);
        merge_near_duplicates(&mut t, 0.8, &none);
        assert_eq!(rows(&t), vec![("headdre", 2)]);
    }

    #[test]
    fn unrelated_tokens_stay_apart() {
        let mut t = table(&[("dog", 3), ("bird", 2), ("fish", 1), ("", 1)]);
        assert!(merge_near_duplicates(&mut t, 0.8, &DEFAULT_EXCEPTIONS).is_empty());
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn zero_threshold_collapses_anything_sharing_a_char() {
        let mut t = table(&[("dog", 1), ("bird", 1), ("cat", 1)]);
        merge_near_duplicates(&mut t, 0.0, &DEFAULT_EXCEPTIONS);
        // dog and bird share "d"; cat shares nothing with either
        assert_eq!(rows(&t), vec![("dog", 2), ("cat", 1)]);
    }
}
