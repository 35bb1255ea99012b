//! Character-sequence similarity between two tokens.
//!
//! The score is the classic sequence-matcher ratio (Ratcliff/Obershelp
//! "gestalt pattern matching"):
//!
//! ```text
//! ratio = 2 * M / (len(a) + len(b))
//! ```
//!
//! where `M` counts the characters covered by the matching blocks. Blocks are
//! found by taking the longest common contiguous run of `a` and `b`, then
//! recursing on the pieces to its left and to its right. When several runs
//! share the maximal length, the one starting earliest in `a` wins, then the
//! one starting earliest in `b`.
//!
//! Lengths are measured in Unicode scalar values, so `"café"` has length 4.
//!
//! Second strings of 200 or more characters get the "popular element"
//! treatment: characters making up more than 1% of `b` are not used to seed
//! matches, though they can still extend a match that was found.

use fxhash::FxHashMap;

/// Length at which popular characters of `b` stop seeding matches.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of two tokens in `[0.0, 1.0]`.
///
/// Identical strings score 1.0 (including two empty strings); strings with no
/// character in common score 0.0.
///
/// ```rust
/// use wordcloud::similarity;
///
/// assert_eq!(similarity("cat", "cat"), 1.0);
/// assert_eq!(similarity("cat", "dog"), 0.0);
/// assert_eq!(similarity("abcde", "abcdf"), 0.8);
/// assert!(similarity("cat", "cats") > 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_similarity(&a, &b)
}

/// [`similarity`] over pre-split tokens, for callers that score one token
/// against many.
pub(crate) fn char_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = SequenceMatcher::new(a, b).matched_chars();
    2.0 * matched as f64 / total as f64
}

struct SequenceMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// char of `b` -> ascending positions in `b`, minus popular chars
    b2j: FxHashMap<char, Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Total length of all matching blocks.
    fn matched_chars(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        matched
    }

    /// Longest run `a[i..i+k] == b[j..j+k]` inside `a[alo..ahi]` and
    /// `b[blo..bhi]`, as `(i, j, k)`. Returns `k == 0` when nothing matches.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j -> length of the match ending at a[i - 1], b[j]
        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        let mut next: FxHashMap<usize, usize> = FxHashMap::default();
        for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
            next.clear();
            if let Some(positions) = self.b2j.get(ch) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = j
                        .checked_sub(1)
                        .and_then(|p| j2len.get(&p))
                        .copied()
                        .unwrap_or(0);
                    let k = prev + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next);
        }

        // Popular chars never seed a match but may still extend one.
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_and_empty() {
        assert_eq!(similarity("octopus", "octopus"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "dog"), 0.0);
        assert_eq!(similarity("dog", ""), 0.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("cat", "dog"), 0.0);
        assert_eq!(similarity("fish", "tree"), 0.0);
    }

    #[test]
    fn plural_scores() {
        // 2 * 3 / 7
        assert_eq!(similarity("cat", "cats"), 6.0 / 7.0);
        assert_eq!(similarity("cats", "cat"), 6.0 / 7.0);
        // 2 * 8 / 17
        assert_eq!(similarity("headdress", "headdres"), 16.0 / 17.0);
    }

    #[test]
    fn recursion_picks_up_blocks_on_both_sides() {
        // "colo" then "r" to the right of it
        assert_eq!(similarity("colour", "color"), 10.0 / 11.0);
        assert_eq!(similarity("colour", "colors"), 10.0 / 12.0);
        // "octop" only: "us" and "i" share nothing
        assert_eq!(similarity("octopus", "octopi"), 10.0 / 13.0);
    }

    #[test]
    fn threshold_boundary_pair_is_exactly_point_eight() {
        assert_eq!(similarity("abcde", "abcdf"), 0.8);
        assert!(similarity("abcdef", "abcdeg") > 0.8);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        // "caf" matches; é vs e does not
        assert_eq!(similarity("café", "cafe"), 6.0 / 8.0);
    }

    #[test]
    fn longest_block_is_leftmost_on_ties() {
        // "ab" occurs twice in b; either choice yields the same total
        assert_eq!(similarity("ab", "abab"), 4.0 / 6.0);
        let m = SequenceMatcher::new(&['a', 'b'], &['x', 'a', 'b', 'a', 'b']);
        assert_eq!(m.find_longest_match(0, 2, 0, 5), (0, 1, 2));
    }

    #[test]
    fn pre_split_scores_match_string_scores() {
        for (a, b) in [("colour", "colors"), ("café", "cafe"), ("", ""), ("x-ray", "")] {
            let ac: Vec<char> = a.chars().collect();
            let bc: Vec<char> = b.chars().collect();
            assert_eq!(char_similarity(&ac, &bc), similarity(a, b), "{a} / {b}");
        }
    }

    #[test]
    fn long_runs_of_popular_chars_still_match() {
        let long = "a".repeat(250);
        assert_eq!(similarity(&long, &long), 1.0);
    }

    #[test]
    fn decreases_as_edits_accumulate() {
        let base = "psychedelic";
        let one = similarity(base, "psychedelik");
        let two = similarity(base, "psychedalik");
        let three = similarity(base, "psuchedalik");
        assert!(1.0 > one && one > two && two > three);
    }
}
