use crate::config::WordCloudConfig;
use crate::frequency::FrequencyTable;

/// Splits a caption into word tokens.
///
/// The caption is split on runs of Unicode whitespace. Each piece is
/// lowercased (when `cfg.lowercase` is set) and then has every character from
/// `cfg.strip_chars` removed from both ends, repeatedly. A piece made only of
/// strip characters yields an empty token; it is kept, not dropped.
///
/// ```rust
/// use wordcloud::{tokenize_caption, WordCloudConfig};
///
/// let cfg = WordCloudConfig::default();
/// let tokens = tokenize_caption("A \"Happy\" dog!!  ...", &cfg);
/// assert_eq!(tokens, vec!["a", "happy", "dog", ""]);
/// ```
pub fn tokenize_caption(caption: &str, cfg: &WordCloudConfig) -> Vec<String> {
    caption
        .split_whitespace()
        .map(|piece| {
            if cfg.lowercase {
                let lowered = piece.to_lowercase();
                lowered.trim_matches(|c: char| cfg.is_strip_char(c)).to_string()
            } else {
                piece.trim_matches(|c: char| cfg.is_strip_char(c)).to_string()
            }
        })
        .collect()
}

/// Tokenizes every caption of `corpus` and tallies the tokens.
///
/// The returned table iterates in first-seen order, which is the order the
/// merge pass scans pairs in. An empty corpus gives an empty table.
pub fn count_tokens<I, S>(corpus: I, cfg: &WordCloudConfig) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    for caption in corpus {
        for token in tokenize_caption(caption.as_ref(), cfg) {
            table.record(&token);
        }
    }
    table
}
