//! src/core/stats.rs
//!
//! Dictionary statistics shown in the header and by `stats`

use crate::core::types::Dictionary;

/// Category and word counts
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DictionaryStats {
    /// Number of categories, enabled or not
    pub categories: usize,
    /// Words across all categories
    pub total_words: usize,
    /// Words across enabled categories only
    pub active_words: usize,
}

impl DictionaryStats {
    pub fn compute(dictionary: &Dictionary) -> Self {
        dictionary
            .categories
            .iter()
            .fold(Self::default(), |mut stats, (_, category)| {
                stats.categories += 1;
                stats.total_words += category.words.len();
                if category.is_enabled() {
                    stats.active_words += category.words.len();
                }
                stats
            })
    }
}
