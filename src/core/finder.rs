//! 保留原始字母順序的字謎搜尋。
//!
//! 候選字是短句中字元*位置*的組合，依原本出現的順序串接，
//! 字母不會重新排列，所以 `"tac"` 找不到 `"cat"`。

use crate::domain::model::{ResultSet, WordLengthGroup};
use crate::domain::ports::WordLookup;
use itertools::Itertools;
use std::collections::HashSet;

/// 短句（少於 10 個字元）的預設最短單字長度
pub const SMALL_WORD_MINIMUM: usize = 3;
/// 長句的預設最短單字長度
pub const BIG_WORD_MINIMUM: usize = 4;

const BIG_PHRASE_LENGTH: usize = 10;

pub fn default_minimum_length(phrase: &str) -> usize {
    if phrase.chars().count() < BIG_PHRASE_LENGTH {
        SMALL_WORD_MINIMUM
    } else {
        BIG_WORD_MINIMUM
    }
}

/// 未指定或指定為 0 時使用預設值
pub fn resolve_minimum_length(phrase: &str, requested: Option<usize>) -> usize {
    match requested {
        Some(size) if size > 0 => size,
        _ => default_minimum_length(phrase),
    }
}

pub fn find_anagrams<L>(phrase: &str, min_length: usize, lookup: &L) -> ResultSet
where
    L: WordLookup + ?Sized,
{
    let letters: Vec<char> = phrase.chars().collect();
    let mut results = ResultSet::new();

    for length in min_length.max(1)..=letters.len() {
        let mut valid_words = HashSet::new();
        let mut candidates = 0usize;

        for combo in letters.iter().combinations(length) {
            candidates += 1;
            let word: String = combo.into_iter().collect();
            if lookup.is_word(&word) {
                valid_words.insert(word);
            }
        }

        tracing::debug!(
            length,
            candidates,
            matches = valid_words.len(),
            "Checked {}-letter combinations",
            length
        );

        results.push(WordLengthGroup::from_words(length, valid_words));
    }

    results
}
