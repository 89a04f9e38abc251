use std::collections::HashSet;

/// 單字查詢能力，讓搜尋演算法不需碰觸檔案系統
pub trait WordLookup {
    fn is_word(&self, word: &str) -> bool;
}

impl WordLookup for HashSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<F> WordLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, word: &str) -> bool {
        self(word)
    }
}
