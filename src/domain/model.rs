use serde::{Deserialize, Serialize};

/// 同一長度、去重且已排序的單字集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLengthGroup {
    pub length: usize,
    pub words: Vec<String>,
}

impl WordLengthGroup {
    /// 從收集階段的集合建立群組，輸出前排序
    pub fn from_words<I>(length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        words.dedup();
        Self { length, words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn label(&self) -> String {
        format!("{}-letter words", self.length)
    }
}

/// 依長度遞增排列的結果，不含空群組
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    groups: Vec<WordLengthGroup>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 空群組直接丟棄，長度必須遞增
    pub fn push(&mut self, group: WordLengthGroup) {
        if group.is_empty() {
            return;
        }
        debug_assert!(
            self.groups
                .last()
                .map_or(true, |last| last.length < group.length),
            "word groups must be pushed in increasing length order"
        );
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[WordLengthGroup] {
        &self.groups
    }

    pub fn group(&self, length: usize) -> Option<&WordLengthGroup> {
        self.groups.iter().find(|group| group.length == length)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.groups.iter().map(WordLengthGroup::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordLengthGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WordLengthGroup;
    type IntoIter = std::slice::Iter<'a, WordLengthGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 一次執行的完整輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub phrase: String,
    pub minimum_word_size: usize,
    pub groups: ResultSet,
}
