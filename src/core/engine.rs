use crate::config::dictionary::LazyDictionary;
use crate::config::AnagramRequest;
use crate::core::finder::{find_anagrams, resolve_minimum_length};
use crate::domain::model::Report;
use crate::utils::error::Result;

pub struct AnagramEngine {
    dictionary: LazyDictionary,
}

impl AnagramEngine {
    pub fn new(dictionary: LazyDictionary) -> Self {
        Self { dictionary }
    }

    pub fn from_request(request: &AnagramRequest) -> Result<Self> {
        Ok(Self::new(LazyDictionary::from_config_path(&request.dictionary)?))
    }

    pub fn dictionary(&self) -> &LazyDictionary {
        &self.dictionary
    }

    pub fn run(&self, request: &AnagramRequest) -> Result<Report> {
        // 字典載入失敗時不做任何組合運算
        let dictionary = self.dictionary.get()?;

        let minimum_word_size =
            resolve_minimum_length(&request.phrase, request.minimum_word_size);
        tracing::info!(
            "🔍 Searching '{}' for words of {}+ letters",
            request.phrase,
            minimum_word_size
        );

        let groups = find_anagrams(&request.phrase, minimum_word_size, dictionary);
        tracing::info!(
            "✅ Found {} words in {} length groups",
            groups.word_count(),
            groups.groups().len()
        );

        Ok(Report {
            phrase: request.phrase.clone(),
            minimum_word_size,
            groups,
        })
    }
}
