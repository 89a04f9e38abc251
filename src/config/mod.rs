#[cfg(feature = "cli")]
pub mod cli;
pub mod dictionary;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

/// 合併命令列與設定檔之後的有效設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramRequest {
    pub phrase: String,
    pub minimum_word_size: Option<usize>,
    pub dictionary: String,
    pub format: OutputFormat,
}

impl AnagramRequest {
    pub fn new(phrase: impl Into<String>, dictionary: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            minimum_word_size: None,
            dictionary: dictionary.into(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_minimum_word_size(mut self, size: usize) -> Self {
        self.minimum_word_size = Some(size);
        self
    }
}

impl Validate for AnagramRequest {
    fn validate(&self) -> Result<()> {
        validate_path("dictionary", &self.dictionary)
    }
}
