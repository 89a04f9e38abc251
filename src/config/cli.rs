use crate::config::dictionary::{DEFAULT_DICTIONARY_PATH, DICTIONARY_ENV_VAR};
use crate::config::toml_config::TomlConfig;
use crate::config::AnagramRequest;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "anagrams")]
#[command(about = "Find the dictionary words hidden in a phrase, grouped by length")]
pub struct CliConfig {
    /// The phrase to create anagrams from
    pub phrase: String,

    /// The minimum size of the anagrams we will output. Defaults to 3, or 4 for phrases of 10+ characters
    #[arg(short, long)]
    pub minimum_word_size: Option<usize>,

    /// Path to the JSON word list. Falls back to the config file, then $ANAGRAMS_DICTIONARY
    #[arg(short, long)]
    pub dictionary: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數優先，其次是設定檔，最後是內建預設值
    pub fn into_request(self) -> Result<AnagramRequest> {
        let env_dictionary = std::env::var(DICTIONARY_ENV_VAR).ok();
        self.into_request_with_env(env_dictionary)
    }

    /// 環境變數只取代內建的字典路徑，不會蓋過設定檔
    fn into_request_with_env(self, env_dictionary: Option<String>) -> Result<AnagramRequest> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let dictionary = self
            .dictionary
            .or_else(|| file_config.dictionary_path().map(str::to_string))
            .or(env_dictionary.filter(|path| !path.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_string());

        Ok(AnagramRequest {
            phrase: self.phrase,
            // -m 0 等同未指定
            minimum_word_size: self
                .minimum_word_size
                .filter(|&size| size > 0)
                .or(file_config.minimum_word_size()),
            dictionary,
            format: self
                .format
                .or(file_config.output_format())
                .unwrap_or_default(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.dictionary {
            validate_path("dictionary", path)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
