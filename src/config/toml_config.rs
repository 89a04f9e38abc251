use crate::core::report::OutputFormat;
use crate::utils::error::{AnagramError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub dictionary: Option<DictionarySection>,
    pub search: Option<SearchSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictionarySection {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    pub minimum_word_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnagramError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AnagramError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn dictionary_path(&self) -> Option<&str> {
        self.dictionary.as_ref().map(|section| section.path.as_str())
    }

    pub fn minimum_word_size(&self) -> Option<usize> {
        self.search.as_ref().and_then(|section| section.minimum_word_size)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|section| section.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.dictionary_path() {
            validate_path("dictionary.path", path)?;
        }
        if let Some(size) = self.minimum_word_size() {
            validate_positive_number("search.minimum_word_size", size, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[dictionary]
path = "${HOME}/words/english.json"

[search]
minimum_word_size = 4

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.dictionary_path(), Some("${HOME}/words/english.json"));
        assert_eq!(config.minimum_word_size(), Some(4));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.dictionary_path().is_none());
        assert!(config.minimum_word_size().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = TomlConfig::from_toml_str("[pipeline]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, AnagramError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_zero_minimum_fails_validation() {
        let config = TomlConfig::from_toml_str("[search]\nminimum_word_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }
}
