use crate::domain::ports::WordLookup;
use crate::utils::error::{AnagramError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_DICTIONARY_PATH: &str = "~/.config/words/english.json";
/// 取代預設字典路徑的環境變數
pub const DICTIONARY_ENV_VAR: &str = "ANAGRAMS_DICTIONARY";

/// 已載入的英文字典，載入後不再變動
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            AnagramError::DictionaryLoad {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::parse(&content).map_err(|message| AnagramError::DictionaryFormat {
            path: path.to_path_buf(),
            message,
        })
    }

    /// 解析 `{"word": 1, ...}` 格式的 JSON 字典
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|message| AnagramError::DictionaryFormat {
            path: PathBuf::from("<inline>"),
            message,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(format!(
                    "expected a JSON object of words, found {}",
                    json_kind(&other)
                ))
            }
        };

        // 值為 falsy 的單字視為不存在
        let words = entries
            .into_iter()
            .filter(|(_, marker)| is_truthy(marker))
            .map(|(word, _)| word)
            .collect();

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordLookup for Dictionary {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 第一次使用時才讀檔，之後重複使用同一份字典
#[derive(Debug)]
pub struct LazyDictionary {
    path: PathBuf,
    cell: OnceLock<Dictionary>,
}

impl LazyDictionary {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// 展開 `~` 與環境變數後建立
    pub fn from_config_path(raw: &str) -> Result<Self> {
        Ok(Self::new(expand_path(raw)?))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<&Dictionary> {
        if let Some(dictionary) = self.cell.get() {
            return Ok(dictionary);
        }

        tracing::debug!("📖 Loading dictionary from {}", self.path.display());
        let dictionary = Dictionary::from_file(&self.path)?;
        tracing::info!(
            "📖 Loaded {} words from {}",
            dictionary.len(),
            self.path.display()
        );

        Ok(self.cell.get_or_init(|| dictionary))
    }
}

pub fn expand_path(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| AnagramError::InvalidConfigValueError {
            field: "dictionary".to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_str_keeps_truthy_words() {
        let dictionary = Dictionary::from_json_str(
            r#"{"cat": 1, "act": true, "dog": 0, "cow": false, "hen": null, "emu": ""}"#,
        )
        .unwrap();

        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("act"));
        assert!(!dictionary.contains("dog"));
        assert!(!dictionary.contains("cow"));
        assert!(!dictionary.contains("hen"));
        assert!(!dictionary.contains("emu"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_lookup_is_exact() {
        let dictionary = Dictionary::from_words(["Cat"]);
        assert!(dictionary.is_word("Cat"));
        assert!(!dictionary.is_word("cat"));
    }

    #[test]
    fn test_non_object_dictionary_is_rejected() {
        let err = Dictionary::from_json_str(r#"["cat", "dog"]"#).unwrap_err();
        assert!(matches!(err, AnagramError::DictionaryFormat { .. }));
        assert!(err.to_string().contains("an array"));

        assert!(Dictionary::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = Dictionary::from_file("/definitely/not/here/english.json").unwrap_err();
        assert!(matches!(err, AnagramError::DictionaryLoad { .. }));
    }

    #[test]
    fn test_lazy_dictionary_loads_once() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"cat": 1}}"#).unwrap();

        let lazy = LazyDictionary::new(file.path());
        assert!(!lazy.is_loaded());
        assert!(lazy.get().unwrap().contains("cat"));
        assert!(lazy.is_loaded());

        // 檔案被改寫後仍使用快取
        std::fs::write(file.path(), r#"{"dog": 1}"#).unwrap();
        let cached = lazy.get().unwrap();
        assert!(cached.contains("cat"));
        assert!(!cached.contains("dog"));
    }

    #[test]
    fn test_expand_path_resolves_home() {
        let expanded = expand_path("/tmp/words.json").unwrap();
        assert_eq!(expanded, PathBuf::from("/tmp/words.json"));

        if let Ok(home) = std::env::var("HOME") {
            let expanded = expand_path(DEFAULT_DICTIONARY_PATH).unwrap();
            assert!(expanded.starts_with(home));
        }
    }
}
