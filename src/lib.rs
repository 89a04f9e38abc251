pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::dictionary::{Dictionary, LazyDictionary};
pub use config::AnagramRequest;
pub use core::{
    engine::AnagramEngine,
    finder::{default_minimum_length, find_anagrams},
    report::OutputFormat,
};
pub use utils::error::{AnagramError, Result};
