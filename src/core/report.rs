use crate::domain::model::{Report, WordLengthGroup};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

const RULE_WIDTH: usize = 60;
const RULE_CHAR: char = '─';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn render(self, report: &Report) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(report)),
            OutputFormat::Json => render_json(report).map(|json| json + "\n"),
        }
    }
}

/// 每個群組一條標題分隔線加上單字清單，群組之間空一行
pub fn render_text(report: &Report) -> String {
    report
        .groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_report<W: Write>(writer: &mut W, rendered: &str) -> Result<()> {
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn render_group(group: &WordLengthGroup) -> String {
    let words = group
        .words
        .iter()
        .map(|word| quote_word(word))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}\n[{}]\n", rule(&group.label()), words)
}

/// 與 Python 的 repr 相同：含單引號但不含雙引號時改用雙引號
fn quote_word(word: &str) -> String {
    let quote = if word.contains('\'') && !word.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push(quote);
    for ch in word.chars() {
        if ch == '\\' || ch == quote {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push(quote);
    quoted
}

fn rule(label: &str) -> String {
    let title = format!(" {} ", label);
    let remaining = RULE_WIDTH.saturating_sub(title.chars().count());
    let left = remaining / 2;
    let right = remaining - left;

    format!(
        "{}{}{}",
        RULE_CHAR.to_string().repeat(left),
        title,
        RULE_CHAR.to_string().repeat(right)
    )
}
