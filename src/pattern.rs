//! What gets removed.
//!
//! A [`Pattern`] is literal text unless the caller explicitly asks for a
//! regular expression. Literal is the default because the built-in block is
//! full of `(`, `|` and `{`, all of which are regex metacharacters.

use std::ops::Range;

use regex::Regex;
use thiserror::Error;

/// File the built-in block is removed from, relative to the working directory
pub const DEFAULT_TARGET: &str = "src/ui/app.rs";

/// The "export base file" button with its label, as laid out in the settings
/// panel. Includes the comment above it and the whitespace-only line after it.
pub const EXPORT_BUTTON_BLOCK: &str = concat!(
    "        // 添加导出基础MO文件的按钮和说明\n",
    "        ui.horizontal(|ui| {\n",
    "            if ui.button(\"导出基础文件\").clicked() {\n",
    "                self.export_base_mo_file();\n",
    "            }\n",
    "            ui.label(",
    "\"(将当前的基础MO文件导出为独立文件，不做任何合并)\");\n",
    "        });\n",
    "        \n",
);

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Pattern matches the empty string")]
    Empty,

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Text to remove from the target file
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Result<Self, PatternError> {
        let text = text.into();
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Pattern::Literal(text))
    }

    pub fn regex(expr: &str) -> Result<Self, PatternError> {
        let re = Regex::new(expr)?;
        if re.is_match("") {
            return Err(PatternError::Empty);
        }
        Ok(Pattern::Regex(re))
    }

    /// The export-button block, matched literally
    pub fn export_button() -> Self {
        Pattern::Literal(EXPORT_BUTTON_BLOCK.to_string())
    }

    /// Non-overlapping byte ranges of every match, left to right
    pub fn find_all(&self, content: &str) -> Vec<Range<usize>> {
        match self {
            Pattern::Literal(text) => content
                .match_indices(text.as_str())
                .map(|(start, m)| start..start + m.len())
                .collect(),
            Pattern::Regex(re) => re
                .find_iter(content)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Literal(_) => "literal",
            Pattern::Regex(_) => "regex",
        }
    }
}
