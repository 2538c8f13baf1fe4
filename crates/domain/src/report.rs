// crates/domain/src/report.rs
use script_lines_shared_kernel::{CharCount, LineCount, WordCount};
use serde::{Deserialize, Serialize};

use crate::model::ParseResult;

/// Japanese text has no word boundaries; two characters are counted as one word.
pub fn words_from_characters(characters: CharCount) -> WordCount {
    WordCount::new(characters.value() / 2)
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub lines: LineCount,
    pub characters: CharCount,
    pub words: Option<WordCount>,
}

impl ReportRow {
    pub fn from_result(result: &ParseResult, include_word_count: bool) -> Self {
        Self {
            id: result.id.clone(),
            name: result.name.clone(),
            lines: result.count.lines,
            characters: result.count.characters,
            words: include_word_count.then(|| words_from_characters(result.count.characters)),
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> Vec<String> {
        let mut cells =
            vec![self.id.clone(), self.name.clone(), self.lines.to_string(), self.characters.to_string()];
        if let Some(words) = self.words {
            cells.push(words.to_string());
        }
        cells
    }

    /// Comma-joined form used for the clipboard.
    pub fn to_clipboard_text(&self) -> String {
        self.cells().join(", ")
    }
}

/// Rows plus the column layout they were built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub include_word_count: bool,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn from_results(results: &[ParseResult], include_word_count: bool) -> Self {
        Self {
            include_word_count,
            rows: results.iter().map(|r| ReportRow::from_result(r, include_word_count)).collect(),
        }
    }

    pub fn header(&self) -> Vec<&'static str> {
        let mut header = vec!["Id", "Name", "Lines", "Characters"];
        if self.include_word_count {
            header.push("Words");
        }
        header
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
