//! Report types for an import reorganization run

use super::options::SortMode;
use serde::{Deserialize, Serialize};

/// Why a line did not make it into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Preserve mode: line precedes the first comment, so no block owns it
    BeforeFirstComment,
    /// Group mode: comment lines are discarded
    Comment,
    /// Group mode: blank lines are discarded
    Blank,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::BeforeFirstComment => write!(f, "before_first_comment"),
            DropReason::Comment => write!(f, "comment"),
            DropReason::Blank => write!(f, "blank"),
        }
    }
}

/// A line removed by the transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLine {
    /// Line number (1-indexed)
    pub line: usize,
    pub reason: DropReason,
    pub text: String,
}

impl std::fmt::Display for DroppedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {} dropped ({}): {:?}", self.line, self.reason, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorganizeStatistics {
    /// Lines in the input, split on `\n`
    pub total_lines: usize,
    /// Import lines written to the output
    pub import_lines: usize,
    /// Comment blocks written (preserve mode only)
    pub blocks: usize,
    /// Output text differs from the input
    pub changed: bool,
}

/// Complete report for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorganizeReport {
    pub input_file: String,
    pub mode: SortMode,
    pub timestamp: String,
    pub duration_ms: u64,
    pub statistics: ReorganizeStatistics,
    pub dropped: Vec<DroppedLine>,
}

impl ReorganizeReport {
    pub fn new(input: &str, mode: SortMode) -> Self {
        Self {
            input_file: input.to_string(),
            mode,
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            statistics: ReorganizeStatistics::default(),
            dropped: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Import Sort Report\n");
        output.push_str("==================\n");
        output.push_str(&format!("Input:  {}\n", self.input_file));
        output.push_str(&format!("Mode:   {}\n", self.mode));
        output.push_str(&format!("Date:   {}\n", self.timestamp));
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!(
            "Total lines:     {}\n",
            self.statistics.total_lines
        ));
        output.push_str(&format!(
            "Imports:         {}\n",
            self.statistics.import_lines
        ));
        if self.mode.preserves_comments() {
            output.push_str(&format!("Blocks:          {}\n", self.statistics.blocks));
        }
        output.push_str(&format!("Dropped:         {}\n\n", self.dropped.len()));

        if !self.dropped.is_empty() {
            output.push_str("Dropped Lines\n");
            output.push_str("-------------\n");
            for dropped in &self.dropped {
                output.push_str(&format!("⚠ {}\n", dropped));
            }
            output.push('\n');
        }

        output.push_str("Result\n");
        output.push_str("------\n");
        if self.statistics.changed {
            output.push_str("✓ Imports sorted\n");
        } else {
            output.push_str("✓ Already sorted, nothing to change\n");
        }

        output
    }
}
