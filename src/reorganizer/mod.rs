//! Import reorganizer
//!
//! Splits a document on `\n`, classifies each line and rebuilds the text
//! with import lines sorted. Two modes are supported:
//! - Preserve: imports are sorted within the block of the comment above them
//! - Group: all imports are pulled to the top as one sorted block
//!
//! Sorting compares the raw line text, not a parsed module name.

mod block;
mod options;
mod report;

pub use block::Block;
pub use options::{ReorganizeOptions, SortMode};
pub use report::{DropReason, DroppedLine, ReorganizeReport, ReorganizeStatistics};

use crate::classify::{self, LineKind};
use std::time::Instant;

/// Reorder the import lines of `text`.
///
/// Total over any input. `reorganize(text, true.into())` is the
/// "preserve comments" variant.
pub fn reorganize(text: &str, mode: SortMode) -> String {
    let lines = split_lines(text);
    layout(&lines, mode).output.join("\n")
}

/// Comment blocks of `text` with imports sorted, as used by preserve mode.
///
/// Lines before the first comment belong to no block and are not returned.
pub fn collect_blocks(text: &str) -> Vec<Block<'_>> {
    let lines = split_lines(text);
    let mut dropped = Vec::new();
    blocks_of(&lines, &mut dropped)
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

struct Layout<'a> {
    output: Vec<&'a str>,
    import_lines: usize,
    blocks: usize,
    /// 0-based line index and reason
    dropped: Vec<(usize, DropReason)>,
}

fn layout<'a>(lines: &[&'a str], mode: SortMode) -> Layout<'a> {
    match mode {
        SortMode::Preserve => layout_preserve(lines),
        SortMode::Group => layout_group(lines),
    }
}

fn blocks_of<'a>(lines: &[&'a str], dropped: &mut Vec<(usize, DropReason)>) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'a>> = None;

    for (idx, &line) in lines.iter().enumerate() {
        match classify::classify(line) {
            LineKind::Comment => {
                if let Some(mut sealed) = current.take() {
                    sealed.sort_imports();
                    blocks.push(sealed);
                }
                current = Some(Block::new(line));
            }
            kind => match current.as_mut() {
                Some(block) => block.push(line, kind),
                None => dropped.push((idx, DropReason::BeforeFirstComment)),
            },
        }
    }

    if let Some(mut sealed) = current {
        sealed.sort_imports();
        blocks.push(sealed);
    }
    blocks
}

fn layout_preserve<'a>(lines: &[&'a str]) -> Layout<'a> {
    let mut dropped = Vec::new();
    let blocks = blocks_of(lines, &mut dropped);

    Layout {
        output: blocks.iter().flat_map(|b| b.lines()).collect(),
        import_lines: blocks.iter().map(|b| b.imports.len()).sum(),
        blocks: blocks.len(),
        dropped,
    }
}

fn layout_group<'a>(lines: &[&'a str]) -> Layout<'a> {
    let mut imports = Vec::new();
    let mut others = Vec::new();
    let mut dropped = Vec::new();

    for (idx, &line) in lines.iter().enumerate() {
        match classify::classify(line) {
            LineKind::Import => imports.push(line),
            LineKind::Comment => dropped.push((idx, DropReason::Comment)),
            LineKind::Other if classify::is_blank(line) => {
                dropped.push((idx, DropReason::Blank))
            }
            LineKind::Other => others.push(line),
        }
    }

    imports.sort_unstable();
    let import_lines = imports.len();

    let mut output = imports;
    output.push("");
    output.extend(others);

    Layout {
        output,
        import_lines,
        blocks: 0,
        dropped,
    }
}

/// Result of reorganizing one document
#[derive(Debug)]
pub struct ReorganizeResult {
    pub content: String,
    pub report: ReorganizeReport,
}

/// Reorganizer that also reports what it did
pub struct Reorganizer {
    options: ReorganizeOptions,
}

impl Reorganizer {
    pub fn new(options: ReorganizeOptions) -> Self {
        Self { options }
    }

    pub fn mode(&self) -> SortMode {
        self.options.mode
    }

    /// Reorganize `text`; `input_name` only labels the report and log lines.
    pub fn reorganize(&self, text: &str, input_name: &str) -> ReorganizeResult {
        let start_time = Instant::now();
        let mode = self.options.mode;

        let lines = split_lines(text);
        let mut report = ReorganizeReport::new(input_name, mode);
        report.statistics.total_lines = lines.len();

        let layout = layout(&lines, mode);
        let content = layout.output.join("\n");

        report.statistics.import_lines = layout.import_lines;
        report.statistics.blocks = layout.blocks;
        report.statistics.changed = content != text;
        report.dropped = layout
            .dropped
            .into_iter()
            .map(|(idx, reason)| DroppedLine {
                line: idx + 1,
                reason,
                text: lines[idx].to_string(),
            })
            .collect();

        let preamble = report
            .dropped
            .iter()
            .filter(|d| d.reason == DropReason::BeforeFirstComment)
            .count();
        if preamble > 0 {
            log::warn!(
                "{}: {} line(s) before the first comment were dropped",
                input_name,
                preamble
            );
        } else if !report.dropped.is_empty() {
            log::debug!(
                "{}: dropped {} comment/blank line(s)",
                input_name,
                report.dropped.len()
            );
        }
        log::debug!(
            "{}: {} import(s), {} block(s), changed: {}",
            input_name,
            report.statistics.import_lines,
            report.statistics.blocks,
            report.statistics.changed
        );

        report.duration_ms = start_time.elapsed().as_millis() as u64;
        ReorganizeResult { content, report }
    }
}
