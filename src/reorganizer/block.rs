use crate::classify::LineKind;

/// A comment line and everything that follows it up to the next comment.
///
/// Lines are borrowed from the source text and emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub comment: &'a str,
    pub imports: Vec<&'a str>,
    pub others: Vec<&'a str>,
}

impl<'a> Block<'a> {
    pub fn new(comment: &'a str) -> Self {
        Self {
            comment,
            imports: Vec::new(),
            others: Vec::new(),
        }
    }

    /// Append a non-comment line to this block.
    pub fn push(&mut self, line: &'a str, kind: LineKind) {
        match kind {
            LineKind::Import => self.imports.push(line),
            LineKind::Comment | LineKind::Other => self.others.push(line),
        }
    }

    /// Sort imports by raw line text.
    pub fn sort_imports(&mut self) {
        self.imports.sort_unstable();
    }

    /// Comment, then imports, then the remaining lines in source order.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        std::iter::once(self.comment)
            .chain(self.imports.iter().copied())
            .chain(self.others.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lines_order() {
        let mut block = Block::new("// deps");
        block.push("import b;", LineKind::Import);
        block.push("", LineKind::Other);
        block.push("import a;", LineKind::Import);
        block.sort_imports();

        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines, vec!["// deps", "import a;", "import b;", ""]);
        assert_eq!(block.lines().count(), 4);
    }

    #[test]
    fn test_sort_keeps_raw_text() {
        let mut block = Block::new("// x");
        block.push("import z from 'a';", LineKind::Import);
        block.push("  import y from 'b';", LineKind::Import);
        block.sort_imports();
        // leading whitespace sorts before letters
        assert_eq!(block.imports, vec!["  import y from 'b';", "import z from 'a';"]);
    }
}
