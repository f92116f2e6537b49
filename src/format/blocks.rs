//! Grouping of source lines into blank-line-delimited blocks.

/// A maximal run of non-blank source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed lines, none of them empty
    pub lines: Vec<&'a str>,

    /// 1-based line number of the first line in the source
    pub start_line: usize,
}

impl<'a> Block<'a> {
    /// First line of the block.
    pub fn first(&self) -> &'a str {
        self.lines[0]
    }

    /// Lines after the first.
    pub fn rest(&self) -> &[&'a str] {
        &self.lines[1..]
    }

    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Blocks are never constructed empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into blocks of consecutive non-blank lines.
///
/// Every line is trimmed of surrounding whitespace; lines that are empty
/// after trimming separate blocks and never appear inside one.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        match current {
            Some(ref mut block) => block.lines.push(line),
            None => {
                current = Some(Block {
                    lines: vec![line],
                    start_line: idx + 1,
                })
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
