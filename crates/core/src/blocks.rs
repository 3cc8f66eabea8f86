//! Unicode block table parsing (Blocks.txt format).

use crate::error::{Error, Result};

/// A named, contiguous range of Unicode code points.
///
/// The range is inclusive on both ends, matching the Blocks.txt
/// `START..END` notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl UnicodeBlock {
    pub fn new(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self { name: name.into(), start, end }
    }
}

/// Parse a block definition table in the public Blocks.txt layout.
///
/// Data lines have the shape `HEXSTART..HEXEND; Block Name`. Comment
/// lines (`#`-prefixed) and blank lines are skipped. Blocks are
/// returned in file order; no merging or sorting is performed.
///
/// The first malformed data line aborts the parse with
/// [`Error::ParseBlocks`] carrying its 1-based line number.
pub fn parse_blocks(text: &str) -> Result<Vec<UnicodeBlock>> {
    let mut blocks = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        blocks.push(parse_block_line(line).map_err(|message| Error::ParseBlocks {
            line: index + 1,
            message,
        })?);
    }

    Ok(blocks)
}

fn parse_block_line(line: &str) -> std::result::Result<UnicodeBlock, String> {
    let (range, name) = line
        .split_once(';')
        .ok_or_else(|| format!("expected 'START..END; Name', got '{line}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing block name in '{line}'"));
    }

    let (start, end) = range
        .trim()
        .split_once("..")
        .ok_or_else(|| format!("expected 'START..END' range, got '{}'", range.trim()))?;

    let start = parse_code_point(start)?;
    let end = parse_code_point(end)?;
    if end < start {
        return Err(format!("range end {end:04X} precedes start {start:04X}"));
    }

    Ok(UnicodeBlock::new(name, start, end))
}

fn parse_code_point(field: &str) -> std::result::Result<u32, String> {
    let field = field.trim();
    u32::from_str_radix(field, 16).map_err(|_| format!("invalid hex code point '{field}'"))
}
