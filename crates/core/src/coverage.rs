//! Per-block coverage computation.

use icu_properties::{CodePointMapData, props::GeneralCategory};

use crate::{blocks::UnicodeBlock, charset::Charset};

/// Coverage of one Unicode block by one font.
///
/// `total` counts the assigned, non-control code points in the block's
/// range; `present` counts the subset of those in the font's charset.
/// Entries are only emitted for blocks with `total > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub block: UnicodeBlock,
    pub total: u32,
    pub present: u32,
}

impl CoverageEntry {
    /// Coverage percentage, suitable for two-decimal rendering.
    pub fn percent(&self) -> f64 {
        self.present as f64 / self.total as f64 * 100.0
    }
}

/// Compute per-block coverage of `charset` against `blocks`.
///
/// Scans every code point in every block's range; membership in the
/// charset must not short-circuit the scan because `total` counts
/// assigned code points independent of font coverage. Blocks whose
/// entire range is unassigned or control are omitted.
pub fn compute_coverage(charset: &Charset, blocks: &[UnicodeBlock]) -> Vec<CoverageEntry> {
    let categories = CodePointMapData::<GeneralCategory>::new();

    let mut entries = Vec::new();
    for block in blocks {
        let mut total = 0u32;
        let mut present = 0u32;

        for codepoint in block.start..=block.end {
            let category = categories.get32(codepoint);
            if matches!(category, GeneralCategory::Unassigned | GeneralCategory::Control) {
                continue;
            }
            total += 1;
            if charset.contains(codepoint) {
                present += 1;
            }
        }

        if total > 0 {
            entries.push(CoverageEntry { block: block.clone(), total, present });
        }
    }
    entries
}
