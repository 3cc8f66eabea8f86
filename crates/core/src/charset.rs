//! Character set extraction from a font's cmap table.

use std::collections::BTreeSet;

use read_fonts::tables::cmap::{Cmap, CmapSubtable, PlatformId};

/// Windows platform encoding IDs for cmap subtable selection.
const WINDOWS_UNICODE_BMP: u16 = 1;
const WINDOWS_FULL_REPERTOIRE: u16 = 10;

/// The set of code points mapped by a font's character map.
///
/// Built from exactly one cmap subtable: the Windows/Unicode-BMP
/// subtable (3,1) when present, otherwise the Windows full-repertoire
/// subtable (3,10). Materialized as a sorted set so membership tests
/// are independent of the subtable format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    codepoints: BTreeSet<u32>,
}

impl Charset {
    /// Build a charset from a parsed cmap table.
    ///
    /// Returns `None` when the font has neither a (3,1) nor a (3,10)
    /// subtable in a supported format; callers decide whether that is
    /// fatal.
    pub fn from_cmap(cmap: &Cmap) -> Option<Self> {
        find_subtable(cmap).map(|subtable| Self {
            codepoints: iter_codepoints(&subtable).collect(),
        })
    }

    /// Build a charset from explicit code points.
    pub fn from_codepoints(codepoints: impl IntoIterator<Item = u32>) -> Self {
        Self { codepoints: codepoints.into_iter().collect() }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.contains(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}

/// Select the cmap subtable to report against.
///
/// Precedence is Unicode-BMP (3,1) first, then full-repertoire (3,10).
fn find_subtable<'a>(cmap: &Cmap<'a>) -> Option<CmapSubtable<'a>> {
    for encoding in [WINDOWS_UNICODE_BMP, WINDOWS_FULL_REPERTOIRE] {
        for record in cmap.encoding_records() {
            if record.platform_id() == PlatformId::Windows
                && record.encoding_id() == encoding
                && let Ok(subtable) = record.subtable(cmap.offset_data())
                && matches!(subtable, CmapSubtable::Format4(_) | CmapSubtable::Format12(_))
            {
                return Some(subtable);
            }
        }
    }
    None
}

// Entries mapped to glyph 0 (.notdef) are not real mappings; format 4
// in particular always carries a final 0xFFFF sentinel segment.
fn iter_codepoints<'a>(subtable: &'a CmapSubtable<'a>) -> Box<dyn Iterator<Item = u32> + 'a> {
    match subtable {
        CmapSubtable::Format4(f4) => {
            Box::new(f4.iter().filter(|(_, gid)| gid.to_u32() != 0).map(|(cp, _)| cp))
        }
        CmapSubtable::Format12(f12) => {
            Box::new(f12.iter().filter(|(_, gid)| gid.to_u32() != 0).map(|(cp, _)| cp))
        }
        _ => Box::new(std::iter::empty()),
    }
}
