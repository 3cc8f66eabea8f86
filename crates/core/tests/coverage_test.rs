//! End-to-end coverage tests against in-memory fonts.

use std::path::Path;

use fontcoverage_core::{
    CoverageFont, FontCoverage, compute_coverage, parse_blocks, render_report,
};
use read_fonts::types::GlyphId;
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        name::{Name, NameRecord},
    },
};

const BLOCKS: &str = "\
# Test block table
0000..007F; Basic Latin
0080..00FF; Latin-1 Supplement
";

/// Build a minimal font carrying only the tables coverage consults.
fn make_test_font(full_name: &str, codepoints: impl IntoIterator<Item = u32>) -> Vec<u8> {
    let mappings: Vec<(char, GlyphId)> = codepoints
        .into_iter()
        .enumerate()
        .map(|(i, cp)| (char::from_u32(cp).unwrap(), GlyphId::new(i as u32 + 1)))
        .collect();
    let cmap = Cmap::from_mappings(mappings).expect("cmap");

    let name = Name::new(vec![NameRecord::new(
        3,
        1,
        0x409,
        read_fonts::types::NameId::new(4),
        full_name.to_string().into(),
    )]);

    let mut builder = FontBuilder::new();
    builder.add_table(&cmap).unwrap();
    builder.add_table(&name).unwrap();
    builder.build()
}

#[test]
fn test_report_for_full_ascii_font() {
    let data = make_test_font("Test Font", 0x20..=0x7E);
    let font = CoverageFont::from_data(Path::new("test.ttf"), &data).unwrap();
    assert_eq!(font.full_name(), "Test Font");

    let blocks = parse_blocks(BLOCKS).unwrap();
    let entries = compute_coverage(font.charset(), &blocks);

    // Latin-1 Supplement: 0x80-0x9F are controls, 0xA0-0xFF assigned.
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].present, entries[0].total), (95, 95));
    assert_eq!((entries[1].present, entries[1].total), (0, 96));

    let coverage = FontCoverage {
        full_name: font.full_name().to_string(),
        entries,
    };
    let report = render_report("Coverage:\n%{Test Font}\n", &[coverage]);

    assert!(report.starts_with("Coverage:\nTest Font\n"));
    assert!(report.contains("  Basic Latin (U+0000-007F): 95/95 (100.00%)"));
    assert!(report.contains("  Latin-1 Supplement (U+0080-00FF): 0/96 (0.00%)"));
    assert!(!report.contains("%{"));
}

#[test]
fn test_partial_coverage_two_decimals() {
    // All of ASCII except lowercase a-z: 95 - 26 = 69 present.
    let data = make_test_font("Partial", (0x20..=0x60).chain(0x7B..=0x7E));
    let font = CoverageFont::from_data(Path::new("partial.ttf"), &data).unwrap();

    let blocks = parse_blocks("0000..007F; Basic Latin\n").unwrap();
    let entries = compute_coverage(font.charset(), &blocks);
    assert_eq!((entries[0].present, entries[0].total), (69, 95));

    let coverage = FontCoverage {
        full_name: "Partial".to_string(),
        entries,
    };
    let report = render_report("%{Partial}", &[coverage]);
    assert!(report.contains("69/95 (72.63%)"));
}

#[test]
fn test_multiple_fonts_in_one_template() {
    let blocks = parse_blocks("0000..007F; Basic Latin\n").unwrap();
    let template = "first:\n%{Alpha}\nsecond:\n%{Beta}\n";

    let mut coverages = Vec::new();
    for (name, range) in [("Alpha", 0x41..=0x5A), ("Beta", 0x61..=0x7A)] {
        let data = make_test_font(name, range);
        let font = CoverageFont::from_data(Path::new("font.ttf"), &data).unwrap();
        coverages.push(FontCoverage {
            full_name: font.full_name().to_string(),
            entries: compute_coverage(font.charset(), &blocks),
        });
    }

    let report = render_report(template, &coverages);
    assert!(report.contains("Alpha\n  Basic Latin (U+0000-007F): 26/95 (27.37%)"));
    assert!(report.contains("Beta\n  Basic Latin (U+0000-007F): 26/95 (27.37%)"));
}

#[test]
fn test_real_font_smoke() {
    // A shipped test font parses and yields in-bounds entries.
    let data = font_test_data::CMAP12_FONT1;
    let font = read_fonts::FontRef::new(data).unwrap();
    let charset = fontcoverage_core::Charset::from_cmap(
        &read_fonts::TableProvider::cmap(&font).unwrap(),
    );

    if let Some(charset) = charset {
        let blocks = parse_blocks(BLOCKS).unwrap();
        for entry in compute_coverage(&charset, &blocks) {
            assert!(entry.total > 0);
            assert!(entry.present <= entry.total);
        }
    }
}
