//! Report rendering: placeholder substitution into a template.

use crate::coverage::CoverageEntry;

/// Coverage results for one font, keyed by its full name.
#[derive(Debug, Clone)]
pub struct FontCoverage {
    pub full_name: String,
    pub entries: Vec<CoverageEntry>,
}

/// Render the coverage report by substituting `%{<full name>}`
/// placeholders in `template` with per-font coverage fragments.
///
/// Placeholders with no matching font are left verbatim; fonts whose
/// name never appears in the template contribute nothing. Pure
/// transform: writing the result anywhere is the caller's business.
pub fn render_report(template: &str, fonts: &[FontCoverage]) -> String {
    let mut report = template.to_string();
    for font in fonts {
        let token = format!("%{{{}}}", font.full_name);
        if report.contains(&token) {
            report = report.replace(&token, &coverage_fragment(font));
        }
    }
    report
}

/// Build the text fragment substituted for one font's placeholder:
/// a header line with the full name, then one line per block.
fn coverage_fragment(font: &FontCoverage) -> String {
    let mut fragment = font.full_name.clone();
    for entry in &font.entries {
        let block = &entry.block;
        fragment.push_str(&format!(
            "\n  {} (U+{:04X}-{:04X}): {}/{} ({:.2}%)",
            block.name,
            block.start,
            block.end,
            entry.present,
            entry.total,
            entry.percent()
        ));
    }
    fragment
}
