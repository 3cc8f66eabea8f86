//! CLI definitions and report generation.

use std::{
    fs::{read_to_string, write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use fontcoverage_core::{
    CoverageFont, FontCoverage, compute_coverage, parse_blocks, render_report,
};
use log::{debug, info};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "fontcoverage")]
#[command(about = "Report per-Unicode-block code point coverage for font files")]
pub struct Cli {
    /// Unicode block definitions (Blocks.txt format).
    pub blocks: PathBuf,

    /// Report template containing %{Font Full Name} placeholders.
    pub template: PathBuf,

    /// One or more font files, followed by the output file.
    //
    // Clap cannot place a required positional after a variadic one, so
    // the fonts and the output path arrive as one list and are split
    // at the last element.
    #[arg(required = true, num_args = 2.., value_name = "FONT>... <OUTPUT")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let (fonts, output) = split_font_paths(&self.paths)?;

        let blocks_text = read_to_string(&self.blocks)
            .with_context(|| format!("Failed to read block table: {}", self.blocks.display()))?;
        let blocks = parse_blocks(&blocks_text)
            .with_context(|| format!("Invalid block table: {}", self.blocks.display()))?;
        debug!("Loaded {} blocks from {}", blocks.len(), self.blocks.display());

        let template = read_to_string(&self.template)
            .with_context(|| format!("Failed to read template: {}", self.template.display()))?;

        // Fonts are independent; compute in parallel but keep results
        // in input order so error selection and output are deterministic.
        let results: Vec<Result<FontCoverage>> = fonts
            .par_iter()
            .map(|path| {
                let font = CoverageFont::load(path)?;
                let entries = compute_coverage(font.charset(), &blocks);
                debug!(
                    "{}: {} codepoints in cmap, {} non-empty blocks",
                    font.full_name(),
                    font.charset().len(),
                    entries.len()
                );
                Ok(FontCoverage { full_name: font.full_name().to_string(), entries })
            })
            .collect();

        let mut coverages = Vec::with_capacity(results.len());
        for (path, result) in fonts.iter().zip(results) {
            let coverage =
                result.with_context(|| format!("Failed to process {}", path.display()))?;
            println!(
                "{}: {} blocks covered ({})",
                coverage.full_name,
                coverage.entries.iter().filter(|e| e.present > 0).count(),
                path.display()
            );
            coverages.push(coverage);
        }

        let report = render_report(&template, &coverages);
        write(output, report)
            .with_context(|| format!("Failed to write report: {}", output.display()))?;
        info!("Wrote report to {}", output.display());

        Ok(())
    }
}

/// Split the trailing path list into font files and the output file.
fn split_font_paths(paths: &[PathBuf]) -> Result<(&[PathBuf], &PathBuf)> {
    match paths.split_last() {
        Some((output, fonts)) if !fonts.is_empty() => Ok((fonts, output)),
        _ => bail!("Expected at least one font file and an output file"),
    }
}
