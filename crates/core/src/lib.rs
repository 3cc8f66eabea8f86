//! Unicode block coverage reporting for fonts.
//!
//! Computes, for each block in a Unicode Blocks.txt table, how many of
//! the block's assigned code points a font's character map covers, and
//! renders the results into a text template via `%{Font Full Name}`
//! placeholders.

pub mod blocks;
pub mod charset;
pub mod coverage;
pub mod error;
pub mod font;
pub mod report;

pub use blocks::{UnicodeBlock, parse_blocks};
pub use charset::Charset;
pub use coverage::{CoverageEntry, compute_coverage};
pub use error::{Error, Result};
pub use font::CoverageFont;
pub use report::{FontCoverage, render_report};
