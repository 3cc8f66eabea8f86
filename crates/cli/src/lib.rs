//! `fontcoverage` command line interface.

pub mod cli;
