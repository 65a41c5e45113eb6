// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the remedy command-line interface.
//!
//! Four subcommands over one notebook file: `search` ranks entries against a
//! query, `add` appends one and saves, `list` prints everything in insertion
//! order, and `show` prints one entry in full.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use remedy::StoreError;

/// Notebook file used when `--file` is not given.
pub const DEFAULT_NOTEBOOK: &str = "data.json";

#[derive(Parser)]
#[command(
    name = "remedy",
    about = "Personal problem/solution notebook with fuzzy search",
    version
)]
pub struct Cli {
    /// Notebook file (JSON array of {label, solution} objects)
    #[arg(short, long, global = true, default_value = DEFAULT_NOTEBOOK)]
    pub file: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank entries against a fuzzy query
    Search {
        /// Query; characters must appear in the label in this order
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Append an entry and save the notebook
    Add {
        /// Problem description (the searchable part)
        label: String,

        /// Solution text
        solution: String,
    },

    /// List every entry in insertion order
    List,

    /// Show one entry in full
    Show {
        /// Entry position as printed by `list` or `search`
        index: usize,
    },
}

/// Failures the CLI reports before exiting non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no entry at index {index} (notebook has {len})")]
    NoSuchRecord { index: usize, len: usize },
}
