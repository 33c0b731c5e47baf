// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the librero command-line interface.
//!
//! Three subcommands: `search` runs one message against a catalog file,
//! `classify` prints the topic tag of a message, and `describe` prints the
//! knowledge text for every catalog row.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "librero",
    about = "Stock-aware catalog search for grounding a text generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog for in-stock items matching a message
    Search {
        /// Catalog JSON file: an array of rows, bare or wrapped as {"json": {...}}
        #[arg(short, long)]
        catalog: PathBuf,

        /// Message payload JSON file (reads body.message.text or message.text)
        #[arg(short, long, conflicts_with = "query")]
        payload: Option<PathBuf>,

        /// Message text, instead of a payload file
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum ranked results (overrides LIBRERO_RANK_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Maximum fallback items (overrides LIBRERO_FALLBACK_LIMIT)
        #[arg(long)]
        fallback_limit: Option<usize>,

        /// Print the result envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the topic tag for a message
    Classify {
        /// Message text
        query: String,
    },

    /// Print the knowledge text for each catalog row
    Describe {
        /// Catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}
