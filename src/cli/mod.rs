// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the beacon command-line interface.
//!
//! Three subcommands: `build` to produce the corpus from a content
//! directory, `search` to query a corpus file from the terminal, and
//! `inspect` to sanity-check a build artifact.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "beacon",
    about = "Site search corpus builder and query engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search corpus from a content directory
    Build {
        /// Content directory containing messages/ and optionally docs/
        #[arg(short, long)]
        content: PathBuf,

        /// Output path for the corpus file
        #[arg(short, long, default_value = "search-index.json")]
        output: PathBuf,
    },

    /// Query a corpus file and print ranked results
    Search {
        /// Path to the corpus file
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Print corpus statistics
    Inspect {
        /// Path to the corpus file
        corpus: PathBuf,
    },
}
