//! CLI Module
//!
//! Command-line interface for validating and inspecting cake documents.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cake::Category;

/// LayerCake - gender presentation layer configuration tool
#[derive(Parser, Debug)]
#[command(name = "layercake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a cake document
    #[command(name = "validate")]
    Validate {
        /// Path to the cake JSON file
        path: PathBuf,
    },

    /// Print every layer of a cake document
    #[command(name = "show")]
    Show {
        /// Path to the cake JSON file
        path: PathBuf,

        /// Only print this category (male, female, nonBinary, agender)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Print the unused sentinel layer as JSON
    #[command(name = "unused")]
    Unused,

    /// Write a cake with every slot unused
    #[command(name = "template")]
    Template {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
