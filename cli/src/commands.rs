pub mod abc;
pub mod abc_words;
pub mod brackets;
pub mod list;
pub mod longest;
pub mod search;
pub mod zigzag;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use kata_common::input::IntList;

#[derive(Parser)]
#[command(name = "kata")]
#[command(version)]
#[command(about = "Small algorithm exercises, one subcommand each.")]
pub struct CommandLine {
    /// Hide headers and details; results are always printed
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output (-vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available exercises
    #[command(alias = "l")]
    List,
    /// Length of the longest substring without repeating characters
    #[command(alias = "lu")]
    Longest { text: String },
    /// Read a string back row by row after writing it in a zigzag
    #[command(alias = "z")]
    Zigzag {
        text: String,
        /// Number of rows in the zigzag
        #[arg(short, long)]
        rows: NonZeroUsize,
        /// Also draw the zigzag layout
        #[arg(short, long)]
        grid: bool,
    },
    /// Check that (), [] and {} are balanced
    #[command(alias = "b")]
    Brackets { text: String },
    /// Find a value in a rotated sorted array (prints -1 when absent)
    #[command(alias = "s")]
    Search {
        /// Distinct integers, e.g. "4,5,6,7,0,1,2" (put a leading negative after --)
        nums: IntList,
        /// Value to look for
        #[arg(short, long, allow_hyphen_values = true)]
        target: i32,
    },
    /// Check whether strings contain as many a's as b's as c's
    #[command(alias = "a")]
    Abc {
        /// Strings to check; the built-in examples when omitted
        phrases: Vec<String>,
        /// Count 'A', 'B' and 'C' as well
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// List the ABC words of a whitespace-separated word list
    #[command(alias = "w")]
    AbcWords { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
