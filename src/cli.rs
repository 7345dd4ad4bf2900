use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::compare::Budget;
use crate::render::Palette;
use crate::utils::parse_size;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two panes with character highlighting
    SideBySide,
    /// Line counts per kind and the similarity score
    Summary,
    /// The full comparison as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base file (A)
    pub base_file: PathBuf,

    /// Target file (B)
    pub target_file: PathBuf,

    /// Normalize EOL (CRLF/CR to LF) before comparing
    #[arg(short = 'E', long)]
    pub normalize_eol: bool,

    /// Max size per input file (e.g., 5MB, 64KiB, 102400)
    #[arg(short = 'S', long, default_value = "5MB")]
    pub max_text_size: String,

    /// Max cells (rows x columns) of any alignment table
    #[arg(short = 'C', long, default_value_t = 25_000_000)]
    pub max_cells: u64,

    /// Max chars(A) x chars(B) for the whole-text similarity scan
    #[arg(long, default_value_t = 4_000_000_000)]
    pub max_similarity_cells: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::SideBySide)]
    pub format: OutputFormat,

    /// Column width of each side-by-side pane
    #[arg(short, long, default_value_t = 60)]
    pub width: usize,

    /// Use plain [-removed-] / {+added+} markers instead of colors
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug)]
pub struct Options {
    pub normalize_eol: bool,
    pub max_text_size: u64,
    pub max_cells: u64,
    pub max_similarity_cells: u64,
    pub format: OutputFormat,
    pub width: usize,
    pub palette: Palette,
}

impl Options {
    pub fn budget(&self) -> Budget {
        Budget {
            max_cells: self.max_cells,
            max_similarity_cells: self.max_similarity_cells,
        }
    }
}

pub fn build_options(args: &Args) -> Result<Options> {
    let max_text_size = match parse_size(&args.max_text_size) {
        Some(0) | None => bail!("Invalid --max-text-size: {}", args.max_text_size),
        Some(size) => size,
    };
    if args.width == 0 {
        bail!("--width must be at least 1");
    }

    Ok(Options {
        normalize_eol: args.normalize_eol,
        max_text_size,
        max_cells: args.max_cells,
        max_similarity_cells: args.max_similarity_cells,
        format: args.format,
        width: args.width,
        palette: if args.no_color {
            Palette::Plain
        } else {
            Palette::Ansi
        },
    })
}
