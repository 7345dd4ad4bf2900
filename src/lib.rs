//
// lib.rs
// sidediff
//
// Library entry that re-exports the alignment engine, the similarity scorer, the comparison runner and the renderers used by the binary and tests.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod align;
pub mod cli;
pub mod compare;
pub mod diff;
pub mod render;
pub mod similarity;
pub mod utils;

pub use cli::{build_options, Args, Options, OutputFormat};
pub use compare::{
    compare, compare_files, compare_texts, Budget, Comparison, DiffStats, LineDiff,
};
pub use diff::{
    align_chars, align_lines, diff_chars, diff_lines, CharAlignment, CharKind, CharRecord,
    LineKind, LineRecord,
};
pub use render::Palette;
pub use similarity::{levenshtein, similarity_percent};
