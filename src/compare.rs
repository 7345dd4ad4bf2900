use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::cli::Options;
use crate::diff::{diff_chars, diff_lines, split_lines, CharAlignment, LineKind, LineRecord};
use crate::similarity::similarity_percent;
use crate::utils::{decode_text, looks_binary};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LineDiff {
    #[serde(flatten)]
    pub record: LineRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars: Option<CharAlignment>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub lines: Vec<LineDiff>,
    pub similarity: f64,
}

#[derive(Serialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub unchanged: usize,
    pub changed: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn total_changes(&self) -> usize {
        self.changed + self.added + self.removed
    }
}

impl Comparison {
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for line in &self.lines {
            match line.record.kind {
                LineKind::Unchanged => stats.unchanged += 1,
                LineKind::Changed => stats.changed += 1,
                LineKind::Added => stats.added += 1,
                LineKind::Removed => stats.removed += 1,
            }
        }
        stats
    }

    pub fn is_identical(&self) -> bool {
        self.lines
            .iter()
            .all(|l| l.record.kind == LineKind::Unchanged)
    }
}

fn highlight(record: LineRecord) -> LineDiff {
    let chars = match record.kind {
        LineKind::Unchanged => None,
        LineKind::Changed => Some(diff_chars(&record.left, &record.right)),
        LineKind::Added => Some(diff_chars("", &record.right)),
        LineKind::Removed => Some(diff_chars(&record.left, "")),
    };
    LineDiff { record, chars }
}

pub fn compare(text_a: &str, text_b: &str) -> Comparison {
    let lines = diff_lines(text_a, text_b)
        .into_iter()
        .map(highlight)
        .collect();

    Comparison {
        lines,
        similarity: similarity_percent(text_a, text_b),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Ceiling on rows x columns of any LCS table (line table, per-line char tables).
    pub max_cells: u64,
    /// Ceiling on chars(A) x chars(B), the work of the whole-text similarity scan.
    pub max_similarity_cells: u64,
}

fn cells(rows: usize, cols: usize) -> u64 {
    (rows as u64).checked_mul(cols as u64).unwrap_or(u64::MAX)
}

fn longest_line(lines: &[&str]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

pub fn check_budget(text_a: &str, text_b: &str, budget: &Budget) -> Result<()> {
    let lines_a = split_lines(text_a);
    let lines_b = split_lines(text_b);
    let max_cells = budget.max_cells;

    let line_cells = cells(lines_a.len(), lines_b.len());
    if line_cells > max_cells {
        bail!(
            "Line table too large: {line_cells} cells exceeds the limit of {max_cells} (see --max-cells)"
        );
    }

    // Any changed pair is at most the longest line of each side.
    let char_cells = cells(longest_line(&lines_a), longest_line(&lines_b));
    if char_cells > max_cells {
        bail!(
            "Character table too large: {char_cells} cells exceeds the limit of {max_cells} (see --max-cells)"
        );
    }

    let scan_cells = cells(text_a.chars().count(), text_b.chars().count());
    if scan_cells > budget.max_similarity_cells {
        bail!(
            "Similarity scan too large: {scan_cells} cells exceeds the limit of {} (see --max-similarity-cells)",
            budget.max_similarity_cells
        );
    }
    Ok(())
}

pub fn compare_texts(text_a: &str, text_b: &str, budget: &Budget) -> Result<Comparison> {
    check_budget(text_a, text_b, budget)?;
    Ok(compare(text_a, text_b))
}

fn load_input(path: &Path, opts: &Options) -> Result<String> {
    let size = fs::metadata(path)
        .with_context(|| format!("Cannot read {}", path.display()))?
        .len();
    if size > opts.max_text_size {
        bail!(
            "{} is {size} bytes, above the text limit of {} bytes (see --max-text-size)",
            path.display(),
            opts.max_text_size
        );
    }
    let bytes = fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    if looks_binary(&bytes) {
        bail!("{} looks like a binary file", path.display());
    }
    Ok(decode_text(bytes, opts.normalize_eol))
}

pub fn compare_files(a_path: &Path, b_path: &Path, opts: &Options) -> Result<Comparison> {
    let a_text = load_input(a_path, opts)?;
    let b_text = load_input(b_path, opts)?;
    log::info!(
        "comparing {} ({} chars) with {} ({} chars)",
        a_path.display(),
        a_text.chars().count(),
        b_path.display(),
        b_text.chars().count()
    );

    let comparison = compare_texts(&a_text, &b_text, &opts.budget())?;
    log::info!(
        "{:?}, similarity {:.2}%",
        comparison.stats(),
        comparison.similarity
    );
    Ok(comparison)
}
