use std::fmt::Write as _;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::compare::{Comparison, LineDiff};
use crate::diff::{CharKind, CharRecord, LineKind};
use crate::similarity::format_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    fn removed(&self, run: &str) -> String {
        match self {
            Palette::Ansi => run.red().to_string(),
            Palette::Plain => format!("[-{run}-]"),
        }
    }

    fn added(&self, run: &str) -> String {
        match self {
            Palette::Ansi => run.green().to_string(),
            Palette::Plain => format!("{{+{run}+}}"),
        }
    }

    fn marker_width(&self) -> usize {
        match self {
            Palette::Ansi => 0,
            Palette::Plain => 4,
        }
    }

    fn gutter(&self, kind: LineKind) -> String {
        let marker = gutter_marker(kind).to_string();
        match (self, kind) {
            (Palette::Plain, _) | (Palette::Ansi, LineKind::Unchanged) => marker,
            (Palette::Ansi, LineKind::Changed) => marker.yellow().to_string(),
            (Palette::Ansi, LineKind::Added) => marker.green().to_string(),
            (Palette::Ansi, LineKind::Removed) => marker.red().to_string(),
        }
    }
}

pub fn gutter_marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged => ' ',
        LineKind::Changed => '~',
        LineKind::Added => '+',
        LineKind::Removed => '-',
    }
}

struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    fn plain(s: &str) -> Self {
        Cell {
            text: s.to_string(),
            width: UnicodeWidthStr::width(s),
        }
    }
}

fn styled_side(records: &[CharRecord], palette: Palette) -> Cell {
    let mut cell = Cell {
        text: String::new(),
        width: 0,
    };
    let mut run = String::new();
    let mut run_kind = CharKind::Unchanged;

    let flush = |run: &mut String, kind: CharKind, cell: &mut Cell| {
        if run.is_empty() {
            return;
        }
        cell.width += UnicodeWidthStr::width(run.as_str());
        match kind {
            CharKind::Removed => {
                cell.text.push_str(&palette.removed(run));
                cell.width += palette.marker_width();
            }
            CharKind::Added => {
                cell.text.push_str(&palette.added(run));
                cell.width += palette.marker_width();
            }
            CharKind::Unchanged | CharKind::Empty => cell.text.push_str(run),
        }
        run.clear();
    };

    for record in records.iter().filter(|r| !r.is_placeholder()) {
        if record.kind != run_kind {
            flush(&mut run, run_kind, &mut cell);
            run_kind = record.kind;
        }
        if let Some(c) = record.value {
            run.push(c);
        }
    }
    flush(&mut run, run_kind, &mut cell);
    cell
}

fn cells(line: &LineDiff, palette: Palette) -> (Cell, Cell) {
    let record = &line.record;
    match (&line.chars, record.kind) {
        (_, LineKind::Unchanged) | (None, _) => {
            (Cell::plain(&record.left), Cell::plain(&record.right))
        }
        (Some(chars), LineKind::Added) => (Cell::plain(""), styled_side(&chars.right, palette)),
        (Some(chars), LineKind::Removed) => (styled_side(&chars.left, palette), Cell::plain("")),
        (Some(chars), LineKind::Changed) => (
            styled_side(&chars.left, palette),
            styled_side(&chars.right, palette),
        ),
    }
}

// Left pane is padded to `width` columns; longer lines overflow.
pub fn side_by_side(cmp: &Comparison, palette: Palette, width: usize) -> String {
    let mut out = String::new();
    for line in &cmp.lines {
        let (left, right) = cells(line, palette);
        let pad = " ".repeat(width.saturating_sub(left.width));
        let _ = writeln!(
            out,
            "{} {}{} │ {}",
            palette.gutter(line.record.kind),
            left.text,
            pad,
            right.text
        );
    }
    out
}

pub fn similarity_line(cmp: &Comparison) -> String {
    format!("Similarity: {}%", format_percent(cmp.similarity))
}

pub fn summary(cmp: &Comparison) -> String {
    let stats = cmp.stats();
    let mut out = String::new();
    let _ = writeln!(out, "== sidediff: Summary ==");
    let _ = writeln!(out, "Unchanged lines:  {}", stats.unchanged);
    let _ = writeln!(out, "Changed lines:    {}", stats.changed);
    let _ = writeln!(out, "Added lines:      {}", stats.added);
    let _ = writeln!(out, "Removed lines:    {}", stats.removed);
    let _ = writeln!(out, "{}", similarity_line(cmp));
    out
}
