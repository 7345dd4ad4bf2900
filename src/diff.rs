use serde::Serialize;

use crate::align::{align, Step, TieBreak};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Unchanged,
    Changed,
    Added,
    Removed,
}

/// One aligned line. `left` is empty for `Added`, `right` is empty for `Removed`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub kind: LineKind,
    pub left: String,
    pub right: String,
}

impl LineRecord {
    pub fn unchanged(left: &str, right: &str) -> Self {
        Self::new(LineKind::Unchanged, left, right)
    }

    pub fn changed(left: &str, right: &str) -> Self {
        Self::new(LineKind::Changed, left, right)
    }

    pub fn added(right: &str) -> Self {
        Self::new(LineKind::Added, "", right)
    }

    pub fn removed(left: &str) -> Self {
        Self::new(LineKind::Removed, left, "")
    }

    fn new(kind: LineKind, left: &str, right: &str) -> Self {
        Self {
            kind,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn has_left(&self) -> bool {
        self.kind != LineKind::Added
    }

    pub fn has_right(&self) -> bool {
        self.kind != LineKind::Removed
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CharKind {
    Unchanged,
    Added,
    Removed,
    /// Placeholder keeping the two sides the same length.
    Empty,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRecord {
    pub kind: CharKind,
    pub value: Option<char>,
}

impl CharRecord {
    pub fn unchanged(c: char) -> Self {
        Self {
            kind: CharKind::Unchanged,
            value: Some(c),
        }
    }

    pub fn added(c: char) -> Self {
        Self {
            kind: CharKind::Added,
            value: Some(c),
        }
    }

    pub fn removed(c: char) -> Self {
        Self {
            kind: CharKind::Removed,
            value: Some(c),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: CharKind::Empty,
            value: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == CharKind::Empty
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CharAlignment {
    pub left: Vec<CharRecord>,
    pub right: Vec<CharRecord>,
}

impl CharAlignment {
    fn push(&mut self, left: CharRecord, right: CharRecord) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn left_text(&self) -> String {
        self.left.iter().filter_map(|c| c.value).collect()
    }

    pub fn right_text(&self) -> String {
        self.right.iter().filter_map(|c| c.value).collect()
    }
}

/// Split on `\n` exactly as `str::split` does: `""` gives one empty line and
/// a trailing newline gives a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn align_lines(a: &[&str], b: &[&str]) -> Vec<LineRecord> {
    align(a, b, TieBreak::PairReplacements)
        .into_iter()
        .map(|step| match step {
            Step::Keep { left, right } => LineRecord::unchanged(a[left], b[right]),
            Step::Replace { left, right } => LineRecord::changed(a[left], b[right]),
            Step::Insert { right } => LineRecord::added(b[right]),
            Step::Delete { left } => LineRecord::removed(a[left]),
        })
        .collect()
}

pub fn diff_lines(text_a: &str, text_b: &str) -> Vec<LineRecord> {
    align_lines(&split_lines(text_a), &split_lines(text_b))
}

pub fn align_chars(s1: &[char], s2: &[char]) -> CharAlignment {
    let steps = align(s1, s2, TieBreak::SplitReplacements);
    let mut out = CharAlignment {
        left: Vec::with_capacity(steps.len()),
        right: Vec::with_capacity(steps.len()),
    };

    for step in steps {
        match step {
            Step::Keep { left, right } => out.push(
                CharRecord::unchanged(s1[left]),
                CharRecord::unchanged(s2[right]),
            ),
            Step::Insert { right } => out.push(CharRecord::empty(), CharRecord::added(s2[right])),
            Step::Delete { left } => out.push(CharRecord::removed(s1[left]), CharRecord::empty()),
            // Not produced with split replacements, but keep it lossless.
            Step::Replace { left, right } => {
                out.push(CharRecord::removed(s1[left]), CharRecord::empty());
                out.push(CharRecord::empty(), CharRecord::added(s2[right]));
            }
        }
    }
    out
}

pub fn diff_chars(s1: &str, s2: &str) -> CharAlignment {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    align_chars(&a, &b)
}
