/// How a backtrack resolves a pair of non-matching elements that can be
/// consumed together without shortening the LCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    PairReplacements,
    SplitReplacements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Keep { left: usize, right: usize },
    Replace { left: usize, right: usize },
    Insert { right: usize },
    Delete { left: usize },
}

/// `cells[i][j]` is the LCS length of the first `i` elements of the left
/// sequence and the first `j` elements of the right one.
#[derive(Debug)]
pub struct LcsTable {
    cells: Vec<Vec<usize>>,
}

impl LcsTable {
    pub fn build<T, F>(left: &[T], right: &[T], eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let m = left.len();
        let n = right.len();
        let mut cells = vec![vec![0usize; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                cells[i][j] = if eq(&left[i - 1], &right[j - 1]) {
                    cells[i - 1][j - 1] + 1
                } else {
                    cells[i - 1][j].max(cells[i][j - 1])
                };
            }
        }

        Self { cells }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i][j]
    }

    pub fn lcs_len(&self) -> usize {
        let last = &self.cells[self.cells.len() - 1];
        last[last.len() - 1]
    }
}

/// Branches are tried in a fixed order: equal elements, then (only with
/// [`TieBreak::PairReplacements`]) a diagonal move that keeps the LCS length,
/// then an insertion from the right side, then a deletion from the left side.
/// Changing this order changes which of several equally long alignments is
/// returned.
pub fn backtrack<T, F>(
    table: &LcsTable,
    left: &[T],
    right: &[T],
    eq: F,
    tie_break: TieBreak,
) -> Vec<Step>
where
    F: Fn(&T, &T) -> bool,
{
    let mut i = left.len();
    let mut j = right.len();
    let mut steps = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&left[i - 1], &right[j - 1]) {
            steps.push(Step::Keep {
                left: i - 1,
                right: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if tie_break == TieBreak::PairReplacements
            && i > 0
            && j > 0
            && table.get(i - 1, j - 1) == table.get(i, j)
        {
            steps.push(Step::Replace {
                left: i - 1,
                right: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            steps.push(Step::Insert { right: j - 1 });
            j -= 1;
        } else {
            steps.push(Step::Delete { left: i - 1 });
            i -= 1;
        }
    }

    steps.reverse();
    steps
}

pub fn align_by<T, F>(left: &[T], right: &[T], eq: F, tie_break: TieBreak) -> Vec<Step>
where
    F: Fn(&T, &T) -> bool,
{
    let table = LcsTable::build(left, right, &eq);
    log::debug!(
        "lcs table {}x{} (lcs = {})",
        left.len() + 1,
        right.len() + 1,
        table.lcs_len()
    );
    backtrack(&table, left, right, &eq, tie_break)
}

pub fn align<T: PartialEq>(left: &[T], right: &[T], tie_break: TieBreak) -> Vec<Step> {
    align_by(left, right, |a, b| a == b, tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_table_lcs_len() {
        let table = LcsTable::build(&chars("ABCBDAB"), &chars("BDCABA"), |a, b| a == b);
        assert_eq!(table.lcs_len(), 4);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(3, 0), 0);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<char> = Vec::new();
        assert!(align(&empty, &empty, TieBreak::PairReplacements).is_empty());
        assert_eq!(
            align(&empty, &chars("ab"), TieBreak::SplitReplacements),
            vec![Step::Insert { right: 0 }, Step::Insert { right: 1 }]
        );
        assert_eq!(
            align(&chars("ab"), &empty, TieBreak::PairReplacements),
            vec![Step::Delete { left: 0 }, Step::Delete { left: 1 }]
        );
    }

    #[test]
    fn test_pairing_collapses_substitution() {
        let steps = align(&chars("xb"), &chars("yb"), TieBreak::PairReplacements);
        assert_eq!(
            steps,
            vec![
                Step::Replace { left: 0, right: 0 },
                Step::Keep { left: 1, right: 1 },
            ]
        );
    }

    #[test]
    fn test_split_prefers_insert_before_delete_when_walking_back() {
        // Walking back, the insertion is emitted first, so it ends up after
        // the deletion in forward order.
        let steps = align(&chars("xb"), &chars("yb"), TieBreak::SplitReplacements);
        assert_eq!(
            steps,
            vec![
                Step::Delete { left: 0 },
                Step::Insert { right: 0 },
                Step::Keep { left: 1, right: 1 },
            ]
        );
    }

    #[test]
    fn test_custom_predicate() {
        let left = ["Alpha", "beta"];
        let right = ["alpha", "BETA"];
        let steps = align_by(
            &left,
            &right,
            |a, b| a.eq_ignore_ascii_case(b),
            TieBreak::SplitReplacements,
        );
        assert_eq!(
            steps,
            vec![
                Step::Keep { left: 0, right: 0 },
                Step::Keep { left: 1, right: 1 },
            ]
        );
    }

    #[test]
    fn test_every_index_consumed_once() {
        let left = chars("the quick brown fox");
        let right = chars("a quick brown dog!");
        for tie_break in [TieBreak::PairReplacements, TieBreak::SplitReplacements] {
            let steps = align(&left, &right, tie_break);
            let mut seen_left = Vec::new();
            let mut seen_right = Vec::new();
            for step in steps {
                match step {
                    Step::Keep { left, right } | Step::Replace { left, right } => {
                        seen_left.push(left);
                        seen_right.push(right);
                    }
                    Step::Insert { right } => seen_right.push(right),
                    Step::Delete { left } => seen_left.push(left),
                }
            }
            assert_eq!(seen_left, (0..left.len()).collect::<Vec<_>>());
            assert_eq!(seen_right, (0..right.len()).collect::<Vec<_>>());
        }
    }
}
