pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = b.len();

    let mut costs: Vec<usize> = (0..=n).collect();
    for i in 1..=a.len() {
        // costs[j - 1] from the previous row
        let mut diagonal = costs[0];
        costs[0] = i;
        for j in 1..=n {
            let above = costs[j];
            costs[j] = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                diagonal.min(above).min(costs[j - 1]) + 1
            };
            diagonal = above;
        }
    }
    costs[n]
}

/// Case-insensitive similarity in percent, normalized by the longer text and
/// rounded to two decimals. Two empty texts score `0.0`, not `100.0`.
pub fn similarity_percent(text_a: &str, text_b: &str) -> f64 {
    let a = text_a.to_lowercase();
    let b = text_b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = levenshtein(&a, &b);
    log::debug!("levenshtein distance {distance} over {max_len} chars");
    let percent = 100.0 * max_len.saturating_sub(distance) as f64 / max_len as f64;
    round2(percent.clamp(0.0, 100.0))
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance_edges() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("Abc", "abc"), 1);
        assert_eq!(levenshtein("naïve", "naive"), 1);
    }

    #[test]
    fn test_distance_symmetry() {
        let words = ["", "a", "kitten", "sitting", "saturday", "sunday", "日本語", "本語"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_similarity_one_substitution() {
        assert_eq!(similarity_percent("abc", "abd"), 66.67);
        assert_eq!(format_percent(similarity_percent("abc", "abd")), "66.67");
    }

    #[test]
    fn test_similarity_both_empty_is_zero() {
        assert_eq!(similarity_percent("", ""), 0.0);
        assert_eq!(format_percent(similarity_percent("", "")), "0.00");
    }

    #[test]
    fn test_similarity_ignores_case() {
        assert_eq!(similarity_percent("Hello World", "hello world"), 100.0);
        assert_eq!(similarity_percent("abc", "xyz"), 0.0);
        assert_eq!(similarity_percent("", "abc"), 0.0);
    }

    #[test]
    fn test_similarity_bounds() {
        let texts = ["", "a", "ab\ncd", "İstanbul", "istanbul", "totally different text"];
        for a in texts {
            for b in texts {
                let s = similarity_percent(a, b);
                assert!((0.0..=100.0).contains(&s), "{a:?} / {b:?} -> {s}");
            }
        }
    }
}
