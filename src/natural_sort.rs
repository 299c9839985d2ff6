use std::cmp::Ordering;

/// Comparison key for natural filename ordering.
///
/// A filename is split into maximal runs of digits and non-digits. Two keys
/// compare run by run: digit runs by numeric value, other runs
/// case-insensitively. The first unequal run decides; a key that is a strict
/// prefix of the other sorts first. This orders `1.png, 2.png, 10.png` instead
/// of the lexicographic `1.png, 10.png, 2.png`.
#[derive(Debug, Clone)]
pub struct SortKey {
    tokens: Vec<Token>,
}

#[derive(Debug, Clone)]
enum Token {
    Text(String),
    Digits(String),
}

impl SortKey {
    pub fn new(name: &str) -> Self {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut in_digits = false;

        for ch in name.chars() {
            if ch.is_ascii_digit() == in_digits {
                run.push(ch);
            } else {
                tokens.push(if in_digits { Token::Digits(run) } else { Token::Text(run) });
                run = String::from(ch);
                in_digits = !in_digits;
            }
        }
        tokens.push(if in_digits { Token::Digits(run) } else { Token::Text(run) });

        // The first token is always a text run (possibly empty), so keys of
        // different filenames never compare digits against text at the same
        // position.
        Self { tokens }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .iter()
            .zip(&other.tokens)
            .map(|(a, b)| a.cmp(b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| self.tokens.len().cmp(&other.tokens.len()))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Digits(a), Token::Digits(b)) => cmp_digit_runs(a, b),
            (Token::Text(a), Token::Text(b)) => cmp_text_runs(a, b),
            // Unreachable for keys built by SortKey::new, but Ord must be total.
            (Token::Digits(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Token {}

/// Compares two digit runs by numeric value without parsing into an integer,
/// so arbitrarily long runs cannot overflow. Equal values (`"007"` vs `"7"`)
/// fall back to byte comparison of the raw runs to keep the order total and
/// deterministic.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');

    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.cmp(b))
}

// Text runs compare case-folded only. A raw fallback here would let case
// decide before a later numeric token ("SLIDE2" vs "slide1"), so names that
// differ only by case count as equal keys and the stable sort keeps their
// input order.
fn cmp_text_runs(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b)
}

/// Compares two filenames in natural order. Pure and total; never fails.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}

/// Sorts filenames the way a human reads them: embedded numbers compare by
/// value, everything else case-insensitively. The sort is stable, so equal
/// names keep their input order.
pub fn sort_filenames_naturally<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().map(|s| s.as_ref().to_string()).collect();
    names.sort_by_cached_key(|name| SortKey::new(name));
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_by_value() {
        let sorted = sort_filenames_naturally(["1.png", "10.png", "2.png"]);
        assert_eq!(sorted, vec!["1.png", "2.png", "10.png"]);
    }

    #[test]
    fn test_prefixed_numbers() {
        let sorted = sort_filenames_naturally(["img2.png", "img10.png", "img1.png"]);
        assert_eq!(sorted, vec!["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn test_case_insensitive_text_runs() {
        let sorted = sort_filenames_naturally(["Banana.png", "apple.png", "Cherry.png"]);
        assert_eq!(sorted, vec!["apple.png", "Banana.png", "Cherry.png"]);
    }

    #[test]
    fn test_leading_zeros_do_not_change_value() {
        assert_eq!(natural_cmp("slide007.png", "slide8.png"), Ordering::Less);
        assert_eq!(natural_cmp("slide010.png", "slide9.png"), Ordering::Greater);
    }

    #[test]
    fn test_equal_value_falls_back_to_raw_run() {
        // 007 and 7 are numerically equal; the raw runs break the tie.
        assert_eq!(natural_cmp("007.png", "7.png"), Ordering::Less);
        assert_eq!(natural_cmp("7.png", "007.png"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("a.png", "ab.png"), Ordering::Less);
        assert_eq!(natural_cmp("slide1", "slide1a"), Ordering::Less);
    }

    #[test]
    fn test_digit_prefix_filenames() {
        let sorted = sort_filenames_naturally(["10a.png", "2b.png", "a1.png"]);
        assert_eq!(sorted, vec!["2b.png", "10a.png", "a1.png"]);
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        let a = "99999999999999999999999999999999999999.png";
        let b = "100000000000000000000000000000000000000.png";
        assert_eq!(natural_cmp(a, b), Ordering::Less);
    }

    #[test]
    fn test_empty_input() {
        let sorted = sort_filenames_naturally(Vec::<String>::new());
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = sort_filenames_naturally(["b2.png", "B1.png", "a10.png", "a9.png"]);
        let twice = sort_filenames_naturally(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stable_on_identical_keys() {
        // "X.png" and "x.png" fold to the same key, so they keep input order.
        let sorted = sort_filenames_naturally(["X.png", "x.png", "a.png"]);
        assert_eq!(sorted, vec!["a.png", "X.png", "x.png"]);
    }

    #[test]
    fn test_case_does_not_outrank_numbers() {
        let sorted = sort_filenames_naturally(["SLIDE2.PNG", "slide1.png"]);
        assert_eq!(sorted, vec!["slide1.png", "SLIDE2.PNG"]);
    }

    #[test]
    fn test_transitivity_spot_check() {
        let names = ["a01", "a1", "a2", "a10", "b", "B1"];
        for a in &names {
            for b in &names {
                for c in &names {
                    if natural_cmp(a, b) != Ordering::Greater
                        && natural_cmp(b, c) != Ordering::Greater
                    {
                        assert_ne!(natural_cmp(a, c), Ordering::Greater, "{} {} {}", a, b, c);
                    }
                }
            }
        }
    }
}
