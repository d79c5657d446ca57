//! Bijective base-26 letter sequences (1 = a, 26 = z, 27 = aa, ...).
//!
//! There is no zero digit: each position holds a value in 1..=26, so the
//! carry is taken after decrementing. This is spreadsheet column naming in
//! lowercase.

const RADIX: usize = 26;

/// Encode a positive count as a lowercase letter sequence.
///
/// # Panics
/// Panics when `n` is zero; a sibling count always starts at one.
pub fn to_letters(n: usize) -> String {
    assert!(n > 0, "letter sequences are only defined for positive counts");

    let mut letters = Vec::new();
    let mut n = n;
    while n > 0 {
        let digit = (n - 1) % RADIX;
        letters.push(b'a' + digit as u8);
        n = (n - 1) / RADIX;
    }
    letters.reverse();

    letters.into_iter().map(char::from).collect()
}

/// Decode a lowercase letter sequence back to its count
pub fn from_letters(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }

    letters.bytes().try_fold(0usize, |acc, b| {
        if !b.is_ascii_lowercase() {
            return None;
        }
        acc.checked_mul(RADIX)?
            .checked_add((b - b'a') as usize + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "a")]
    #[case(2, "b")]
    #[case(26, "z")]
    #[case(27, "aa")]
    #[case(28, "ab")]
    #[case(52, "az")]
    #[case(53, "ba")]
    #[case(702, "zz")]
    #[case(703, "aaa")]
    fn test_to_letters(#[case] n: usize, #[case] expected: &str) {
        assert_eq!(to_letters(n), expected);
    }

    #[test]
    #[should_panic(expected = "positive counts")]
    fn test_to_letters_zero_panics() {
        to_letters(0);
    }

    #[test]
    fn test_sequence_is_strictly_increasing_in_column_order() {
        // Column order: shorter sequences first, then lexicographic
        let mut previous = to_letters(1);
        for n in 2..=1000 {
            let current = to_letters(n);
            let ordered = (previous.len(), previous.as_str()) < (current.len(), current.as_str());
            assert!(ordered, "{previous} should sort before {current}");
            previous = current;
        }
    }

    #[test]
    fn test_from_letters_inverts_to_letters() {
        for n in [1, 26, 27, 52, 53, 702, 703, 18_278] {
            assert_eq!(from_letters(&to_letters(n)), Some(n));
        }
    }

    #[rstest]
    #[case("")]
    #[case("A")]
    #[case("a1")]
    #[case("(a)")]
    fn test_from_letters_rejects_invalid(#[case] input: &str) {
        assert_eq!(from_letters(input), None);
    }
}
