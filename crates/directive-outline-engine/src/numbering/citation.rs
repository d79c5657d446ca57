//! Military outline citations.
//!
//! Each level cycles through a fixed label style:
//!
//! | level | style | example |
//! |-------|-------|---------|
//! | 1, 5  | arabic + period | `3.` |
//! | 2     | letters | `c` |
//! | 6     | letters + period | `c.` |
//! | 3, 7  | arabic in parentheses | `(2)` |
//! | 4, 8  | letters in parentheses | `(c)` |
//!
//! A full citation concatenates the ancestors' labels with punctuation
//! stripped, followed by the paragraph's own label: a level-3 paragraph
//! under `3.` and `c` renders as `3c(2)`.
//!
//! Everything here is computed from the level sequence alone. The outline
//! has no parent pointers; a paragraph's parent is the nearest preceding
//! paragraph exactly one level shallower, and its sibling scope starts right
//! after the nearest preceding paragraph that is shallower at all.

use crate::models::Level;
use crate::numbering::letters::to_letters;

/// Label for a single level given the paragraph's 1-based position among
/// its siblings.
///
/// # Panics
/// Panics when `count` is zero.
pub fn citation_part(level: Level, count: usize) -> String {
    assert!(count > 0, "sibling counts start at one");

    match level.get() {
        1 | 5 => format!("{count}."),
        2 => to_letters(count),
        6 => format!("{}.", to_letters(count)),
        3 | 7 => format!("({count})"),
        4 | 8 => format!("({})", to_letters(count)),
        other => unreachable!("level {other} is outside 1..=8"),
    }
}

/// Remove `.`, `(` and `)` from a label so it can be embedded in a
/// descendant's citation
pub fn strip_punctuation(part: &str) -> String {
    part.chars().filter(|c| !matches!(c, '.' | '(' | ')')).collect()
}

/// How many paragraphs at exactly `level` appear from the start of the
/// current scope up to and including `index`.
///
/// The scope begins right after the nearest preceding paragraph shallower
/// than `level`, or at the start of the outline when there is none.
pub fn count_at_level(levels: &[Level], index: usize, level: Level) -> usize {
    let scope_start = levels[..index]
        .iter()
        .rposition(|l| *l < level)
        .map_or(0, |i| i + 1);

    levels[scope_start..=index]
        .iter()
        .filter(|l| **l == level)
        .count()
}

/// Own label of the paragraph at `index`
pub fn own_part(levels: &[Level], index: usize) -> String {
    let level = levels[index];
    citation_part(level, count_at_level(levels, index, level))
}

/// Stripped labels of every ancestor of `index`, outermost first.
///
/// Walks backward looking for the expected parent level, then that
/// parent's parent, and so on. A missing intermediate level ends the chain
/// at that point, so `[1, 3]` gives the level-3 paragraph no ancestors.
pub fn ancestor_parts(levels: &[Level], index: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut expected = levels[index].parent();

    for i in (0..index).rev() {
        let Some(wanted) = expected else {
            break;
        };
        if levels[i] == wanted {
            parts.push(strip_punctuation(&citation_part(
                wanted,
                count_at_level(levels, i, wanted),
            )));
            expected = wanted.parent();
        }
    }

    parts.reverse();
    parts
}

/// Full hierarchical citation of the paragraph at `index`, e.g. `1b(2)`.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn full_citation(levels: &[Level], index: usize) -> String {
    let mut citation = ancestor_parts(levels, index).concat();
    citation.push_str(&own_part(levels, index));
    citation
}

/// Full citations for every paragraph, in outline order
pub fn citations(levels: &[Level]) -> Vec<String> {
    (0..levels.len())
        .map(|index| full_citation(levels, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn levels(raw: &[u8]) -> Vec<Level> {
        raw.iter()
            .map(|l| Level::new(*l).expect("test level in range"))
            .collect()
    }

    #[rstest]
    #[case(1, 3, "3.")]
    #[case(2, 3, "c")]
    #[case(3, 2, "(2)")]
    #[case(4, 3, "(c)")]
    #[case(5, 3, "3.")]
    #[case(6, 3, "c.")]
    #[case(7, 2, "(2)")]
    #[case(8, 3, "(c)")]
    #[case(2, 27, "aa")]
    #[case(4, 28, "(ab)")]
    #[case(6, 53, "ba.")]
    fn test_citation_part_table(#[case] level: u8, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(citation_part(Level::new(level).unwrap(), count), expected);
    }

    #[test]
    #[should_panic(expected = "start at one")]
    fn test_citation_part_zero_count_panics() {
        citation_part(Level::TOP, 0);
    }

    #[rstest]
    #[case("3.", "3")]
    #[case("(2)", "2")]
    #[case("(ab)", "ab")]
    #[case("c.", "c")]
    #[case("c", "c")]
    fn test_strip_punctuation(#[case] part: &str, #[case] expected: &str) {
        assert_eq!(strip_punctuation(part), expected);
    }

    #[test]
    fn test_five_top_level_paragraphs() {
        assert_eq!(
            citations(&levels(&[1, 1, 1, 1, 1])),
            vec!["1.", "2.", "3.", "4.", "5."]
        );
    }

    #[test]
    fn test_subparagraph_count_resets_after_next_main_paragraph() {
        assert_eq!(
            citations(&levels(&[1, 2, 2, 1, 2])),
            vec!["1.", "1a", "1b", "2.", "2a"]
        );
    }

    #[test]
    fn test_level_three_under_third_main_and_third_sub() {
        let outline = levels(&[1, 1, 1, 2, 2, 2, 3, 3]);
        assert_eq!(full_citation(&outline, 7), "3c(2)");
    }

    #[test]
    fn test_all_eight_levels() {
        let outline = levels(&[1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 1]);
        assert_debug_snapshot!(citations(&outline), @r#"
        [
            "1.",
            "1a",
            "1b",
            "1b(1)",
            "1b(2)",
            "1b2(a)",
            "1b2(b)",
            "1b2b1.",
            "1b2b2.",
            "1b2b2a.",
            "1b2b2b.",
            "1b2b2b(1)",
            "1b2b2b(2)",
            "1b2b2b2(a)",
            "1b2b2b2(b)",
            "2.",
        ]
        "#);
    }

    #[test]
    fn test_sibling_scope_is_nearest_shallower_ancestor() {
        // The second (1) belongs to 1b, not 1a
        let outline = levels(&[1, 2, 3, 3, 2, 3, 3]);
        assert_eq!(
            citations(&outline),
            vec!["1.", "1a", "1a(1)", "1a(2)", "1b", "1b(1)", "1b(2)"]
        );
    }

    #[test]
    fn test_letters_roll_over_past_z() {
        let mut raw = vec![1];
        raw.extend(std::iter::repeat_n(2, 28));
        let all = citations(&levels(&raw));

        assert_eq!(all[26], "1z");
        assert_eq!(all[27], "1aa");
        assert_eq!(all[28], "1ab");
    }

    #[test]
    fn test_subparagraph_without_main_paragraph() {
        assert_eq!(citations(&levels(&[2, 2])), vec!["a", "b"]);
    }

    #[test]
    fn test_skipped_level_ends_ancestor_chain() {
        assert_eq!(citations(&levels(&[1, 3, 3])), vec!["1.", "(1)", "(2)"]);
    }

    #[test]
    fn test_count_at_level_ignores_deeper_paragraphs() {
        let outline = levels(&[1, 2, 3, 3, 3, 2]);
        assert_eq!(count_at_level(&outline, 5, Level::new(2).unwrap()), 2);
    }

    #[test]
    fn test_citations_are_deterministic() {
        let outline = levels(&[1, 2, 2, 3, 3, 1, 2, 2]);
        let first = citations(&outline);
        let second = citations(&outline);
        assert_eq!(first, second);
    }
}
