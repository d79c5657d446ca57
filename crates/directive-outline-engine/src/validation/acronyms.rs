//! First-use checking for acronyms across the directive body.
//!
//! An all-caps token of two or more letters must be spelled out as
//! `Full Name (ACRONYM)` before, or in, the paragraph that first uses it.
//! The set of defined acronyms grows in document order, so an edit to an
//! early paragraph can change the verdict for every later one; callers
//! rescan the whole outline rather than a single paragraph.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::Paragraph;

fn acronym_token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\b[A-Z]{2,}\b").expect("Invalid acronym regex"))
}

/// An acronym used before it was spelled out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymError {
    pub acronym: String,
}

impl fmt::Display for AcronymError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Acronym \"{0}\" used without being defined first. Please define it as \"Full Name ({0})\".",
            self.acronym
        )
    }
}

/// Whether `content` spells out `acronym` as `Capitalized Words (ACRONYM)`
pub fn defines_acronym(content: &str, acronym: &str) -> bool {
    let pattern = format!(
        r"\b[A-Za-z][a-z]+(?:\s[A-Za-z][a-z]+)*\s*\(\s*{}\s*\)",
        regex::escape(acronym)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// Running state of one document-order pass
#[derive(Debug, Default)]
pub struct AcronymChecker {
    defined: HashSet<String>,
}

impl AcronymChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the next paragraph in document order.
    ///
    /// Stops at the first offending token. Acronyms defined in this
    /// paragraph become legal here and in every later paragraph.
    pub fn check(&mut self, content: &str) -> Option<AcronymError> {
        for token in acronym_token_regex().find_iter(content) {
            let acronym = token.as_str();
            let already_defined = self.defined.contains(acronym);
            let defining_now = defines_acronym(content, acronym);

            if !already_defined && !defining_now {
                return Some(AcronymError {
                    acronym: acronym.to_string(),
                });
            }
            if defining_now {
                self.defined.insert(acronym.to_string());
            }
        }
        None
    }

    pub fn is_defined(&self, acronym: &str) -> bool {
        self.defined.contains(acronym)
    }
}

/// Per-paragraph verdicts for a sequence of paragraph contents
pub fn check_acronyms<'a>(contents: impl IntoIterator<Item = &'a str>) -> Vec<Option<AcronymError>> {
    let mut checker = AcronymChecker::new();
    contents
        .into_iter()
        .map(|content| checker.check(content))
        .collect()
}

/// Recompute `acronym_error` for every paragraph, in document order
pub fn rescan(paragraphs: &mut [Paragraph]) {
    let mut checker = AcronymChecker::new();
    for paragraph in paragraphs.iter_mut() {
        paragraph.acronym_error = checker.check(&paragraph.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, ParagraphId};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn error(acronym: &str) -> Option<AcronymError> {
        Some(AcronymError {
            acronym: acronym.to_string(),
        })
    }

    #[test]
    fn test_use_before_definition_is_flagged() {
        let results = check_acronyms([
            "Use of MCDMP is required.",
            "See Marine Corps Directives Management Program (MCDMP) for details.",
        ]);

        assert_eq!(results, vec![error("MCDMP"), None]);
    }

    #[test]
    fn test_definition_moved_earlier_legalises_both() {
        let results = check_acronyms([
            "Marine Corps Directives Management Program (MCDMP) governs this.",
            "See Marine Corps Directives Management Program (MCDMP) for details.",
        ]);

        assert_eq!(results, vec![None, None]);
    }

    #[test]
    fn test_definition_applies_to_later_paragraphs() {
        let results = check_acronyms([
            "The Table of Organization (TO) is attached.",
            "Update the TO annually.",
        ]);

        assert_eq!(results, vec![None, None]);
    }

    #[test]
    fn test_definition_is_self_referential() {
        let results = check_acronyms(["The USMC applies. United States Marine Corps (USMC)."]);
        assert_eq!(results, vec![None]);
    }

    #[test]
    fn test_only_first_offending_token_is_reported() {
        let results = check_acronyms(["Both ABC and XYZ are undefined."]);
        assert_eq!(results, vec![error("ABC")]);
    }

    #[test]
    fn test_error_message_format() {
        let message = AcronymError {
            acronym: "SSIC".to_string(),
        }
        .to_string();

        assert_eq!(
            message,
            "Acronym \"SSIC\" used without being defined first. Please define it as \"Full Name (SSIC)\"."
        );
    }

    #[rstest]
    #[case("Standard Subject Identification Code (SSIC)", "SSIC", true)]
    #[case("Standard Subject Identification Code ( SSIC )", "SSIC", true)]
    #[case("Code(SSIC)", "SSIC", true)]
    #[case("A (SSIC)", "SSIC", false)]
    #[case("Standard Subject Identification Code (SSICX)", "SSIC", false)]
    #[case("Standard Subject Identification Code (SSIC)", "MCO", false)]
    fn test_defines_acronym(#[case] content: &str, #[case] acronym: &str, #[case] expected: bool) {
        assert_eq!(defines_acronym(content, acronym), expected);
    }

    #[rstest]
    #[case("A single capital is fine.")]
    #[case("Mixed Case Words are fine.")]
    #[case("")]
    fn test_text_without_acronyms(#[case] content: &str) {
        assert_eq!(check_acronyms([content]), vec![None]);
    }

    #[test]
    fn test_rescan_populates_paragraphs() {
        let mut paragraphs = vec![
            Paragraph::new(ParagraphId(1), Level::TOP).with_content("Report to HQMC."),
            Paragraph::new(ParagraphId(2), Level::TOP)
                .with_content("Headquarters Marine Corps (HQMC) is the approver."),
        ];

        rescan(&mut paragraphs);

        assert_eq!(paragraphs[0].acronym_error, error("HQMC"));
        assert_eq!(paragraphs[1].acronym_error, None);
    }

    #[test]
    fn test_checker_tracks_defined_set() {
        let mut checker = AcronymChecker::new();
        assert!(checker.check("Fleet Marine Force (FMF) units.").is_none());
        assert!(checker.is_defined("FMF"));
        assert!(!checker.is_defined("MEF"));
    }
}
