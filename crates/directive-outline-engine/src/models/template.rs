//! Mandatory section layouts for the supported directive types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Paragraph, ParagraphId};

const GENERIC_PLACEHOLDER: &str =
    "Enter your paragraph content here... Use <u>text</u> for underlined text.";

/// Kind of directive being drafted; decides the seeded mandatory paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveType {
    /// Marine Corps Order
    #[serde(rename = "mco")]
    Order,
    /// Marine Corps Bulletin
    #[serde(rename = "mcbul")]
    Bulletin,
    /// Bulletin whose cancellation depends on a contingency
    #[serde(rename = "mcbul-contingent")]
    ContingentBulletin,
    #[default]
    Default,
}

impl DirectiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveType::Order => "mco",
            DirectiveType::Bulletin => "mcbul",
            DirectiveType::ContingentBulletin => "mcbul-contingent",
            DirectiveType::Default => "default",
        }
    }

    /// Mandatory section titles in document order
    pub fn mandatory_titles(self) -> &'static [&'static str] {
        match self {
            DirectiveType::Order => &[
                "Situation",
                "Cancellation",
                "Mission",
                "Execution",
                "Administration and Logistics",
                "Command and Signal",
            ],
            DirectiveType::Bulletin => &[
                "Purpose",
                "Cancellation",
                "Background",
                "Action",
                "Reserve Applicability",
            ],
            DirectiveType::ContingentBulletin => &[
                "Purpose",
                "Cancellation",
                "Background",
                "Action",
                "Reserve Applicability",
                "Cancellation Contingency",
            ],
            DirectiveType::Default => &[
                "Situation",
                "Mission",
                "Execution",
                "Administration and Logistics",
                "Command and Signal",
            ],
        }
    }

    /// Seed paragraphs for a new outline, ids starting at 1
    pub fn seed_paragraphs(self) -> Vec<Paragraph> {
        self.mandatory_titles()
            .iter()
            .zip(1..)
            .map(|(title, id)| Paragraph::mandatory(ParagraphId(id), *title))
            .collect()
    }

    fn is_bulletin(self) -> bool {
        matches!(
            self,
            DirectiveType::Bulletin | DirectiveType::ContingentBulletin
        )
    }
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown directive type `{0}` (expected mco, mcbul, mcbul-contingent or default)")]
pub struct ParseDirectiveTypeError(pub String);

impl FromStr for DirectiveType {
    type Err = ParseDirectiveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mco" | "order" => Ok(DirectiveType::Order),
            "mcbul" | "bulletin" => Ok(DirectiveType::Bulletin),
            "mcbul-contingent" => Ok(DirectiveType::ContingentBulletin),
            "default" => Ok(DirectiveType::Default),
            _ => Err(ParseDirectiveTypeError(s.to_string())),
        }
    }
}

/// Guidance text shown in an empty paragraph editor
pub fn placeholder(directive: DirectiveType, title: Option<&str>) -> String {
    let Some(title) = title else {
        return GENERIC_PLACEHOLDER.to_string();
    };

    let text = if directive.is_bulletin() {
        bulletin_placeholder(title)
    } else {
        order_placeholder(title)
    };

    text.map(str::to_string)
        .unwrap_or_else(|| format!("Enter content for {title}..."))
}

fn order_placeholder(title: &str) -> Option<&'static str> {
    Some(match title {
        "Situation" => {
            "Enter the purpose and background for this directive. Describe what this order addresses and why it is needed."
        }
        "Cancellation" => {
            "List directives being canceled. Show SSIC codes and include dates for bulletins. Only cancel directives you sponsor."
        }
        "Mission" => {
            "Describe the task to be accomplished with clear, concise statements. When cancellation is included, this becomes paragraph 3."
        }
        "Execution" => {
            "Provide clear statements of commander's intent to implement the directive. Include: (1) Commander's Intent and Concept of Operations, (2) Subordinate Element Missions, (3) Coordinating Instructions."
        }
        "Administration and Logistics" => {
            "Describe logistics, specific responsibilities, and support requirements."
        }
        "Command and Signal" => {
            "Include: a. Command - Applicability statement (e.g., \"This Order is applicable to the Marine Corps Total Force\"). b. Signal - \"This Order is effective the date signed.\""
        }
        _ => return None,
    })
}

fn bulletin_placeholder(title: &str) -> Option<&'static str> {
    Some(match title {
        "Purpose" => {
            "Enter the reason for this bulletin. This paragraph gives the purpose and must be first."
        }
        "Cancellation" => {
            "List directives being canceled. Show SSIC codes and include dates for bulletins. Only cancel directives you sponsor."
        }
        "Background" => {
            "Provide background information when needed to explain the context or history."
        }
        "Action" => {
            "Advise organizations/commands of specific action required. Note: Actions required by bulletins are canceled when the bulletin cancels unless incorporated into another directive."
        }
        "Reserve Applicability" => {
            "Enter applicability statement, e.g., \"This Directive is applicable to the Marine Corps Total Force\" or \"This Directive is applicable to the Marine Corps Reserve.\""
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("mco", DirectiveType::Order)]
    #[case("MCBUL", DirectiveType::Bulletin)]
    #[case("mcbul-contingent", DirectiveType::ContingentBulletin)]
    #[case(" default ", DirectiveType::Default)]
    fn test_parse_directive_type(#[case] input: &str, #[case] expected: DirectiveType) {
        assert_eq!(input.parse::<DirectiveType>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_directive_type() {
        let err = "memo".parse::<DirectiveType>().unwrap_err();
        assert_eq!(err, ParseDirectiveTypeError("memo".to_string()));
    }

    #[test]
    fn test_order_seed_paragraphs() {
        let seeded = DirectiveType::Order.seed_paragraphs();
        let titles: Vec<_> = seeded.iter().filter_map(|p| p.title.as_deref()).collect();

        assert_eq!(
            titles,
            vec![
                "Situation",
                "Cancellation",
                "Mission",
                "Execution",
                "Administration and Logistics",
                "Command and Signal",
            ]
        );
        assert!(seeded.iter().all(|p| p.is_mandatory && p.level.is_top()));
        assert_eq!(seeded[0].id, ParagraphId(1));
        assert_eq!(seeded[5].id, ParagraphId(6));
    }

    #[test]
    fn test_contingent_bulletin_adds_contingency() {
        let plain = DirectiveType::Bulletin.seed_paragraphs();
        let contingent = DirectiveType::ContingentBulletin.seed_paragraphs();

        assert_eq!(contingent.len(), plain.len() + 1);
        assert_eq!(
            contingent.last().and_then(|p| p.title.as_deref()),
            Some("Cancellation Contingency")
        );
    }

    #[test]
    fn test_placeholder_for_untitled_paragraph() {
        assert_eq!(placeholder(DirectiveType::Order, None), GENERIC_PLACEHOLDER);
    }

    #[test]
    fn test_placeholder_unknown_title() {
        assert_eq!(
            placeholder(DirectiveType::Bulletin, Some("Cancellation Contingency")),
            "Enter content for Cancellation Contingency..."
        );
    }

    #[test]
    fn test_default_uses_order_placeholders() {
        assert_eq!(
            placeholder(DirectiveType::Default, Some("Mission")),
            placeholder(DirectiveType::Order, Some("Mission"))
        );
        assert!(placeholder(DirectiveType::Bulletin, Some("Purpose")).starts_with("Enter the reason"));
    }
}
