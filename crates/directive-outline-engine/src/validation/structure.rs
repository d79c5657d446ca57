//! "No orphan subparagraph" rule: a paragraph 1a needs a 1b, a 1a(1) needs
//! a 1a(2), and so on. A lone top-level paragraph is allowed.

use std::collections::HashMap;
use std::fmt;

use crate::models::Level;
use crate::numbering::{ancestor_parts, full_citation};

/// A level group with a single member below the top level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureWarning {
    /// Outline position of the lone paragraph
    pub index: usize,
    /// Full citation of the lone paragraph
    pub citation: String,
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paragraph {} requires at least one sibling paragraph at the same level.",
            self.citation
        )
    }
}

/// Scope key shared by siblings: ancestors' stripped labels plus own level
fn scope_key(levels: &[Level], index: usize) -> String {
    format!("{}_level{}", ancestor_parts(levels, index).concat(), levels[index])
}

/// Report every level group deeper than 1 that has exactly one member.
///
/// Warnings come out in the order their groups first appear. Advisory only;
/// nothing here blocks an edit or an export.
pub fn validate(levels: &[Level]) -> Vec<StructureWarning> {
    let mut group_of_key: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for index in 0..levels.len() {
        let key = scope_key(levels, index);
        let group = *group_of_key.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(index);
    }

    groups
        .into_iter()
        .filter_map(|members| match members.as_slice() {
            [index] if !levels[*index].is_top() => Some(StructureWarning {
                index: *index,
                citation: full_citation(levels, *index),
            }),
            _ => None,
        })
        .collect()
}
