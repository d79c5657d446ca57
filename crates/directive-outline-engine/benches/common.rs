// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use directive_outline_engine::{Level, Outline, Paragraph, ParagraphId};

/// Outline of `sections` main paragraphs, each with a full chain of
/// paired subparagraphs down to `depth`
#[allow(dead_code)]
pub fn generate_outline(sections: usize, depth: u8) -> Outline {
    let mut paragraphs = Vec::new();
    let mut next_id = 1;

    for section in 0..sections {
        push(&mut paragraphs, &mut next_id, 1, format!("Section {section}."));
        for level in 2..=depth.min(8) {
            for pair in 0..2 {
                push(
                    &mut paragraphs,
                    &mut next_id,
                    level,
                    format!("Level {level} item {pair} uses USMC terms."),
                );
            }
        }
    }

    paragraphs[0].content =
        "United States Marine Corps (USMC) policy for directive drafting.".to_string();
    Outline::from_paragraphs(paragraphs).expect("generated outline is non-empty")
}

#[allow(dead_code)]
pub fn generate_levels(sections: usize, depth: u8) -> Vec<Level> {
    generate_outline(sections, depth).levels()
}

fn push(paragraphs: &mut Vec<Paragraph>, next_id: &mut u64, level: u8, content: String) {
    let level = Level::new(level).expect("generated level in range");
    paragraphs.push(Paragraph::new(ParagraphId(*next_id), level).with_content(&content));
    *next_id += 1;
}
