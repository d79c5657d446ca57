/*!
 * # Outline Editing
 *
 * This module owns the paragraph outline of a directive body and every edit
 * the UI can make to it.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the paragraph sequence
 * - The outline is a flat `Vec<Paragraph>`; its order is the document order
 * - There are no parent pointers: a paragraph's parent is the nearest
 *   preceding paragraph one level shallower
 * - Reordering is therefore a plain swap with no re-parenting
 *
 * ### 2. Command-Based Editing
 * - All edits are expressed as **Commands** (`Cmd` enum) applied through
 *   `Outline::apply`
 * - Refused edits (deleting the first or a mandatory paragraph, moving a
 *   child above its parent) are no-ops that report an `EditRejection`
 * - Applied edits return a `Patch` with the touched range and the paragraph
 *   to focus next
 *
 * ### 3. Derived State
 * - Citations are computed on demand from the level sequence and never stored
 * - Acronym verdicts are rescanned over the whole outline after every
 *   applied edit, because an early definition legalises later uses
 * - Structural warnings are advisory and never block an edit
 *
 * ### 4. Read API: Immutable Snapshots
 * - `Outline::snapshot()` gives the UI citations, warnings and per-row
 *   capabilities without exposing the paragraph vector mutably
 *
 * ## Usage Pattern
 *
 * ```rust
 * use directive_outline_engine::editing::*;
 * use directive_outline_engine::models::{DirectiveType, ParagraphId};
 *
 * let mut outline = Outline::from_template(DirectiveType::Order);
 *
 * let patch = outline.apply(Cmd::InsertSub { after: ParagraphId(4) });
 * assert!(patch.is_applied());
 *
 * let snapshot = outline.snapshot();
 * assert_eq!(snapshot.paragraphs[4].citation, "4a");
 * assert_eq!(snapshot.warnings.len(), 1);
 * ```
 */

pub mod commands;
pub mod outline;
pub mod patch;
pub mod snapshot;

pub use commands::{Cmd, EditOutcome, EditRejection};
pub use outline::{Outline, OutlineError};
pub use patch::Patch;
pub use snapshot::{RenderParagraph, Snapshot};
