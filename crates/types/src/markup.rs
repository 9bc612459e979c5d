//! Markup vocabulary shared by the typesetter and the layouters that consume its output.
//!
//! The typesetter only ever inserts the pieces defined here into the caller's markup:
//! zero-width spacing directives, the forced line boundary, the flush alignment scope
//! and a non-breaking space. None of them adds a visible character.

/// Hard line break written by the author.
pub const HARD_BREAK: char = '\n';

/// Forced line boundary (vertical tab). Unlike [`HARD_BREAK`] it marks a break the
/// typesetter chose, not the author.
pub const LINE_BOUNDARY: char = '\u{0B}';

/// Keeps a trailing spacing directive from being dropped at a line boundary.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

pub const FLUSH_OPEN: &str = "<align=\"flush\">";
pub const ALIGN_CLOSE: &str = "</align>";

pub const SPACE_PREFIX: &str = "<space=";
pub const SPACE_SUFFIX: &str = "em>";

/// Formats a horizontal spacing directive of `em` font-size units, 4 decimal places.
pub fn space_directive(em: f32) -> String {
    format!("{SPACE_PREFIX}{em:.4}{SPACE_SUFFIX}")
}
