use serde::{Deserialize, Serialize};

/// Horizontal alignment of a laid-out line.
///
/// `Flush` is what a layouter reports for lines inside an explicit
/// `<align="flush">` scope; `Geometry` is kept for engines that align by glyph
/// bounds instead of advances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    #[default]
    Justified,
    Flush,
    Geometry,
}

impl TextAlign {
    /// Lines that start at the left margin: punctuation may be pulled toward the
    /// margin and the line end may be pinned with a flush scope.
    pub fn is_left_aligned(self) -> bool {
        matches!(self, TextAlign::Left | TextAlign::Justified)
    }
}
