//! Immutable result of one layout pass over a markup string.
//!
//! A snapshot is never patched. Any edit to the markup invalidates every index in it,
//! so callers request a new snapshot from the layouter instead.

use crate::text::TextAlign;
use serde::{Deserialize, Serialize};

/// One laid-out character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Byte offset of this character in the markup text the snapshot was built from.
    pub source_index: usize,
    pub character: char,
    /// Absolute pen position before the glyph.
    pub origin: f32,
    /// Absolute pen position after the glyph.
    pub x_advance: f32,
    /// Index of the owning line.
    pub line: usize,
    pub is_visible: bool,
}

impl Character {
    /// Byte offset just past this character in the markup text.
    pub fn source_end(&self) -> usize {
        self.source_index + self.character.len_utf8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Index of the first character in [`Snapshot::characters`].
    pub first_char: usize,
    /// Index of the last character, inclusive.
    pub last_char: usize,
    pub first_visible_char: usize,
    pub last_visible_char: usize,
    pub char_count: usize,
    pub visible_count: usize,
    /// Extent of the line before any justification compression.
    pub length: f32,
    /// Extent after compression. Can be smaller than `length` for justified lines.
    pub width: f32,
    pub alignment: TextAlign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub lines: Vec<Line>,
    pub characters: Vec<Character>,
}

impl Snapshot {
    pub fn new(lines: Vec<Line>, characters: Vec<Character>) -> Self {
        Self { lines, characters }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Characters of `line`, in visual order. Empty for a line with no characters.
    pub fn line_chars(&self, line: &Line) -> &[Character] {
        if line.char_count == 0 {
            return &[];
        }
        self.characters
            .get(line.first_char..=line.last_char)
            .unwrap_or(&[])
    }

    pub fn first_char(&self, line: &Line) -> Option<&Character> {
        self.line_chars(line).first()
    }

    pub fn last_char(&self, line: &Line) -> Option<&Character> {
        self.line_chars(line).last()
    }

    pub fn visible_count(&self) -> usize {
        self.lines.iter().map(|l| l.visible_count).sum()
    }
}
