//! A monospace reference layouter.
//!
//! `GridLayouter` understands exactly the markup the typesetter writes (spacing
//! directives, the forced line boundary and the flush scope) and lays characters out on
//! a grid of half-em cells: wide characters take two cells, narrow ones one. Lines are
//! broken greedily at the box width. It is good enough to drive the typesetter's
//! relayout loop in tests and tools; it is not a shaping engine.

use paiban_traits::{LayoutError, TextLayouter};
use paiban_types::markup::{
    ALIGN_CLOSE, FLUSH_OPEN, HARD_BREAK, LINE_BOUNDARY, SPACE_PREFIX, SPACE_SUFFIX,
};
use paiban_types::{Character, Line, Snapshot, TextAlign};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Characters that may not start a wrapped line. They hang past the box edge instead.
const NO_LINE_START: &[char] = &[
    '，', '。', '、', '；', '：', '？', '！', '’', '”', '）', '】', '》', '…',
];

const OVERFLOW_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Width available to each line, in points.
    pub box_width: f32,
    /// Font size in points. A wide character advances by exactly this much.
    pub font_size: f32,
    /// Alignment reported for lines outside a flush scope.
    pub alignment: TextAlign,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            box_width: 240.0,
            font_size: 24.0,
            alignment: TextAlign::Justified,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridLayouter {
    config: GridConfig,
}

impl GridLayouter {
    pub fn new(config: GridConfig) -> Result<Self, LayoutError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(config.box_width) || !valid(config.font_size) {
            log::warn!(
                "Rejecting grid configuration: box_width={}, font_size={}",
                config.box_width,
                config.font_size
            );
            return Err(LayoutError::InvalidConfig(format!(
                "box_width and font_size must be positive, got {} and {}",
                config.box_width, config.font_size
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Horizontal advance of `c`: half a font size per display cell, ambiguous-width
    /// characters counted as wide.
    pub fn advance(&self, c: char) -> f32 {
        let cells = c.width_cjk().unwrap_or(0);
        cells as f32 * self.config.font_size / 2.0
    }
}

impl TextLayouter for GridLayouter {
    fn layout(&self, markup: &str) -> Result<Snapshot, LayoutError> {
        let mut builder = LineBuilder::new(self);
        let mut pos = 0;

        while pos < markup.len() {
            if markup.as_bytes()[pos] == b'<'
                && let Some((directive, len)) = parse_directive(markup, pos)?
            {
                builder.apply(directive);
                pos += len;
                continue;
            }

            let Some(c) = markup[pos..].chars().next() else {
                break;
            };
            builder.push(pos, c);
            pos += c.len_utf8();
        }

        Ok(builder.finish())
    }

    fn box_width(&self) -> f32 {
        self.config.box_width
    }

    fn font_size(&self) -> f32 {
        self.config.font_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Directive {
    /// Extra pen movement in em units before the next character.
    Space(f32),
    FlushOpen,
    AlignClose,
}

/// Recognizes a directive starting at byte `pos`. Anything that merely starts with `<`
/// is literal text; a `<space=` that cannot be parsed is an error.
fn parse_directive(markup: &str, pos: usize) -> Result<Option<(Directive, usize)>, LayoutError> {
    let rest = &markup[pos..];
    if rest.starts_with(FLUSH_OPEN) {
        return Ok(Some((Directive::FlushOpen, FLUSH_OPEN.len())));
    }
    if rest.starts_with(ALIGN_CLOSE) {
        return Ok(Some((Directive::AlignClose, ALIGN_CLOSE.len())));
    }
    if !rest.starts_with(SPACE_PREFIX) {
        return Ok(None);
    }

    let invalid = |directive: &str| LayoutError::InvalidDirective {
        offset: pos,
        directive: directive.to_string(),
    };
    let end = rest.find('>').ok_or_else(|| invalid(rest))?;
    let directive = &rest[..=end];
    let value = directive
        .strip_prefix(SPACE_PREFIX)
        .and_then(|s| s.strip_suffix(SPACE_SUFFIX))
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(directive))?;

    Ok(Some((Directive::Space(value), directive.len())))
}

struct LineBuilder<'a> {
    layouter: &'a GridLayouter,
    lines: Vec<Line>,
    characters: Vec<Character>,
    line_start: usize,
    pen: f32,
    pending_space: f32,
    in_flush: bool,
    alignment: TextAlign,
}

impl<'a> LineBuilder<'a> {
    fn new(layouter: &'a GridLayouter) -> Self {
        Self {
            layouter,
            lines: Vec::new(),
            characters: Vec::new(),
            line_start: 0,
            pen: 0.0,
            pending_space: 0.0,
            in_flush: false,
            alignment: layouter.config.alignment,
        }
    }

    fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Space(em) => self.pending_space += em * self.layouter.config.font_size,
            Directive::FlushOpen => self.in_flush = true,
            Directive::AlignClose => self.in_flush = false,
        }
    }

    fn push(&mut self, source_index: usize, c: char) {
        let advance = self.layouter.advance(c);
        let is_visible = !c.is_whitespace() && !c.is_control();

        let line_has_visible = self.characters[self.line_start..]
            .iter()
            .any(|ch| ch.is_visible);
        let limit = self.layouter.config.box_width + OVERFLOW_EPSILON;
        let overflows = self.pen + self.pending_space + advance > limit;
        if is_visible && line_has_visible && overflows && !NO_LINE_START.contains(&c) {
            self.finish_line();
        }

        if self.characters.len() == self.line_start {
            self.alignment = if self.in_flush {
                TextAlign::Flush
            } else {
                self.layouter.config.alignment
            };
        }

        let origin = self.pen + self.pending_space;
        self.pending_space = 0.0;
        self.pen = origin + advance;
        self.characters.push(Character {
            source_index,
            character: c,
            origin,
            x_advance: self.pen,
            line: self.lines.len(),
            is_visible,
        });

        if c == HARD_BREAK || c == LINE_BOUNDARY {
            self.finish_line();
        }
    }

    fn finish_line(&mut self) {
        let first_char = self.line_start;
        let chars = &self.characters[first_char..];
        if chars.is_empty() {
            return;
        }
        let last_char = self.characters.len() - 1;

        let first_visible_char = chars
            .iter()
            .position(|c| c.is_visible)
            .map_or(first_char, |i| first_char + i);
        let last_visible = chars.iter().rposition(|c| c.is_visible);
        let last_visible_char = last_visible.map_or(last_char, |i| first_char + i);
        let visible_count = chars.iter().filter(|c| c.is_visible).count();

        let length = last_visible.map_or(0.0, |i| chars[i].x_advance);
        let box_width = self.layouter.config.box_width;
        let width = match self.alignment {
            TextAlign::Justified | TextAlign::Flush => length.min(box_width),
            _ => length,
        };

        self.lines.push(Line {
            first_char,
            last_char,
            first_visible_char,
            last_visible_char,
            char_count: chars.len(),
            visible_count,
            length,
            width,
            alignment: self.alignment,
        });

        self.line_start = self.characters.len();
        self.pen = 0.0;
    }

    fn finish(mut self) -> Snapshot {
        self.finish_line();
        Snapshot::new(self.lines, self.characters)
    }
}
