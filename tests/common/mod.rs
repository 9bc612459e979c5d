pub mod fixtures;

use paiban::{
    GridConfig, GridLayouter, LayoutError, Snapshot, TextAlign, TextLayouter, TypesetConfig,
    TypesetError, TypesetOutput, Typesetter,
};
use std::cell::Cell;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Font size of every fixture layouter. A wide character advances by exactly this much.
pub const FONT_SIZE: f32 = 10.0;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A grid layouter `width_in_em` wide characters across.
pub fn grid(width_in_em: f32, alignment: TextAlign) -> Result<GridLayouter, LayoutError> {
    GridLayouter::new(GridConfig {
        box_width: width_in_em * FONT_SIZE,
        font_size: FONT_SIZE,
        alignment,
    })
}

pub fn typeset(
    markup: &str,
    width_in_em: f32,
    alignment: TextAlign,
) -> Result<TypesetOutput, TypesetError> {
    typeset_with(markup, width_in_em, alignment, TypesetConfig::default())
}

pub fn typeset_with(
    markup: &str,
    width_in_em: f32,
    alignment: TextAlign,
    config: TypesetConfig,
) -> Result<TypesetOutput, TypesetError> {
    init_logger();
    Typesetter::new(grid(width_in_em, alignment)?, config).typeset(markup)
}

/// Text of every line, control characters included.
pub fn line_texts(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .lines
        .iter()
        .map(|line| snapshot.line_chars(line).iter().map(|c| c.character).collect())
        .collect()
}

pub fn alignments(snapshot: &Snapshot) -> Vec<TextAlign> {
    snapshot.lines.iter().map(|line| line.alignment).collect()
}

/// Wraps a layouter and counts how often it is asked for a layout.
#[derive(Debug)]
pub struct CountingLayouter<L> {
    inner: L,
    calls: Cell<usize>,
}

impl<L> CountingLayouter<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<L: TextLayouter> TextLayouter for CountingLayouter<L> {
    fn layout(&self, markup: &str) -> Result<Snapshot, LayoutError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.layout(markup)
    }

    fn box_width(&self) -> f32 {
        self.inner.box_width()
    }

    fn font_size(&self) -> f32 {
        self.inner.font_size()
    }
}
