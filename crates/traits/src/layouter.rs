//! TextLayouter trait for abstracting the external text layout engine.
//!
//! The typesetter never shapes or breaks text itself. It edits markup and asks a
//! layouter for a fresh [`Snapshot`] after every edit.

use paiban_types::Snapshot;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for layout operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid directive '{directive}' at byte {offset}")]
    InvalidDirective { offset: usize, directive: String },

    #[error("Invalid layouter configuration: {0}")]
    InvalidConfig(String),

    #[error("Generic layout error: {0}")]
    Generic(String),
}

/// A text layout engine that turns markup into line and character geometry.
///
/// Implementations must be pure in the markup text plus their own fixed configuration
/// (box width, font size, default alignment): laying out the same markup twice yields
/// the same snapshot.
///
/// # Example
///
/// ```ignore
/// let layouter = GridLayouter::new(GridConfig::default())?;
/// let snapshot = layouter.layout("你好，世界。")?;
/// assert_eq!(snapshot.visible_count(), 6);
/// ```
pub trait TextLayouter: Debug {
    /// Lay out `markup` and return the resulting snapshot.
    ///
    /// Character `source_index` values are byte offsets into `markup`.
    fn layout(&self, markup: &str) -> Result<Snapshot, LayoutError>;

    /// Width available to every line, in the same units as character advances.
    fn box_width(&self) -> f32;

    /// Font size used to convert advances to em units.
    fn font_size(&self) -> f32;
}

impl<T: TextLayouter + ?Sized> TextLayouter for &T {
    fn layout(&self, markup: &str) -> Result<Snapshot, LayoutError> {
        (**self).layout(markup)
    }

    fn box_width(&self) -> f32 {
        (**self).box_width()
    }

    fn font_size(&self) -> f32 {
        (**self).font_size()
    }
}

impl<T: TextLayouter + ?Sized> TextLayouter for Box<T> {
    fn layout(&self, markup: &str) -> Result<Snapshot, LayoutError> {
        (**self).layout(markup)
    }

    fn box_width(&self) -> f32 {
        (**self).box_width()
    }

    fn font_size(&self) -> f32 {
        (**self).font_size()
    }
}
