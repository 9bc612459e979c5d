//! # paiban
//!
//! Line refinement for Chinese text laid out by an external engine.
//!
//! The typesetter never measures glyphs itself. It reads the snapshot a
//! [`TextLayouter`] produces, edits the markup (punctuation kerning, a stretched last
//! gap, an explicit line end) and asks for a new snapshot:
//! - **types**: snapshot model, alignment and the markup vocabulary
//! - **traits**: the `TextLayouter` seam and its error type
//! - **layout**: classification, kerning, justification and the orphan guard
//! - **grid**: a monospace reference layouter
//!
//! ```
//! use paiban::{GridConfig, GridLayouter, TextAlign, TypesetConfig, Typesetter};
//!
//! let layouter = GridLayouter::new(GridConfig {
//!     box_width: 100.0,
//!     font_size: 10.0,
//!     alignment: TextAlign::Left,
//! })?;
//! let output = Typesetter::new(layouter, TypesetConfig::default()).typeset("“你好。”")?;
//! assert_eq!(output.markup, "<space=-0.5000em>“你好。<space=-0.3333em>”");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export foundation crates
pub use paiban_traits as traits;
pub use paiban_types as types;

// Re-export algorithm crates
pub use paiban_grid as grid;
pub use paiban_layout as layout;

// Commonly used types
pub use grid::{GridConfig, GridLayouter};
pub use layout::{
    KernDirectiveCache, TypesetConfig, TypesetError, TypesetOutput, TypesetStats, Typesetter,
};
pub use traits::{LayoutError, TextLayouter};
pub use types::{Character, Line, Snapshot, TextAlign};

/// Typesets `markup` with the reference grid layouter.
pub fn typeset_on_grid(
    markup: &str,
    grid: GridConfig,
    config: TypesetConfig,
) -> Result<TypesetOutput, TypesetError> {
    let layouter = GridLayouter::new(grid)?;
    Typesetter::new(layouter, config).typeset(markup)
}
