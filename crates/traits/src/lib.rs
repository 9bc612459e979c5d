pub mod layouter;

pub use layouter::{LayoutError, TextLayouter};
