pub mod markup;
pub mod snapshot;
pub mod text;

pub use snapshot::{Character, Line, Snapshot};
pub use text::TextAlign;
