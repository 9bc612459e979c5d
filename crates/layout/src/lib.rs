use paiban_traits::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypesetError {
    #[error("Visible character {count} does not exist; the snapshot has {available}. The visible text changed during typesetting.")]
    VisibleCharOutOfRange { count: usize, available: usize },
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

pub mod absorb;
pub mod cache;
pub mod classify;
pub mod config;
pub mod justify;
pub mod orphan;
pub mod scan;
pub mod typesetter;

pub use self::absorb::absorption_profile;
pub use self::cache::KernDirectiveCache;
pub use self::classify::{CharClass, classify};
pub use self::config::TypesetConfig;
pub use self::justify::{Justification, JustifyInput, round_kern, solve};
pub use self::orphan::{is_strandable, source_index_of_visible, visible_count_through};
pub use self::scan::{KernEdit, KernScan, KernValue, scan_line};
pub use self::typesetter::{TypesetOutput, TypesetStats, Typesetter};

#[cfg(test)]
mod test_utils;
