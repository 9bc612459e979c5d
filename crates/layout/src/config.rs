use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesetConfig {
    /// Break a line one ideograph early when the paragraph would otherwise end with a
    /// line holding a single ideograph.
    ///
    /// Costs up to two extra layout passes for every line where it fires.
    ///
    /// Defaults to `true`.
    pub avoid_orphans: bool,

    /// Let a line's slack absorb the leading ideographs of the next line instead of
    /// pinning the line end with an explicit boundary.
    ///
    /// - **Enabled**: fewer forced boundaries, the layouter's own reflow moves the
    ///   absorbed characters up.
    /// - **Disabled**: every justified line with flexible gaps is pinned.
    ///
    /// Defaults to `true`.
    pub absorb_next_line: bool,
}

impl Default for TypesetConfig {
    fn default() -> Self {
        Self {
            avoid_orphans: true,
            absorb_next_line: true,
        }
    }
}
