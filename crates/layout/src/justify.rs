//! Distributes a line's leftover width over its flexible gaps.
//!
//! All widths here are in em (fractions of the font size).

/// Lower bound of a flexible gap.
pub const MIN_FLEXIBLE_WIDTH: f32 = -0.3333;
/// Upper bound of any flexible gap.
pub const MAX_FLEXIBLE_WIDTH: f32 = 0.5;
/// Weight of a sub slot relative to a full flexible slot.
pub const SUB_RATIO: f32 = 0.5;
/// End margins smaller than this are dropped.
pub const END_MARGIN_THRESHOLD: f32 = 0.01;

/// Truncates toward zero at 4 decimal places, keeping the sign.
pub fn round_kern(kern: f32) -> f32 {
    kern.signum() * (kern.abs() * 1e4).floor() / 1e4
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JustifyInput<'a> {
    /// Leftover width of the line after its glyphs and concrete gaps.
    pub slack: f32,
    pub flexible_count: usize,
    pub flexible_sub_count: usize,
    pub ends_with_hard_break: bool,
    /// Cumulative widths of the next line's absorbable leading run.
    pub absorb_widths: &'a [f32],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Justification {
    pub flexible_width: f32,
    pub flexible_sub_width: f32,
    /// Width still missing after the clamped gaps, placed at the end of the line.
    pub end_margin: f32,
    /// The line end has to be pinned explicitly; the layouter's own reflow would not
    /// keep it where it is.
    pub need_flush: bool,
    pub can_avoid_orphan: bool,
    /// Width taken from the next line's leading run, zero if nothing was absorbed.
    pub absorbed: f32,
}

impl Justification {
    /// Nothing to distribute.
    pub fn none(can_avoid_orphan: bool) -> Self {
        Self {
            flexible_width: 0.0,
            flexible_sub_width: 0.0,
            end_margin: 0.0,
            need_flush: false,
            can_avoid_orphan,
            absorbed: 0.0,
        }
    }
}

/// Index of the absorption entry that `slack` covers: the entry is at most `slack`
/// and the following one, if any, is larger.
fn absorb_index(slack: f32, widths: &[f32]) -> Option<usize> {
    (0..widths.len()).find(|&i| {
        slack >= widths[i] && widths.get(i + 1).is_none_or(|&next| slack < next)
    })
}

pub fn solve(input: &JustifyInput<'_>) -> Justification {
    let no_slots = input.flexible_count == 0 && input.flexible_sub_count == 0;
    if no_slots || input.ends_with_hard_break {
        return Justification::none(true);
    }

    let mut slack = input.slack;
    let mut need_flush = true;
    let mut absorbed = 0.0;
    if let Some(i) = absorb_index(slack, input.absorb_widths) {
        absorbed = input.absorb_widths[i];
        slack -= absorbed;
        need_flush = false;
    }

    // One extra unit is reserved for the trailing letter spacing.
    let flexible = input.flexible_count as f32;
    let flexible_sub = input.flexible_sub_count as f32;
    let divisor = flexible + SUB_RATIO * flexible_sub + 1.0;

    let raw = slack / divisor;
    let flexible_width = round_kern(raw.clamp(MIN_FLEXIBLE_WIDTH, MAX_FLEXIBLE_WIDTH));
    let flexible_sub_width = round_kern((SUB_RATIO * raw).clamp(0.0, MAX_FLEXIBLE_WIDTH));

    let achieved = (flexible + 1.0) * flexible_width + flexible_sub * flexible_sub_width;
    let end_margin = slack - achieved;
    let end_margin = if end_margin < END_MARGIN_THRESHOLD {
        0.0
    } else {
        round_kern(end_margin)
    };

    // Too much width: pulling one more character down would leave the line too loose.
    let can_avoid_orphan = (slack + 1.0) / divisor <= 1.0;

    Justification {
        flexible_width,
        flexible_sub_width,
        end_margin,
        need_flush,
        can_avoid_orphan,
        absorbed,
    }
}
