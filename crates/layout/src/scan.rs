//! Per-line scan for punctuation pairs that need a fixed or flexible gap.

use crate::classify::{is_closing, is_ideograph, is_latin, is_opening};
use crate::justify::Justification;
use itertools::Itertools;
use paiban_types::{Line, Snapshot};

/// Gap between a closing and an opening mark, and before a paragraph-leading opening mark.
pub const PUNCTUATION_KERN: f32 = -0.5;
/// Gap between two opening or two closing marks.
pub const PUNCTUATION_SUB_KERN: f32 = -0.3333;

/// Width of a spacing edit, in em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernValue {
    Concrete(f32),
    /// Resolved to the line's flexible width once its slack is known.
    Flexible,
    /// Resolved to the line's (half-weight) flexible sub width.
    FlexibleSub,
}

impl KernValue {
    pub fn resolve(self, justification: &Justification) -> f32 {
        match self {
            KernValue::Concrete(width) => width,
            KernValue::Flexible => justification.flexible_width,
            KernValue::FlexibleSub => justification.flexible_sub_width,
        }
    }
}

/// A spacing directive to insert in front of the character at `source_index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernEdit {
    pub source_index: usize,
    pub value: KernValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernScan {
    /// Edits in descending `source_index` order.
    pub edits: Vec<KernEdit>,
    /// Sum of the concrete gaps between characters of the line.
    pub kern_sum: f32,
    pub flexible_count: usize,
    pub flexible_sub_count: usize,
    pub latin_count: usize,
}

impl KernScan {
    pub fn has_flexible_slots(&self) -> bool {
        self.flexible_count > 0 || self.flexible_sub_count > 0
    }

    fn push(&mut self, source_index: usize, value: KernValue) {
        match value {
            KernValue::Concrete(width) => self.kern_sum += width,
            KernValue::Flexible => self.flexible_count += 1,
            KernValue::FlexibleSub => self.flexible_sub_count += 1,
        }
        self.edits.push(KernEdit {
            source_index,
            value,
        });
    }
}

/// Gap to insert between `left` and `right`, if the pair calls for one.
pub fn pair_kern(left: char, right: char) -> Option<KernValue> {
    let (left_open, left_close) = (is_opening(left), is_closing(left));
    let (right_open, right_close) = (is_opening(right), is_closing(right));
    let (left_cjk, right_cjk) = (is_ideograph(left), is_ideograph(right));
    let (left_latin, right_latin) = (is_latin(left), is_latin(right));

    if left_close && right_open {
        Some(KernValue::Concrete(PUNCTUATION_KERN))
    } else if (left_open && right_open) || (left_close && right_close) {
        Some(KernValue::Concrete(PUNCTUATION_SUB_KERN))
    } else if (left_cjk && right_open)
        || (left_close && right_cjk)
        || (left_latin && right_open)
        || (left_close && right_latin)
    {
        Some(KernValue::Flexible)
    } else if (left_latin && right_close)
        || (left_open && right_latin)
        || (left_cjk && right_latin)
        || (left_latin && right_cjk)
    {
        Some(KernValue::FlexibleSub)
    } else {
        None
    }
}

/// Scans `line` from right to left and collects the spacing it needs.
///
/// Lines with fewer than two characters are left alone. A left-aligned line that
/// starts with an opening mark also gets that mark pulled toward the margin; this
/// edit moves the line start and is not part of `kern_sum`.
pub fn scan_line(snapshot: &Snapshot, line: &Line) -> KernScan {
    let mut scan = KernScan::default();
    let chars = snapshot.line_chars(line);
    if chars.len() < 2 {
        return scan;
    }

    scan.latin_count = chars.iter().filter(|c| is_latin(c.character)).count();

    for (right, left) in chars.iter().rev().tuple_windows() {
        if let Some(value) = pair_kern(left.character, right.character) {
            scan.push(right.source_index, value);
        }
    }

    let first = &chars[0];
    if is_opening(first.character) && line.alignment.is_left_aligned() {
        scan.edits.push(KernEdit {
            source_index: first.source_index,
            value: KernValue::Concrete(PUNCTUATION_KERN),
        });
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{layout_left, layout_with};
    use paiban_types::TextAlign;

    #[test]
    fn test_pair_rules() {
        assert_eq!(pair_kern('。', '“'), Some(KernValue::Concrete(PUNCTUATION_KERN)));
        assert_eq!(pair_kern('“', '（'), Some(KernValue::Concrete(PUNCTUATION_SUB_KERN)));
        assert_eq!(pair_kern('。', '”'), Some(KernValue::Concrete(PUNCTUATION_SUB_KERN)));
        assert_eq!(pair_kern('字', '“'), Some(KernValue::Flexible));
        assert_eq!(pair_kern('，', '字'), Some(KernValue::Flexible));
        assert_eq!(pair_kern('a', '（'), Some(KernValue::Flexible));
        assert_eq!(pair_kern('，', 'a'), Some(KernValue::Flexible));
        assert_eq!(pair_kern('a', '。'), Some(KernValue::FlexibleSub));
        assert_eq!(pair_kern('“', 'a'), Some(KernValue::FlexibleSub));
        assert_eq!(pair_kern('字', 'a'), Some(KernValue::FlexibleSub));
        assert_eq!(pair_kern('1', '字'), Some(KernValue::FlexibleSub));
    }

    #[test]
    fn test_pairs_without_rule() {
        assert_eq!(pair_kern('字', '字'), None);
        assert_eq!(pair_kern('a', 'b'), None);
        assert_eq!(pair_kern('“', '字'), None);
        assert_eq!(pair_kern('字', '。'), None);
    }

    #[test]
    fn test_quoted_sentence() {
        // The opening quote hugs the margin, the two closing marks hug each other and
        // nothing is inserted between the quote and the first ideograph.
        let snapshot = layout_left("“你好。”", 10.0);
        let scan = scan_line(&snapshot, &snapshot.lines[0]);

        let chars = &snapshot.characters;
        assert_eq!(
            scan.edits,
            vec![
                KernEdit {
                    source_index: chars[4].source_index,
                    value: KernValue::Concrete(PUNCTUATION_SUB_KERN),
                },
                KernEdit {
                    source_index: chars[0].source_index,
                    value: KernValue::Concrete(PUNCTUATION_KERN),
                },
            ]
        );
        assert_eq!(scan.kern_sum, PUNCTUATION_SUB_KERN);
        assert!(!scan.has_flexible_slots());
    }

    #[test]
    fn test_edits_descend_by_source_index() {
        let snapshot = layout_left("他说：“好。”（注）abc字", 40.0);
        let scan = scan_line(&snapshot, &snapshot.lines[0]);
        assert!(
            scan.edits
                .windows(2)
                .all(|w| w[0].source_index > w[1].source_index)
        );
        assert_eq!(scan.latin_count, 3);
        assert!(scan.flexible_count > 0);
        assert!(scan.flexible_sub_count > 0);
    }

    #[test]
    fn test_leading_opening_only_when_left_aligned() {
        let centered = layout_with("“字”", 10.0, TextAlign::Center);
        let scan = scan_line(&centered, &centered.lines[0]);
        assert!(scan.edits.is_empty());

        let left = layout_left("“字”", 10.0);
        let scan = scan_line(&left, &left.lines[0]);
        assert_eq!(scan.edits.len(), 1);
        assert_eq!(scan.kern_sum, 0.0);
    }

    #[test]
    fn test_single_character_line_is_skipped() {
        let snapshot = layout_left("“", 10.0);
        let scan = scan_line(&snapshot, &snapshot.lines[0]);
        assert_eq!(scan, KernScan::default());
    }
}
