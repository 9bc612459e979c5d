use crate::classify::{is_following, is_ideograph};
use paiban_types::Snapshot;

/// Cumulative widths, in em, of the leading run of line `line_index` that could be
/// pulled up onto the previous line.
///
/// The run starts with an ideograph or a following punctuation mark and continues
/// through ideographs and following punctuation. Entry `k` is the width of the run up
/// to, but excluding, its `k + 2`-th character that is an ideograph; punctuation is
/// always carried along with the ideograph before it. The last entry is the whole run.
/// Returns an empty profile when the line does not exist or starts with anything else.
pub fn absorption_profile(snapshot: &Snapshot, line_index: usize, font_size: f32) -> Vec<f32> {
    let mut widths = Vec::new();
    let Some(line) = snapshot.line(line_index) else {
        return widths;
    };
    let chars = snapshot.line_chars(line);
    let Some(first) = chars.first() else {
        return widths;
    };
    if !is_ideograph(first.character) && !is_following(first.character) {
        return widths;
    }

    let origin = first.origin;
    let mut advance = first.x_advance - origin;
    for c in &chars[1..] {
        if is_ideograph(c.character) {
            widths.push(advance / font_size);
        } else if !is_following(c.character) {
            break;
        }
        advance = c.x_advance - origin;
    }

    widths.push(advance / font_size);
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FONT_SIZE, layout_left, snapshot_from_lines};

    #[test]
    fn test_profile_of_ideographs_and_punctuation() {
        let snapshot = layout_left("一二三\n我们，他a", 10.0);
        let widths = absorption_profile(&snapshot, 1, FONT_SIZE);
        // 我 | 我们， | 我们，他
        assert_eq!(widths, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_profile_stops_at_hard_break() {
        let snapshot = layout_left("一\n了。\n", 10.0);
        let widths = absorption_profile(&snapshot, 1, FONT_SIZE);
        assert_eq!(widths, vec![2.0]);
    }

    #[test]
    fn test_profile_from_uneven_advances() {
        let snapshot =
            snapshot_from_lines(&[&[('甲', 2.0)], &[('乙', 1.0), ('丙', 1.2), ('a', 0.5)]]);
        let widths = absorption_profile(&snapshot, 1, 1.0);
        assert_eq!(widths.len(), 2);
        assert!((widths[0] - 1.0).abs() < 1e-6);
        assert!((widths[1] - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_empty_profiles() {
        let snapshot = layout_left("一二\nabc", 10.0);
        assert!(absorption_profile(&snapshot, 1, FONT_SIZE).is_empty());
        assert!(absorption_profile(&snapshot, 5, FONT_SIZE).is_empty());

        let leading_quote = layout_left("一\n“二”", 10.0);
        assert!(absorption_profile(&leading_quote, 1, FONT_SIZE).is_empty());
    }
}
