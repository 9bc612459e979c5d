//! Orphan detection and the visible-character index translation used to roll a line back.

use crate::TypesetError;
use crate::classify::{is_following, is_ideograph};
use paiban_types::Snapshot;
use paiban_types::markup::{HARD_BREAK, LINE_BOUNDARY};

/// Whether line `line_index + 1` is a single ideograph (plus trailing punctuation) that
/// can be avoided by breaking line `line_index` one character earlier.
///
/// The next line only counts when it ends the paragraph: it is either the last line or
/// ends with a hard break, which is not itself checked as punctuation. Line
/// `line_index` needs at least three characters and must end with an ideograph,
/// ignoring a forced boundary after it.
pub fn is_strandable(snapshot: &Snapshot, line_index: usize) -> bool {
    let line_count = snapshot.line_count();
    if line_index + 1 >= line_count {
        return false;
    }

    let next = &snapshot.lines[line_index + 1];
    let next_chars = snapshot.line_chars(next);
    let Some((first, rest)) = next_chars.split_first() else {
        return false;
    };
    if !is_ideograph(first.character) {
        return false;
    }

    if line_index + 2 < line_count
        && next_chars.last().map(|c| c.character) != Some(HARD_BREAK)
    {
        return false;
    }

    let rest = match rest.split_last() {
        Some((last, body)) if last.character == HARD_BREAK => body,
        _ => rest,
    };
    if !rest.iter().all(|c| is_following(c.character)) {
        return false;
    }

    let line = &snapshot.lines[line_index];
    let chars = snapshot.line_chars(line);
    if line.char_count < 3 || chars.len() < 3 {
        return false;
    }

    let mut last = chars[chars.len() - 1].character;
    if last == LINE_BOUNDARY {
        last = chars[chars.len() - 2].character;
    }

    // A line ending with a hard break has '\n' here and is rejected.
    is_ideograph(last)
}

/// Number of visible characters on lines `0..=line_index`.
pub fn visible_count_through(snapshot: &Snapshot, line_index: usize) -> usize {
    snapshot
        .lines
        .iter()
        .take(line_index + 1)
        .map(|l| l.visible_count)
        .sum()
}

/// Source index of the `count`-th visible character (1-based).
///
/// Visible characters are never added or removed by the typesetter, so a count taken
/// from one snapshot identifies the same character in any other snapshot of the pass.
/// A count that does not exist means that invariant broke and is reported, not clamped.
pub fn source_index_of_visible(snapshot: &Snapshot, count: usize) -> Result<usize, TypesetError> {
    let out_of_range = || TypesetError::VisibleCharOutOfRange {
        count,
        available: snapshot.visible_count(),
    };
    if count == 0 {
        return Err(out_of_range());
    }

    let mut remaining = count;
    for line in &snapshot.lines {
        if remaining > line.visible_count {
            remaining -= line.visible_count;
            continue;
        }

        if remaining == line.visible_count {
            return snapshot
                .characters
                .get(line.last_visible_char)
                .map(|c| c.source_index)
                .ok_or_else(out_of_range);
        }

        let candidates = snapshot
            .characters
            .get(line.first_visible_char..line.last_visible_char)
            .unwrap_or(&[]);
        for c in candidates.iter().filter(|c| c.is_visible) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(c.source_index);
            }
        }
        return Err(out_of_range());
    }

    Err(out_of_range())
}
