//! The line-by-line typesetting pass.
//!
//! Each line goes through scan, justify, materialize and (optionally) the orphan
//! check. Every edit to the markup invalidates the current snapshot, so the pass asks
//! the layouter for a new one before looking at the next line. Lines are never
//! revisited: a character pulled up onto an earlier line does not get that line
//! rescanned, which is also why nothing is kerned at the very end of a line.

use crate::TypesetError;
use crate::absorb::absorption_profile;
use crate::cache::KernDirectiveCache;
use crate::config::TypesetConfig;
use crate::justify::{JustifyInput, Justification, solve};
use crate::orphan::{is_strandable, source_index_of_visible, visible_count_through};
use crate::scan::{KernEdit, KernValue, scan_line};
use paiban_traits::{LayoutError, TextLayouter};
use paiban_types::Snapshot;
use paiban_types::markup::{ALIGN_CLOSE, FLUSH_OPEN, HARD_BREAK, LINE_BOUNDARY, NO_BREAK_SPACE};
use std::sync::Arc;

/// Counters collected over one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypesetStats {
    pub lines: usize,
    /// Layout requests after the initial one.
    pub relayouts: usize,
    pub kerns_inserted: usize,
    pub flushed_lines: usize,
    /// Lines whose slack pulled up the start of the next line.
    pub absorbed_lines: usize,
    pub orphans_avoided: usize,
}

#[derive(Debug, Clone)]
pub struct TypesetOutput {
    pub markup: String,
    /// Layout of `markup`.
    pub snapshot: Snapshot,
    pub stats: TypesetStats,
}

pub struct Typesetter<L> {
    layouter: L,
    config: TypesetConfig,
    cache: Arc<KernDirectiveCache>,
}

impl<L: TextLayouter> Typesetter<L> {
    pub fn new(layouter: L, config: TypesetConfig) -> Self {
        Self {
            layouter,
            config,
            cache: KernDirectiveCache::shared(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<KernDirectiveCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn layouter(&self) -> &L {
        &self.layouter
    }

    pub fn config(&self) -> &TypesetConfig {
        &self.config
    }

    pub fn typeset(&self, markup: &str) -> Result<TypesetOutput, TypesetError> {
        let snapshot = self.layouter.layout(markup)?;
        self.typeset_snapshot(markup, snapshot)
    }

    /// Runs the pass starting from a snapshot the caller already has for `markup`.
    pub fn typeset_snapshot(
        &self,
        markup: &str,
        snapshot: Snapshot,
    ) -> Result<TypesetOutput, TypesetError> {
        let font_size = self.layouter.font_size();
        if !(font_size.is_finite() && font_size > 0.0) {
            log::warn!("Cannot typeset with font size {}", font_size);
            let message = format!("font size must be positive, got {font_size}");
            return Err(LayoutError::InvalidConfig(message).into());
        }

        let visible_before = snapshot.visible_count();
        let mut pass = Pass {
            typesetter: self,
            font_size,
            markup: markup.to_string(),
            snapshot,
            stats: TypesetStats::default(),
        };

        let mut line_index = 0;
        while line_index < pass.snapshot.line_count() {
            pass.process_line(line_index)?;
            line_index += 1;
        }

        pass.stats.lines = pass.snapshot.line_count();
        debug_assert_eq!(visible_before, pass.snapshot.visible_count());
        log::debug!(
            "Typeset {} lines: {} relayouts, {} kerns, {} flushed, {} absorbed, {} orphans avoided",
            pass.stats.lines,
            pass.stats.relayouts,
            pass.stats.kerns_inserted,
            pass.stats.flushed_lines,
            pass.stats.absorbed_lines,
            pass.stats.orphans_avoided
        );

        Ok(TypesetOutput {
            markup: pass.markup,
            snapshot: pass.snapshot,
            stats: pass.stats,
        })
    }
}

/// Mutable state of one pass. Owns the markup; the snapshot always describes it.
struct Pass<'t, L> {
    typesetter: &'t Typesetter<L>,
    font_size: f32,
    markup: String,
    snapshot: Snapshot,
    stats: TypesetStats,
}

impl<L: TextLayouter> Pass<'_, L> {
    fn relayout(&mut self) -> Result<(), TypesetError> {
        self.snapshot = self.typesetter.layouter.layout(&self.markup)?;
        self.stats.relayouts += 1;
        Ok(())
    }

    fn process_line(&mut self, line_index: usize) -> Result<(), TypesetError> {
        let config = self.typesetter.config;
        let absorb_widths = if config.absorb_next_line {
            absorption_profile(&self.snapshot, line_index + 1, self.font_size)
        } else {
            Vec::new()
        };

        let saved = config.avoid_orphans.then(|| (self.markup.clone(), self.stats));
        let can_avoid_orphan = self.apply_line(line_index, &absorb_widths)?;

        let Some((saved_markup, saved_stats)) = saved else {
            return Ok(());
        };
        if !can_avoid_orphan || !is_strandable(&self.snapshot, line_index) {
            return Ok(());
        }

        // Roll back, break before the line's last visible character, and redo the line.
        let count = visible_count_through(&self.snapshot, line_index);
        log::debug!(
            "Line {}: next line is an orphan, breaking before visible character {}",
            line_index,
            count
        );
        self.markup = saved_markup;
        self.stats = TypesetStats {
            relayouts: self.stats.relayouts,
            ..saved_stats
        };
        self.relayout()?;

        let break_at = source_index_of_visible(&self.snapshot, count)?;
        self.markup.insert(break_at, LINE_BOUNDARY);
        self.relayout()?;
        self.stats.orphans_avoided += 1;

        self.apply_line(line_index, &absorb_widths)?;
        Ok(())
    }

    /// Scans, justifies and materializes one line, then relayouts if anything changed.
    /// Returns whether the orphan check may run for this line.
    fn apply_line(
        &mut self,
        line_index: usize,
        absorb_widths: &[f32],
    ) -> Result<bool, TypesetError> {
        let Some(line) = self.snapshot.line(line_index).copied() else {
            return Ok(false);
        };
        let scan = scan_line(&self.snapshot, &line);

        let justification = if line_index + 1 < self.snapshot.line_count() {
            let box_width = self.typesetter.layouter.box_width();
            let ends_with_hard_break = self
                .snapshot
                .last_char(&line)
                .is_some_and(|c| c.character == HARD_BREAK);
            solve(&JustifyInput {
                slack: (box_width - line.length) / self.font_size - scan.kern_sum,
                flexible_count: scan.flexible_count,
                flexible_sub_count: scan.flexible_sub_count,
                ends_with_hard_break,
                absorb_widths,
            })
        } else {
            Justification::none(false)
        };

        log::trace!(
            "Line {}: {} edits, {} flexible, {} sub, {} latin, {:?}",
            line_index,
            scan.edits.len(),
            scan.flexible_count,
            scan.flexible_sub_count,
            scan.latin_count,
            justification
        );

        // A line already pinned by a boundary cannot pull the next line up.
        let pinned = self
            .snapshot
            .last_char(&line)
            .is_some_and(|c| c.character == LINE_BOUNDARY);
        if justification.absorbed > 0.0 && !pinned {
            log::debug!(
                "Line {}: absorbing {:.4}em of the next line",
                line_index,
                justification.absorbed
            );
            self.stats.absorbed_lines += 1;
        }

        let mut edits = scan.edits;
        let mut dirty = false;

        let flush = if justification.need_flush && line.alignment.is_left_aligned() {
            self.snapshot
                .first_char(&line)
                .copied()
                .zip(self.snapshot.last_char(&line).copied())
        } else {
            None
        };

        if let Some((_, last)) = flush {
            let boundary = if last.character == LINE_BOUNDARY {
                self.markup.insert_str(last.source_index, ALIGN_CLOSE);
                last.source_index
            } else {
                let at = last.source_end();
                self.markup.insert_str(at, &format!("{ALIGN_CLOSE}{LINE_BOUNDARY}"));
                at
            };

            if justification.end_margin != 0.0 {
                edits.insert(0, KernEdit {
                    source_index: boundary,
                    value: KernValue::Concrete(justification.end_margin),
                });
                self.markup.insert(boundary, NO_BREAK_SPACE);
            }

            log::debug!("Line {}: pinned line end at byte {}", line_index, boundary);
            self.stats.flushed_lines += 1;
            dirty = true;
        }

        // Descending source order keeps the indices of pending edits valid.
        for edit in &edits {
            let kern = edit.value.resolve(&justification);
            if kern != 0.0 {
                let directive = self.typesetter.cache.directive(kern);
                self.markup.insert_str(edit.source_index, &directive);
                self.stats.kerns_inserted += 1;
                dirty = true;
            }
        }

        if let Some((first, _)) = flush {
            self.markup.insert_str(first.source_index, FLUSH_OPEN);
        }

        if dirty {
            self.relayout()?;
        }

        Ok(justification.can_avoid_orphan)
    }
}
