//! Playable-range queries over a media source's buffered ranges.
//!
//! Every function here takes exactly one snapshot of the source through
//! [`buffered_ranges`] and is total: an unreadable source behaves like a source
//! with nothing buffered.

use crate::fragment::FragmentSpan;
use crate::source::{buffered_ranges, BufferedMedia};
use crate::time_range::TimeRange;

/// Contiguous buffered data around a playback position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferInfo {
    /// Seconds of playable data from the position to `end`.
    pub len: f64,
    /// Start of the block, never before the position.
    pub start: f64,
    /// End of the block.
    pub end: f64,
    /// Start of the next block beyond a hole larger than the tolerance.
    pub next_start: Option<f64>,
}

impl BufferInfo {
    /// Nothing buffered at `position`.
    pub fn empty(position: f64) -> Self {
        Self {
            len: 0.0,
            start: position,
            end: position,
            next_start: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len <= 0.0
    }

    /// Size of the hole between this block and the next one.
    pub fn hole_to_next(&self) -> Option<f64> {
        self.next_start.map(|next| next - self.end)
    }
}

/// Whether `position` is inside any buffered range, bounds inclusive.
pub fn is_buffered<M: BufferedMedia + ?Sized>(media: &M, position: f64) -> bool {
    buffered_ranges(media).contains(position)
}

/// Find the buffered block containing or just ahead of `position`.
///
/// Holes shorter than `max_hole_duration` are bridged: neighbouring ranges merge
/// into one block, and a position sitting in such a hole counts as being in the
/// block that follows it.
pub fn buffer_info<M: BufferedMedia + ?Sized>(
    media: &M,
    position: f64,
    max_hole_duration: f64,
) -> BufferInfo {
    let ranges = buffered_ranges(media);
    buffered_info(ranges.as_slice(), position, max_hole_duration)
}

/// [`buffer_info`] over an already captured list of ranges.
///
/// The ranges may be unsorted or overlapping. Malformed ranges are skipped. A
/// negative or NaN tolerance bridges nothing, the same as zero.
pub fn buffered_info(ranges: &[TimeRange], position: f64, max_hole_duration: f64) -> BufferInfo {
    let max_hole_duration = if max_hole_duration > 0.0 {
        max_hole_duration
    } else {
        0.0
    };
    let mut info = BufferInfo::empty(position);

    for block in merge_holes(ranges, max_hole_duration) {
        if position + max_hole_duration >= block.start && position < block.end {
            info.start = block.start.max(position);
            info.end = block.end;
            info.len = block.end - position;
        } else if position + max_hole_duration < block.start {
            info.next_start = Some(block.start);
            break;
        }
    }

    tracing::trace!(
        position,
        max_hole_duration,
        len = info.len,
        start = info.start,
        end = info.end,
        next_start = ?info.next_start,
        "computed buffer info"
    );
    info
}

/// Sort ranges and fold together those separated by less than `max_hole_duration`.
///
/// Overlapping and touching ranges always fold, whatever the tolerance.
fn merge_holes(ranges: &[TimeRange], max_hole_duration: f64) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = ranges
        .iter()
        .copied()
        .filter(|r| {
            let ok = r.is_well_formed();
            if !ok {
                tracing::trace!(range = %r, "skipping malformed buffered range");
            }
            ok
        })
        .collect();
    sorted.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then_with(|| b.end.total_cmp(&a.end))
    });

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) => {
                let gap = range.start - last.end;
                if gap <= 0.0 || gap < max_hole_duration {
                    last.end = last.end.max(range.end);
                } else {
                    merged.push(range);
                }
            }
            None => merged.push(range),
        }
    }
    merged
}

/// Keep the fragments that still overlap buffered data, in their original order.
///
/// A fragment only touching a buffered range at a boundary is considered
/// evicted. With nothing buffered, no fragment survives.
pub fn filter_living_fragments<'a, F, M>(fragments: &'a [F], media: &M) -> Vec<&'a F>
where
    F: FragmentSpan,
    M: BufferedMedia + ?Sized,
{
    let ranges = buffered_ranges(media);
    if ranges.is_empty() {
        return Vec::new();
    }

    fragments
        .iter()
        .filter(|frag| {
            ranges
                .iter()
                .any(|r| r.overlaps(frag.start_pts(), frag.end_pts()))
        })
        .collect()
}
