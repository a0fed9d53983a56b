//! Access to the buffered ranges of a media source.
//!
//! The core algorithms never talk to a concrete media element. They go through
//! [`BufferedMedia`], whose read may fail, and [`buffered_ranges`] turns any such
//! failure into an empty [`RangeSet`]. That accessor is the only place where a
//! read error is handled.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::time_range::{RangeSet, TimeRange};

/// Index-based view of a list of buffered intervals.
pub trait TimeRanges {
    /// Number of intervals.
    fn length(&self) -> usize;

    /// Start of the interval at `index`, if it exists.
    fn start(&self, index: usize) -> Option<f64>;

    /// End of the interval at `index`, if it exists.
    fn end(&self, index: usize) -> Option<f64>;
}

/// A media source that can report what it currently has buffered.
///
/// Reading may fail when the source is in an invalid state, e.g. after its
/// underlying buffer was torn down.
pub trait BufferedMedia {
    /// The range list returned by a successful read.
    type Ranges: TimeRanges;

    /// Read the current buffered ranges.
    fn buffered(&self) -> Result<Self::Ranges>;
}

/// Take one snapshot of `media`'s buffered ranges.
///
/// Returns an empty set when the source cannot be read.
pub fn buffered_ranges<M: BufferedMedia + ?Sized>(media: &M) -> RangeSet {
    match read_ranges(media) {
        Ok(ranges) => ranges,
        Err(e) => {
            tracing::debug!(error = %e, "buffered ranges unavailable, treating as empty");
            RangeSet::new()
        }
    }
}

fn read_ranges<M: BufferedMedia + ?Sized>(media: &M) -> Result<RangeSet> {
    let ranges = media.buffered()?;
    (0..ranges.length())
        .map(|index| match (ranges.start(index), ranges.end(index)) {
            (Some(start), Some(end)) => Ok(TimeRange::new(start, end)),
            (start, end) => Err(Error::InvalidRange { index, start, end }),
        })
        .collect()
}

impl TimeRanges for RangeSet {
    fn length(&self) -> usize {
        self.len()
    }

    fn start(&self, index: usize) -> Option<f64> {
        self.get(index).map(|r| r.start)
    }

    fn end(&self, index: usize) -> Option<f64> {
        self.get(index).map(|r| r.end)
    }
}

/// A range set is its own, always readable, snapshot.
impl BufferedMedia for RangeSet {
    type Ranges = RangeSet;

    fn buffered(&self) -> Result<RangeSet> {
        Ok(self.clone())
    }
}

impl<M: BufferedMedia + ?Sized> BufferedMedia for &M {
    type Ranges = M::Ranges;

    fn buffered(&self) -> Result<Self::Ranges> {
        (**self).buffered()
    }
}

/// A missing media object has nothing buffered.
impl<M: BufferedMedia> BufferedMedia for Option<M> {
    type Ranges = M::Ranges;

    fn buffered(&self) -> Result<Self::Ranges> {
        match self {
            Some(media) => media.buffered(),
            None => Err(Error::unavailable("no media attached")),
        }
    }
}

/// Shared handle to a buffer owned by a media pipeline.
///
/// Clones observe the same state. While detached, reads fail with
/// [`Error::RangeUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct LiveBuffer {
    inner: Arc<RwLock<Option<RangeSet>>>,
}

impl LiveBuffer {
    /// Create an attached buffer with nothing buffered yet.
    pub fn new() -> Self {
        Self::with_ranges(RangeSet::new())
    }

    /// Create an attached buffer holding `ranges`.
    pub fn with_ranges(ranges: RangeSet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(ranges))),
        }
    }

    /// Record newly buffered data. Ignored while detached.
    pub fn append(&self, start: f64, end: f64) {
        if let Some(ranges) = self.inner.write().as_mut() {
            ranges.push((start, end));
        }
    }

    /// Drop everything buffered before `time`, trimming a range that straddles it.
    pub fn evict_before(&self, time: f64) {
        let mut guard = self.inner.write();
        if let Some(ranges) = guard.as_mut() {
            *ranges = ranges
                .iter()
                .filter(|r| r.end > time)
                .map(|r| TimeRange::new(r.start.max(time), r.end))
                .collect();
        }
    }

    /// Tear the buffer down. Subsequent reads fail until [`LiveBuffer::attach`].
    pub fn detach(&self) {
        *self.inner.write() = None;
    }

    /// Re-attach with a fresh set of ranges.
    pub fn attach(&self, ranges: RangeSet) {
        *self.inner.write() = Some(ranges);
    }

    pub fn is_attached(&self) -> bool {
        self.inner.read().is_some()
    }
}

impl BufferedMedia for LiveBuffer {
    type Ranges = RangeSet;

    fn buffered(&self) -> Result<RangeSet> {
        self.inner
            .read()
            .clone()
            .ok_or_else(|| Error::unavailable("source buffer detached"))
    }
}
