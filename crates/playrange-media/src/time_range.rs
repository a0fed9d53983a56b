//! Buffered time intervals.

use std::fmt;

/// A single buffered interval in seconds, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `position` lies within the interval, both bounds inclusive.
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether the open span `(start, end)` shares any time with this interval.
    ///
    /// Spans that only touch at a boundary do not overlap.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        start < self.end && end > self.start
    }

    /// A range is well formed when both bounds are numbers and `start <= end`.
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.start.is_nan() && !self.end.is_nan() && self.start <= self.end
    }
}

impl From<(f64, f64)> for TimeRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// An ordered snapshot of buffered intervals.
///
/// Produced fresh on every read of a media source. Ordering and disjointness are
/// the provider's responsibility and are not enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSet {
    ranges: Vec<TimeRange>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a range set from `(start, end)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().copied().collect()
    }

    pub fn push(&mut self, range: impl Into<TimeRange>) {
        self.ranges.push(range.into());
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimeRange> {
        self.ranges.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeRange> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Sum of all interval durations. Overlaps are counted twice.
    pub fn total_duration(&self) -> f64 {
        self.ranges.iter().map(TimeRange::duration).sum()
    }

    /// Whether any interval contains `position` (inclusive bounds).
    pub fn contains(&self, position: f64) -> bool {
        self.ranges.iter().any(|r| r.contains(position))
    }
}

impl<R: Into<TimeRange>> FromIterator<R> for RangeSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a TimeRange;
    type IntoIter = std::slice::Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
