//! Integration tests for the buffered-range queries against mock media sources.

use playrange_media::{
    buffer_info, buffered_ranges, filter_living_fragments, is_buffered, BufferInfo,
    BufferedMedia, Error, Fragment, LiveBuffer, RangeSet, Result, TimeRanges,
};

/// Index-based ranges built from `(start, end)` pairs.
struct MockRanges(Vec<(f64, f64)>);

impl TimeRanges for MockRanges {
    fn length(&self) -> usize {
        self.0.len()
    }

    fn start(&self, index: usize) -> Option<f64> {
        self.0.get(index).map(|r| r.0)
    }

    fn end(&self, index: usize) -> Option<f64> {
        self.0.get(index).map(|r| r.1)
    }
}

/// A media element whose buffered ranges are read fresh on every access.
enum MockMedia {
    Buffered(Vec<(f64, f64)>),
    InvalidState,
}

impl BufferedMedia for MockMedia {
    type Ranges = MockRanges;

    fn buffered(&self) -> Result<MockRanges> {
        match self {
            MockMedia::Buffered(ranges) => Ok(MockRanges(ranges.clone())),
            MockMedia::InvalidState => Err(Error::unavailable("InvalidStateError")),
        }
    }
}

fn media(ranges: &[(f64, f64)]) -> MockMedia {
    MockMedia::Buffered(ranges.to_vec())
}

// |////////|__________|////////////////|
// 0       0.5         1               2.0
fn two_range_media() -> MockMedia {
    media(&[(0.0, 0.5), (1.0, 2.0)])
}

fn info(len: f64, start: f64, end: f64, next_start: Option<f64>) -> BufferInfo {
    BufferInfo {
        len,
        start,
        end,
        next_start,
    }
}

fn fragments(spans: &[(f64, f64)]) -> Vec<Fragment> {
    spans
        .iter()
        .enumerate()
        .map(|(sn, &(start, end))| Fragment::new(sn as u64, start, end))
        .collect()
}

// ---------------------------------------------------------------------------
// Unreadable media
// ---------------------------------------------------------------------------

#[test]
fn invalid_media_reads_as_nothing_buffered() {
    let invalid = MockMedia::InvalidState;

    assert!(buffered_ranges(&invalid).is_empty());
    for position in [-1.0, 0.0, 0.5, 100.0] {
        assert!(!is_buffered(&invalid, position));
        assert_eq!(buffer_info(&invalid, position, 0.5), BufferInfo::empty(position));
    }

    let frags = fragments(&[(0.0, 0.5), (1.0, 2.0)]);
    assert!(filter_living_fragments(&frags, &invalid).is_empty());
}

#[test]
fn detached_live_buffer_reads_as_nothing_buffered() {
    let buffer = LiveBuffer::with_ranges(RangeSet::from_pairs(&[(0.0, 10.0)]));
    let frags = fragments(&[(0.0, 2.0)]);
    assert!(is_buffered(&buffer, 1.0));
    assert_eq!(filter_living_fragments(&frags, &buffer).len(), 1);

    buffer.detach();
    assert!(!is_buffered(&buffer, 1.0));
    assert_eq!(buffer_info(&buffer, 1.0, 0.0), BufferInfo::empty(1.0));
    assert!(filter_living_fragments(&frags, &buffer).is_empty());
}

// ---------------------------------------------------------------------------
// is_buffered
// ---------------------------------------------------------------------------

#[test]
fn is_buffered_includes_boundaries() {
    let media = two_range_media();
    for position in [0.0, 0.1, 0.5, 1.0, 2.0] {
        assert!(is_buffered(&media, position), "{position} should be buffered");
    }
}

#[test]
fn is_buffered_excludes_outside_positions() {
    let media = two_range_media();
    for position in [-0.1, 0.51, 0.9, 2.1] {
        assert!(!is_buffered(&media, position), "{position} should not be buffered");
    }
}

#[test]
fn is_buffered_checks_every_range_when_unsorted() {
    let media = media(&[(5.0, 6.0), (0.0, 1.0), (3.0, 4.0)]);
    assert!(is_buffered(&media, 0.5));
    assert!(is_buffered(&media, 3.0));
    assert!(!is_buffered(&media, 2.0));
}

// ---------------------------------------------------------------------------
// buffer_info
// ---------------------------------------------------------------------------

#[test]
fn buffer_info_without_hole_tolerance() {
    let media = two_range_media();
    let max_hole_duration = 0.0;

    assert_eq!(
        buffer_info(&media, 0.0, max_hole_duration),
        info(0.5, 0.0, 0.5, Some(1.0))
    );
    assert_eq!(
        buffer_info(&media, 0.5, max_hole_duration),
        info(0.0, 0.5, 0.5, Some(1.0))
    );
    assert_eq!(
        buffer_info(&media, 1.0, max_hole_duration),
        info(1.0, 1.0, 2.0, None)
    );
    assert_eq!(
        buffer_info(&media, 2.0, max_hole_duration),
        info(0.0, 2.0, 2.0, None)
    );
}

#[test]
fn buffer_info_with_hole_tolerance() {
    let media = two_range_media();
    let max_hole_duration = 0.5;

    assert_eq!(
        buffer_info(&media, 0.0, max_hole_duration),
        info(0.5, 0.0, 0.5, Some(1.0))
    );
    // M: max_hole_duration 0.5
    // |////////|__________|////////////////|
    // 0     0.5 --- M --- 1               2.0
    assert_eq!(
        buffer_info(&media, 0.5, max_hole_duration),
        info(1.5, 1.0, 2.0, None)
    );
    assert_eq!(
        buffer_info(&media, 1.0, max_hole_duration),
        info(1.0, 1.0, 2.0, None)
    );
    assert_eq!(
        buffer_info(&media, 2.0, max_hole_duration),
        info(0.0, 2.0, 2.0, None)
    );
}

#[test]
fn buffer_info_past_the_last_range() {
    let media = two_range_media();
    assert_eq!(buffer_info(&media, 5.0, 0.5), info(0.0, 5.0, 5.0, None));
}

#[test]
fn buffer_info_len_never_shrinks_with_more_tolerance() {
    let media = media(&[(0.0, 0.5), (1.0, 2.0), (2.25, 3.0), (4.0, 6.0)]);
    let holes = [0.0, 0.1, 0.25, 0.5, 1.0, 2.0];
    let positions = [-0.5, 0.0, 0.25, 0.5, 0.75, 1.0, 2.0, 2.1, 3.0, 3.5, 5.0, 6.0];

    for position in positions {
        let lens: Vec<f64> = holes
            .iter()
            .map(|&hole| buffer_info(&media, position, hole).len)
            .collect();
        for pair in lens.windows(2) {
            assert!(
                pair[1] >= pair[0],
                "len decreased at position {position}: {lens:?}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// filter_living_fragments
// ---------------------------------------------------------------------------

#[test]
fn filter_keeps_fragments_that_are_not_evicted() {
    // |__________|//////////|//////////|__________|
    // 0         1.0        2.0        3.0        4.0
    let media = media(&[(1.0, 2.0), (2.0, 3.0)]);
    // |////|/////|//////////|//////////|//////////|
    // 0         1.0        2.0        3.0        4.0
    let frags = fragments(&[(0.0, 0.5), (0.5, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);

    let living = filter_living_fragments(&frags, &media);
    assert_eq!(living, vec![&frags[2], &frags[3]]);
}

#[test]
fn filter_preserves_order_and_is_idempotent() {
    let media = media(&[(0.0, 4.0), (10.0, 14.0)]);
    let frags = fragments(&[
        (12.0, 14.0),
        (0.0, 2.0),
        (5.0, 7.0),
        (2.0, 4.0),
        (10.0, 12.0),
    ]);

    let once = filter_living_fragments(&frags, &media);
    let sns: Vec<u64> = once.iter().map(|f| f.sn).collect();
    assert_eq!(sns, vec![0, 1, 3, 4]);

    let twice = filter_living_fragments(&once, &media);
    let twice: Vec<&Fragment> = twice.into_iter().copied().collect();
    assert_eq!(twice, once);
}

#[test]
fn filter_empty_fragment_list() {
    let frags: Vec<Fragment> = Vec::new();
    assert!(filter_living_fragments(&frags, &two_range_media()).is_empty());
}
