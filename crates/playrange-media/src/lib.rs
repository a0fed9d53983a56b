//! Playrange-Media: buffered time-range queries for adaptive playback
//!
//! A player keeps fetching fragments while the media pipeline keeps some of them
//! buffered and evicts others. This crate answers the questions the loader asks
//! about that buffer:
//!
//! - [`is_buffered`] - is a playback position covered by buffered data
//! - [`buffer_info`] - how much contiguous data lies ahead of a position,
//!   tolerating small holes, and where the next block starts
//! - [`filter_living_fragments`] - which tracked fragments still have data in
//!   the buffer
//!
//! # Sources
//!
//! Media is reached through the [`BufferedMedia`] trait. A read may fail (a
//! detached element, a torn-down source buffer). [`buffered_ranges`] is the only
//! place such a failure is handled: it degrades to an empty [`RangeSet`], so
//! every query above always returns a value.

pub mod buffer;
pub mod error;
pub mod fragment;
pub mod source;
pub mod time_range;

pub use buffer::{buffer_info, buffered_info, filter_living_fragments, is_buffered, BufferInfo};
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentSpan};
pub use source::{buffered_ranges, BufferedMedia, LiveBuffer, TimeRanges};
pub use time_range::{RangeSet, TimeRange};
