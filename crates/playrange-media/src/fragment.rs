//! Fragments tracked by the loader, independent of what is actually buffered.

/// Anything with a presentation time span.
pub trait FragmentSpan {
    /// Presentation start in seconds.
    fn start_pts(&self) -> f64;

    /// Presentation end in seconds.
    fn end_pts(&self) -> f64;
}

impl<T: FragmentSpan + ?Sized> FragmentSpan for &T {
    fn start_pts(&self) -> f64 {
        (**self).start_pts()
    }

    fn end_pts(&self) -> f64 {
        (**self).end_pts()
    }
}

/// A loaded media fragment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Sequence number within its playlist.
    pub sn: u64,
    /// Presentation start in seconds.
    pub start_pts: f64,
    /// Presentation end in seconds.
    pub end_pts: f64,
}

impl Fragment {
    pub fn new(sn: u64, start_pts: f64, end_pts: f64) -> Self {
        Self {
            sn,
            start_pts,
            end_pts,
        }
    }
}

impl FragmentSpan for Fragment {
    fn start_pts(&self) -> f64 {
        self.start_pts
    }

    fn end_pts(&self) -> f64 {
        self.end_pts
    }
}
