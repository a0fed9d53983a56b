//! JSON snapshots of a media element's buffer and the fragments tracked for it.
//!
//! ```json
//! {
//!   "buffered": [[0.0, 0.5], [1.0, 2.0]],
//!   "fragments": [{ "sn": 0, "start_pts": 0.0, "end_pts": 0.5 }]
//! }
//! ```
//!
//! A `null` or missing `buffered` field stands for a detached element whose
//! buffered ranges cannot be read.

use anyhow::{Context, Result};
use playrange_media::{BufferedMedia, Fragment, RangeSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaSnapshot {
    #[serde(default)]
    pub buffered: Option<Vec<(f64, f64)>>,

    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

impl MediaSnapshot {
    pub fn is_detached(&self) -> bool {
        self.buffered.is_none()
    }
}

impl BufferedMedia for MediaSnapshot {
    type Ranges = RangeSet;

    fn buffered(&self) -> playrange_media::Result<RangeSet> {
        self.buffered
            .as_deref()
            .map(RangeSet::from_pairs)
            .ok_or_else(|| playrange_media::Error::unavailable("media element detached"))
    }
}

/// Load a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<MediaSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {:?}", path))?;

    let snapshot: MediaSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {:?}", path))?;

    tracing::debug!(
        ranges = snapshot.buffered.as_ref().map_or(0, Vec::len),
        fragments = snapshot.fragments.len(),
        detached = snapshot.is_detached(),
        "Loaded snapshot {:?}",
        path
    );

    Ok(snapshot)
}
