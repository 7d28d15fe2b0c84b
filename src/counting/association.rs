use crate::counting::DEFAULT_OFFSET_FACTOR;
use crate::track::store::TrackStore;
use crate::utils::bbox::BoundingBox;
use std::collections::HashSet;

/// Defines how close the center of a detection must be to the center of a track to match it
///
/// Both variants compare the horizontal and vertical center offsets independently.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchStrategy {
    /// The offset, divided by the width (resp. height) of the detection, must be less than the factor.
    /// The tolerance grows with the apparent size of the detected object.
    Proportional(f32),
    /// The offset must be less than the fixed number of pixels regardless of the object size.
    FixedRadius(f32),
}

impl Default for MatchStrategy {
    fn default() -> Self {
        MatchStrategy::Proportional(DEFAULT_OFFSET_FACTOR)
    }
}

impl MatchStrategy {
    pub(crate) fn parameter(&self) -> f32 {
        match self {
            MatchStrategy::Proportional(f) | MatchStrategy::FixedRadius(f) => *f,
        }
    }

    /// Checks whether the detection may continue the track
    ///
    /// The detection is expected to be well-formed (positive width and height).
    ///
    pub fn matches(&self, detection: &BoundingBox, track: &BoundingBox) -> bool {
        let (dcx, dcy) = detection.center();
        let (tcx, tcy) = track.center();
        let dx = (i64::from(dcx) - i64::from(tcx)).abs() as f32;
        let dy = (i64::from(dcy) - i64::from(tcy)).abs() as f32;

        match self {
            MatchStrategy::Proportional(factor) => {
                dx / (detection.width() as f32) < *factor
                    && dy / (detection.height() as f32) < *factor
            }
            MatchStrategy::FixedRadius(radius) => dx < *radius && dy < *radius,
        }
    }
}

/// Finds the track the detection continues
///
/// The store is scanned in its order and the first matching track wins, there is no
/// search for the closest one. Tracks listed in `claimed` already took a detection during
/// the current frame and are skipped.
///
pub fn associate(
    store: &TrackStore,
    detection: &BoundingBox,
    strategy: &MatchStrategy,
    claimed: &HashSet<u64>,
) -> Option<u64> {
    store.find_first(|t| {
        !claimed.contains(&t.get_track_id()) && strategy.matches(detection, t.get_bbox())
    })
}
