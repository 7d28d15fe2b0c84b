use crate::counting::{FrameContext, DEFAULT_MAX_AGE, DEFAULT_MAX_IDLE};
use crate::track::store::TrackStore;
use crate::track::Track;
use log::debug;

/// Why a track is removed from the store
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasteReason {
    /// not matched for longer than the idle window
    Idle,
    /// lived longer than the maximum age
    Expired,
    /// the upper edge is below the counting line
    PassedLine,
}

/// Decides which tracks leave the store before the detections of a frame are associated
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collector {
    max_idle: f64,
    max_age: f64,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE, DEFAULT_MAX_AGE)
    }
}

impl Collector {
    pub fn new(max_idle: f64, max_age: f64) -> Self {
        Self { max_idle, max_age }
    }

    /// The reason to remove the track, `None` while the track is alive
    ///
    pub fn waste_reason(&self, track: &Track, ctx: &FrameContext) -> Option<WasteReason> {
        if track.idle(ctx.now) > self.max_idle {
            Some(WasteReason::Idle)
        } else if track.age(ctx.now) > self.max_age {
            Some(WasteReason::Expired)
        } else if track.get_bbox().y1() > ctx.line {
            Some(WasteReason::PassedLine)
        } else {
            None
        }
    }

    /// Removes wasted tracks from the store and returns them
    ///
    pub fn collect(&self, store: &mut TrackStore, ctx: &FrameContext) -> Vec<Track> {
        let wasted = store.find(|t| match self.waste_reason(t, ctx) {
            Some(reason) => {
                debug!(
                    "Track {} is wasted at {:.3}: {:?}",
                    t.get_track_id(),
                    ctx.now,
                    reason
                );
                true
            }
            None => false,
        });
        store.fetch_tracks(&wasted)
    }
}

#[cfg(test)]
mod tests {
    use crate::counting::collector::{Collector, WasteReason};
    use crate::counting::FrameContext;
    use crate::track::store::TrackStore;
    use crate::track::Track;
    use crate::utils::bbox::BoundingBox;

    #[test]
    fn reasons() {
        let c = Collector::default();
        let mut t = Track::new(1, BoundingBox::new(0, 40, 50, 100), 0.0);

        assert_eq!(c.waste_reason(&t, &FrameContext::new(5.0, 300)), None);
        assert_eq!(
            c.waste_reason(&t, &FrameContext::new(5.1, 300)),
            Some(WasteReason::Idle)
        );

        t.update(BoundingBox::new(0, 40, 50, 100), 8.0);
        assert_eq!(c.waste_reason(&t, &FrameContext::new(10.0, 300)), None);
        assert_eq!(
            c.waste_reason(&t, &FrameContext::new(10.5, 300)),
            Some(WasteReason::Expired)
        );

        assert_eq!(
            c.waste_reason(&t, &FrameContext::new(9.0, 39)),
            Some(WasteReason::PassedLine)
        );
        assert_eq!(c.waste_reason(&t, &FrameContext::new(9.0, 40)), None);
    }

    #[test]
    fn collect() {
        let c = Collector::new(5.0, 10.0);
        let mut store = TrackStore::new();
        let stale = store.add_track(BoundingBox::new(0, 0, 10, 10), 10.0);
        let passed = store.add_track(BoundingBox::new(0, 310, 10, 330), 15.0);
        let alive = store.add_track(BoundingBox::new(100, 0, 110, 10), 15.0);

        let wasted = c.collect(&mut store, &FrameContext::new(16.0, 300));
        let wasted = wasted.iter().map(|t| t.get_track_id()).collect::<Vec<_>>();
        assert_eq!(wasted, vec![stale, passed]);
        assert_eq!(store.len(), 1);
        assert!(store.get(alive).is_some());
    }
}
