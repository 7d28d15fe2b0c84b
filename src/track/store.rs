use crate::track::{Track, TrackView};
use crate::utils::bbox::BoundingBox;
use itertools::Itertools;
use log::debug;
use std::mem;

#[cfg(test)]
mod store_tests;

/// The set of currently active tracks
///
/// Tracks are kept in creation order, which is also the order the associator scans them,
/// so the first-match tie-break is deterministic. Removal is always two-phase: callers
/// first collect the ids with [TrackStore::find] and then detach them with
/// [TrackStore::fetch_tracks], nothing is removed while the store is scanned.
///
#[derive(Debug, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
    track_id: u64,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn gen_track_id(&mut self) -> u64 {
        self.track_id += 1;
        self.track_id
    }

    /// Creates a new track for the box and returns its id
    ///
    pub fn add_track(&mut self, bbox: BoundingBox, timestamp: f64) -> u64 {
        let track_id = self.gen_track_id();
        self.tracks.push(Track::new(track_id, bbox, timestamp));
        track_id
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn get(&self, track_id: u64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.track_id == track_id)
    }

    pub(crate) fn get_mut(&mut self, track_id: u64) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.track_id == track_id)
    }

    /// Ids of all tracks satisfying the predicate, in store order
    ///
    pub fn find<P>(&self, predicate: P) -> Vec<u64>
    where
        P: Fn(&Track) -> bool,
    {
        self.tracks
            .iter()
            .filter(|t| predicate(t))
            .map(|t| t.track_id)
            .collect()
    }

    /// The id of the first track in store order satisfying the predicate
    ///
    pub fn find_first<P>(&self, predicate: P) -> Option<u64>
    where
        P: Fn(&Track) -> bool,
    {
        self.tracks
            .iter()
            .find(|t| predicate(t))
            .map(|t| t.track_id)
    }

    /// Detaches the tracks from the store and returns them
    ///
    /// Unknown ids are ignored. The relative order of the remaining tracks is preserved.
    ///
    pub fn fetch_tracks(&mut self, track_ids: &[u64]) -> Vec<Track> {
        if track_ids.is_empty() {
            return Vec::default();
        }
        let (fetched, kept): (Vec<_>, Vec<_>) = mem::take(&mut self.tracks)
            .into_iter()
            .partition(|t| track_ids.contains(&t.track_id));
        self.tracks = kept;
        if !fetched.is_empty() {
            debug!(
                "Tracks removed from store: [{}]",
                fetched.iter().map(|t| t.track_id).join(", ")
            );
        }
        fetched
    }

    /// Read-only projection of the store for renderers
    ///
    pub fn views(&self, line: i32) -> Vec<TrackView> {
        self.tracks.iter().map(|t| TrackView::new(t, line)).collect()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
