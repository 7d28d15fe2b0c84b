use crate::utils::bbox::BoundingBox;
use crate::Errors;
use anyhow::Result;

/// Track store
pub mod store;

/// Persistent state of one physical object followed across frames
///
/// The track keeps the last observed box, the time it was created and the time it was
/// lastly matched. The label is empty while the object is not counted; it is assigned
/// exactly once and never reset.
///
#[derive(Debug, Clone)]
pub struct Track {
    track_id: u64,
    bbox: BoundingBox,
    first_seen: f64,
    last_updated: f64,
    label: Option<u64>,
    length: usize,
}

impl Track {
    pub(crate) fn new(track_id: u64, bbox: BoundingBox, timestamp: f64) -> Self {
        Self {
            track_id,
            bbox,
            first_seen: timestamp,
            last_updated: timestamp,
            label: None,
            length: 1,
        }
    }

    pub fn get_track_id(&self) -> u64 {
        self.track_id
    }

    pub fn get_bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn get_first_seen(&self) -> f64 {
        self.first_seen
    }

    pub fn get_last_updated(&self) -> f64 {
        self.last_updated
    }

    /// The counter value assigned to the track, if it is counted
    ///
    pub fn get_label(&self) -> Option<u64> {
        self.label
    }

    /// The number of observations merged into the track, including the one it was created from
    ///
    pub fn get_length(&self) -> usize {
        self.length
    }

    pub fn is_counted(&self) -> bool {
        self.label.is_some()
    }

    /// Time passed since the track was created
    ///
    pub fn age(&self, now: f64) -> f64 {
        now - self.first_seen
    }

    /// Time passed since the track was lastly matched
    ///
    pub fn idle(&self, now: f64) -> f64 {
        now - self.last_updated
    }

    /// Moves the track to the newly observed box, the creation time is kept
    ///
    pub(crate) fn update(&mut self, bbox: BoundingBox, timestamp: f64) {
        self.bbox = bbox;
        self.last_updated = timestamp;
        self.length += 1;
    }

    /// Assigns the counter value to the track
    ///
    /// Fails when the track already carries a label.
    ///
    pub(crate) fn mark_counted(&mut self, value: u64) -> Result<()> {
        if let Some(label) = self.label {
            return Err(Errors::AlreadyCounted(self.track_id, label).into());
        }
        self.label = Some(value);
        Ok(())
    }
}

/// Position of a box relative to the counting line
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// The lower edge is above the line
    Above,
    /// The lower edge touches or passed the line
    AtOrBelow,
}

impl LineSide {
    pub fn of(bbox: &BoundingBox, line: i32) -> Self {
        if bbox.y2() < line {
            LineSide::Above
        } else {
            LineSide::AtOrBelow
        }
    }
}

/// Read-only projection of a track for renderers
///
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    /// id of the track, valid only for the frame it was produced for
    ///
    pub id: u64,
    /// the lastly observed box
    ///
    pub bbox: BoundingBox,
    /// the counter value the track was counted with
    ///
    pub label: Option<u64>,
    /// observations merged into the track
    ///
    pub length: usize,
    /// the side of the counting line the track is on
    ///
    pub side: LineSide,
}

impl TrackView {
    pub fn new(track: &Track, line: i32) -> Self {
        Self {
            id: track.track_id,
            bbox: track.bbox,
            label: track.label,
            length: track.length,
            side: LineSide::of(&track.bbox, line),
        }
    }
}

#[cfg(feature = "python")]
pub mod python {
    use pyo3::prelude::*;

    use super::{LineSide, TrackView};
    use crate::utils::bbox::python::PyBoundingBox;

    #[pyclass]
    #[pyo3(name = "TrackView")]
    #[derive(Debug, Clone)]
    #[repr(transparent)]
    pub struct PyTrackView(pub(crate) TrackView);

    #[pymethods]
    impl PyTrackView {
        #[classattr]
        const __hash__: Option<Py<PyAny>> = None;

        fn __repr__(&self) -> String {
            format!("{:?}", self.0)
        }

        fn __str__(&self) -> String {
            format!("{:#?}", self.0)
        }

        #[getter]
        fn id(&self) -> u64 {
            self.0.id
        }

        #[getter]
        fn bbox(&self) -> PyBoundingBox {
            PyBoundingBox(self.0.bbox)
        }

        #[getter]
        fn label(&self) -> Option<u64> {
            self.0.label
        }

        #[getter]
        fn length(&self) -> usize {
            self.0.length
        }

        #[getter]
        fn above_line(&self) -> bool {
            self.0.side == LineSide::Above
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::track::{LineSide, Track, TrackView};
    use crate::utils::bbox::BoundingBox;
    use crate::Errors;

    #[test]
    fn update_keeps_creation_time() {
        let mut t = Track::new(1, BoundingBox::new(40, 40, 100, 100), 1.0);
        assert_eq!(t.get_first_seen(), 1.0);
        assert_eq!(t.get_last_updated(), 1.0);
        assert_eq!(t.get_length(), 1);

        t.update(BoundingBox::new(42, 42, 102, 102), 1.5);
        assert_eq!(t.get_first_seen(), 1.0);
        assert_eq!(t.get_last_updated(), 1.5);
        assert_eq!(t.get_bbox(), &BoundingBox::new(42, 42, 102, 102));
        assert_eq!(t.get_length(), 2);
        assert_eq!(t.age(3.0), 2.0);
        assert_eq!(t.idle(3.0), 1.5);
    }

    #[test]
    fn counted_once() {
        let mut t = Track::new(7, BoundingBox::new(0, 0, 10, 10), 0.0);
        assert!(!t.is_counted());
        t.mark_counted(3).unwrap();
        assert_eq!(t.get_label(), Some(3));

        let err = t.mark_counted(4).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Errors>(),
            Some(&Errors::AlreadyCounted(7, 3))
        );
        assert_eq!(t.get_label(), Some(3));
    }

    #[test]
    fn line_side() {
        let bb = BoundingBox::new(0, 200, 10, 299);
        assert_eq!(LineSide::of(&bb, 300), LineSide::Above);
        assert_eq!(LineSide::of(&bb, 299), LineSide::AtOrBelow);
        assert_eq!(LineSide::of(&bb, 250), LineSide::AtOrBelow);

        let mut t = Track::new(2, bb, 0.0);
        t.mark_counted(1).unwrap();
        let v = TrackView::new(&t, 300);
        assert_eq!(v.id, 2);
        assert_eq!(v.label, Some(1));
        assert_eq!(v.side, LineSide::Above);
    }
}
