use crate::track::Track;

/// The record emitted once per counted object
///
#[derive(Debug, Clone, PartialEq)]
pub struct CountEvent {
    /// the counter value assigned to the object
    ///
    pub counter: u64,
    /// area of the object box, square pixels
    ///
    pub size: i64,
    /// horizontal center of the object box
    ///
    pub x: i32,
    /// vertical center of the object box
    ///
    pub y: i32,
    /// timestamp of the frame the object was counted in
    ///
    pub timestamp: f64,
}

impl CountEvent {
    pub(crate) fn new(counter: u64, track: &Track, timestamp: f64) -> Self {
        let bbox = track.get_bbox();
        let (x, y) = bbox.center();
        Self {
            counter,
            size: bbox.area(),
            x,
            y,
            timestamp,
        }
    }
}

#[cfg(feature = "python")]
pub mod python {
    use pyo3::prelude::*;

    use super::CountEvent;

    #[pyclass]
    #[pyo3(name = "CountEvent")]
    #[derive(Debug, Clone)]
    #[repr(transparent)]
    pub struct PyCountEvent(pub(crate) CountEvent);

    #[pymethods]
    impl PyCountEvent {
        #[classattr]
        const __hash__: Option<Py<PyAny>> = None;

        fn __repr__(&self) -> String {
            format!("{:?}", self.0)
        }

        fn __str__(&self) -> String {
            format!("{:#?}", self.0)
        }

        #[getter]
        fn counter(&self) -> u64 {
            self.0.counter
        }

        #[getter]
        fn size(&self) -> i64 {
            self.0.size
        }

        #[getter]
        fn x(&self) -> i32 {
            self.0.x
        }

        #[getter]
        fn y(&self) -> i32 {
            self.0.y
        }

        #[getter]
        fn timestamp(&self) -> f64 {
            self.0.timestamp
        }
    }
}
