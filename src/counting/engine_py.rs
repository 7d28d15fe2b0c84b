use crate::counting::engine::LineCounter;
use crate::counting::event::python::PyCountEvent;
use crate::counting::line::CountingLine;
use crate::counting::options::CounterOptions;
use crate::track::python::PyTrackView;
use crate::utils::bbox::BoundingBox;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass]
#[pyo3(name = "LineCounter")]
pub struct PyLineCounter(pub(crate) LineCounter);

#[pymethods]
impl PyLineCounter {
    /// Creates the counting engine
    ///
    /// # Parameters
    /// * `line` - counting line position, pixel row
    /// * `max_age` - maximum lifetime of a track, seconds
    /// * `offset_factor` - proportional tolerance of the center offset
    /// * `policy` - `TAC` or `VLB`
    /// * `start_value` - initial counter value
    ///
    #[new]
    #[pyo3(signature = (line, max_age = 10.0, offset_factor = 1.0, policy = "TAC", start_value = 0))]
    pub fn new(
        line: i32,
        max_age: f64,
        offset_factor: f32,
        policy: &str,
        start_value: u64,
    ) -> PyResult<Self> {
        CounterOptions::default()
            .max_age(max_age)
            .offset_factor(offset_factor)
            .start_value(start_value)
            .policy_name(policy)
            .and_then(|opts| LineCounter::with_options(opts, CountingLine::new(line)))
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Processes one frame, boxes are `(x1, y1, x2, y2)` tuples
    ///
    pub fn process_frame(
        &mut self,
        timestamp: f64,
        boxes: Vec<(i32, i32, i32, i32)>,
    ) -> Vec<PyCountEvent> {
        let boxes = boxes.into_iter().map(BoundingBox::from).collect::<Vec<_>>();
        self.0
            .process_frame(timestamp, &boxes)
            .into_iter()
            .map(PyCountEvent)
            .collect()
    }

    #[getter]
    fn counter(&self) -> u64 {
        self.0.counter()
    }

    #[getter]
    fn line(&self) -> i32 {
        self.0.line().position()
    }

    #[setter]
    fn set_line(&mut self, position: i32) {
        self.0.line().set(position)
    }

    #[getter]
    fn active_tracks(&self) -> usize {
        self.0.active_tracks()
    }

    fn tracks(&self) -> Vec<PyTrackView> {
        self.0.tracks().into_iter().map(PyTrackView).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "LineCounter(policy={}, line={}, counter={}, active_tracks={})",
            self.0.options().get_policy(),
            self.0.line().position(),
            self.0.counter(),
            self.0.active_tracks()
        )
    }
}
