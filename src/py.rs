use crate::counting::engine_py::PyLineCounter;
use crate::counting::event::python::PyCountEvent;
use crate::track::python::PyTrackView;
use crate::utils::bbox::python::PyBoundingBox;
use pyo3::prelude::*;

#[pymodule]
#[pyo3(name = "linecount")]
fn linecount(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyBoundingBox>()?;
    m.add_class::<PyCountEvent>()?;
    m.add_class::<PyTrackView>()?;
    m.add_class::<PyLineCounter>()?;
    Ok(())
}
