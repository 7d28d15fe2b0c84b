use crate::Errors;
use anyhow::Result;

/// Axis-aligned bounding box in pixel coordinates, the format is (x1, y1, x2, y2)
///
/// `(x1, y1)` is the upper-left corner, `(x2, y2)` is the lower-right one. The box is
/// well-formed when `x1 < x2` and `y1 < y2`; the detector adapter may still deliver
/// degenerate boxes, so the unchecked constructor is kept and [BoundingBox::is_valid]
/// is used to filter them.
///
#[derive(Clone, Default, Debug, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    _x1: i32,
    _y1: i32,
    _x2: i32,
    _y2: i32,
}

impl BoundingBox {
    /// Unchecked constructor
    ///
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            _x1: x1,
            _y1: y1,
            _x2: x2,
            _y2: y2,
        }
    }

    /// Checked constructor, fails for boxes with non-positive width or height
    ///
    pub fn try_new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        let bb = Self::new(x1, y1, x2, y2);
        if bb.is_valid() {
            Ok(bb)
        } else {
            Err(Errors::MalformedBox(x1, y1, x2, y2).into())
        }
    }

    /// Constructor from the (left, top, width, height) format most detectors emit
    ///
    pub fn xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    pub fn x1(&self) -> i32 {
        self._x1
    }

    pub fn y1(&self) -> i32 {
        self._y1
    }

    pub fn x2(&self) -> i32 {
        self._x2
    }

    pub fn y2(&self) -> i32 {
        self._y2
    }

    /// Width in pixels, boxes may span the whole `i32` range
    ///
    pub fn width(&self) -> i64 {
        i64::from(self._x2) - i64::from(self._x1)
    }

    pub fn height(&self) -> i64 {
        i64::from(self._y2) - i64::from(self._y1)
    }

    pub fn is_valid(&self) -> bool {
        self._x1 < self._x2 && self._y1 < self._y2
    }

    /// Integer center of the box, halves are rounded towards the upper-left corner
    ///
    pub fn center(&self) -> (i32, i32) {
        (
            midpoint(self._x1, self.width()),
            midpoint(self._y1, self.height()),
        )
    }

    /// Area in square pixels
    ///
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }
}

// lies between `start` and `start + len`, both of them are i32 for a box
fn midpoint(start: i32, len: i64) -> i32 {
    (i64::from(start) + len.div_euclid(2)) as i32
}

impl From<(i32, i32, i32, i32)> for BoundingBox {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<BoundingBox> for (i32, i32, i32, i32) {
    fn from(bb: BoundingBox) -> Self {
        (bb._x1, bb._y1, bb._x2, bb._y2)
    }
}

#[cfg(feature = "python")]
pub mod python {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use super::BoundingBox;

    #[pyclass]
    #[pyo3(name = "BoundingBox")]
    #[derive(Clone, Debug)]
    #[repr(transparent)]
    pub struct PyBoundingBox(pub(crate) BoundingBox);

    #[pymethods]
    impl PyBoundingBox {
        #[new]
        pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> PyResult<Self> {
            BoundingBox::try_new(x1, y1, x2, y2)
                .map(Self)
                .map_err(|e| PyValueError::new_err(e.to_string()))
        }

        #[classattr]
        const __hash__: Option<Py<PyAny>> = None;

        fn __repr__(&self) -> String {
            format!("{:?}", self.0)
        }

        fn __str__(&self) -> String {
            format!("{:#?}", self.0)
        }

        #[getter]
        fn x1(&self) -> i32 {
            self.0.x1()
        }

        #[getter]
        fn y1(&self) -> i32 {
            self.0.y1()
        }

        #[getter]
        fn x2(&self) -> i32 {
            self.0.x2()
        }

        #[getter]
        fn y2(&self) -> i32 {
            self.0.y2()
        }

        #[getter]
        fn center(&self) -> (i32, i32) {
            self.0.center()
        }

        #[getter]
        fn area(&self) -> i64 {
            self.0.area()
        }

        fn as_tuple(&self) -> (i32, i32, i32, i32) {
            self.0.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::bbox::BoundingBox;
    use crate::Errors;

    #[test]
    fn geometry() {
        let bb = BoundingBox::new(42, 42, 102, 102);
        assert_eq!(bb.width(), 60);
        assert_eq!(bb.height(), 60);
        assert_eq!(bb.center(), (72, 72));
        assert_eq!(bb.area(), 3600);
        assert!(bb.is_valid());

        let bb = BoundingBox::new(0, 0, 5, 3);
        assert_eq!(bb.center(), (2, 1));
    }

    #[test]
    fn full_range() {
        let bb = BoundingBox::new(i32::MIN, 0, i32::MAX, 10);
        assert!(bb.is_valid());
        assert_eq!(bb.width(), i64::from(u32::MAX));
        assert_eq!(bb.height(), 10);
        assert_eq!(bb.center(), (-1, 5));
        assert_eq!(bb.area(), i64::from(u32::MAX) * 10);

        let bb = BoundingBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(bb.area(), i64::MAX);
    }

    #[test]
    fn xywh() {
        let bb = BoundingBox::xywh(10, 20, 30, 40);
        assert_eq!(bb, BoundingBox::new(10, 20, 40, 60));
        let t: (i32, i32, i32, i32) = bb.into();
        assert_eq!(t, (10, 20, 40, 60));
    }

    #[test]
    fn malformed() {
        assert!(!BoundingBox::new(10, 10, 10, 20).is_valid());
        assert!(!BoundingBox::new(10, 20, 30, 5).is_valid());

        let err = BoundingBox::try_new(10, 10, 5, 20).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Errors>(),
            Some(&Errors::MalformedBox(10, 10, 5, 20))
        );
        assert!(BoundingBox::try_new(0, 0, 1, 1).is_ok());
    }
}
