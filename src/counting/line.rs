use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Horizontal counting line
///
/// The handle is cheap to clone; all clones refer to the same position. The control
/// surface moves the line between frames with [CountingLine::set], the engine reads it
/// once at the beginning of each frame.
///
#[derive(Debug, Clone, Default)]
pub struct CountingLine(Arc<AtomicI32>);

impl CountingLine {
    pub fn new(position: i32) -> Self {
        Self(Arc::new(AtomicI32::new(position)))
    }

    /// The line placed in the middle of a frame of the given height
    ///
    pub fn half_height(frame_height: i32) -> Self {
        Self::new(frame_height / 2)
    }

    pub fn position(&self) -> i32 {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, position: i32) {
        self.0.store(position, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use crate::counting::line::CountingLine;

    #[test]
    fn shared_position() {
        let line = CountingLine::new(300);
        let control = line.clone();
        assert_eq!(line.position(), 300);

        control.set(250);
        assert_eq!(line.position(), 250);
    }

    #[test]
    fn half_height() {
        assert_eq!(CountingLine::half_height(480).position(), 240);
        assert_eq!(CountingLine::half_height(481).position(), 240);
        assert_eq!(CountingLine::default().position(), 0);
    }
}
