/// Counting line shared with the control surface
pub mod line;

/// Engine configuration
pub mod options;

/// Detection to track association
pub mod association;

/// Track-And-Count and Virtual-Light-Barrier counting policies
pub mod policy;

/// Garbage collection of stale, expired and passed tracks
pub mod collector;

/// Count events
pub mod event;

/// Event sinks
pub mod sink;

/// Per-frame counting engine
pub mod engine;

#[cfg(feature = "python")]
pub mod engine_py;

/// Default total lifetime of a track, seconds
pub const DEFAULT_MAX_AGE: f64 = 10.0;

/// Default time a track survives without being matched, seconds
pub const DEFAULT_MAX_IDLE: f64 = 5.0;

/// Default anti-flicker debounce, a track must live longer than that to be counted, seconds
pub const DEFAULT_MIN_DWELL: f64 = 0.5;

/// Default proportional tolerance of the center offset
pub const DEFAULT_OFFSET_FACTOR: f32 = 1.0;

/// Values that stay constant during the processing of one frame
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// the timestamp of the frame
    pub now: f64,
    /// the counting line position read at the beginning of the frame
    pub line: i32,
}

impl FrameContext {
    pub fn new(now: f64, line: i32) -> Self {
        Self { now, line }
    }
}
