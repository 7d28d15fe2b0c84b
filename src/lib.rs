pub mod counting;
pub mod examples;
pub mod prelude;
pub mod track;
pub mod utils;

#[cfg(feature = "python")]
mod py;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Errors {
    #[error("Malformed bounding box ({0}, {1}, {2}, {3}): expected x1 < x2 and y1 < y2.")]
    MalformedBox(i32, i32, i32, i32),
    #[error("Option `{0}` is out of range: {1}.")]
    OptionOutOfRange(&'static str, String),
    #[error("Unknown counting policy `{0}`, expected `TAC` or `VLB`.")]
    UnknownPolicy(String),
    #[error("Minimal dwell time {0} must be less than the maximum track age {1}.")]
    DwellExceedsMaxAge(f64, f64),
    #[error("Track {0} is already counted with label {1}.")]
    AlreadyCounted(u64, u64),
}
