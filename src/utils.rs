/// Pixel bounding boxes
pub mod bbox;
