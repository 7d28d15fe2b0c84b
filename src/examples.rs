use crate::utils::bbox::BoundingBox;
use rand::distributions::Uniform;
use rand::prelude::ThreadRng;
use rand::Rng;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Generates the boxes of an object walking down the frame
///
/// Every call to `next` moves the box by `speed` pixels down and adds a random jitter of up to
/// `jitter` pixels on both axes; the size of the box stays the same.
///
pub struct WalkerGen {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    speed: i32,
    gen: ThreadRng,
    dist_pos: Uniform<i32>,
}

impl WalkerGen {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32, jitter: i32) -> Self {
        assert!(width > 0 && height > 0, "The box must have a positive size");
        assert!(jitter >= 0, "The jitter must be non-negative");
        Self {
            x,
            y,
            width,
            height,
            speed,
            gen: rand::thread_rng(),
            dist_pos: Uniform::new_inclusive(-jitter, jitter),
        }
    }
}

impl Iterator for WalkerGen {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        self.x += self.gen.sample(self.dist_pos);
        self.y += self.speed + self.gen.sample(self.dist_pos);
        Some(BoundingBox::xywh(self.x, self.y, self.width, self.height))
    }
}

/// Generates detector noise: boxes popping up at random places for a single frame
///
pub struct FlickerGen {
    frame_width: i32,
    frame_height: i32,
    size: i32,
    gen: ThreadRng,
}

impl FlickerGen {
    pub fn new(frame_width: i32, frame_height: i32, size: i32) -> Self {
        assert!(
            size > 0 && size < frame_width && size < frame_height,
            "The box must fit into the frame"
        );
        Self {
            frame_width,
            frame_height,
            size,
            gen: rand::thread_rng(),
        }
    }
}

impl Iterator for FlickerGen {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.gen.gen_range(0..self.frame_width - self.size);
        let y = self.gen.gen_range(0..self.frame_height - self.size);
        Some(BoundingBox::xywh(x, y, self.size, self.size))
    }
}

#[inline]
pub fn current_time_span() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[inline]
pub fn current_time_sec() -> f64 {
    current_time_span().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use crate::examples::{FlickerGen, WalkerGen};

    #[test]
    fn walker() {
        let mut w = WalkerGen::new(100, 0, 40, 60, 10, 0);
        let b1 = w.next().unwrap();
        let b2 = w.next().unwrap();
        assert_eq!((b1.x1(), b1.y1(), b1.width(), b1.height()), (100, 10, 40, 60));
        assert_eq!(b2.y1() - b1.y1(), 10);

        let mut w = WalkerGen::new(100, 0, 40, 60, 10, 3);
        let mut prev = w.next().unwrap();
        for b in w.take(50) {
            assert!((b.x1() - prev.x1()).abs() <= 3);
            assert!((7..=13).contains(&(b.y1() - prev.y1())));
            assert_eq!(b.width(), 40);
            prev = b;
        }
    }

    #[test]
    fn flicker() {
        for b in FlickerGen::new(640, 480, 30).take(100) {
            assert!(b.is_valid());
            assert!(b.x2() <= 640 && b.y2() <= 480);
        }
    }
}
