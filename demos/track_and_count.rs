use anyhow::Result;
use linecount::examples::{FlickerGen, WalkerGen};
use linecount::prelude::{BoundingBox, CounterOptions, CountingLine, LineCounter, LineSide};
use std::io::{self, Write};

const FRAME_WIDTH: i32 = 640;
const FRAME_HEIGHT: i32 = 480;
const FPS: f64 = 25.0;

fn main() -> Result<()> {
    env_logger::init();

    let line = CountingLine::half_height(FRAME_HEIGHT);
    let mut counter = LineCounter::with_options(CounterOptions::default(), line)?;

    let mut walkers = vec![
        WalkerGen::new(60, -60, 60, 60, 4, 1),
        WalkerGen::new(260, -160, 70, 70, 3, 1),
        WalkerGen::new(460, -300, 50, 50, 5, 1),
    ];
    let mut noise = FlickerGen::new(FRAME_WIDTH, FRAME_HEIGHT, 40);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "counter,timestamp,size,x,y")?;

    for frame in 0..400 {
        let t = f64::from(frame) / FPS;
        let mut boxes = walkers
            .iter_mut()
            .filter_map(|w| w.next())
            .filter(|b| b.y2() > 0 && b.y1() < FRAME_HEIGHT)
            .collect::<Vec<BoundingBox>>();
        if frame % 7 == 0 {
            boxes.extend(noise.next());
        }

        for e in counter.process_frame(t, &boxes) {
            writeln!(out, "{},{:.3},{},{},{}", e.counter, e.timestamp, e.size, e.x, e.y)?;
        }

        if frame % 50 == 0 {
            let views = counter.tracks();
            let above = views.iter().filter(|v| v.side == LineSide::Above).count();
            eprintln!(
                "t={:6.2}: visitors counted: {}, tracks: {} ({} above the line)",
                t,
                counter.counter(),
                views.len(),
                above
            );
        }
    }

    eprintln!("Visitors counted: {}", counter.counter());
    Ok(())
}
