use anyhow::Result;
use linecount::examples::WalkerGen;
use linecount::prelude::{AnnouncementQueue, CounterOptions, CountingLine, LineCounter, PolicyKind};
use log::info;
use std::thread;
use std::time::Duration;

const FRAME_HEIGHT: i32 = 480;
const FPS: f64 = 25.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (queue, announcements) = AnnouncementQueue::new();
    let speaker = thread::spawn(move || {
        // a slow consumer, several visitors may cross while one announcement is spoken
        while let Ok(a) = announcements.recv() {
            if a.is_range() {
                info!("Welcome visitors {} to {}", a.first, a.last);
            } else {
                info!("Welcome visitor number {}", a.first);
            }
            thread::sleep(Duration::from_millis(300));
        }
    });

    let line = CountingLine::new(FRAME_HEIGHT * 2 / 3);
    let opts = CounterOptions::default()
        .policy(PolicyKind::VirtualLightBarrier)
        .start_value(100);
    let mut counter = LineCounter::new(opts, line.clone(), queue)?;

    let mut walkers = (0..8)
        .map(|i| WalkerGen::new(20 + i * 75, -60 - i * 40, 50, 60, 6, 1))
        .collect::<Vec<_>>();

    for frame in 0..200 {
        let t = f64::from(frame) / FPS;
        if frame == 100 {
            line.set(FRAME_HEIGHT / 2);
            info!("Line moved to {}", line.position());
        }
        let boxes = walkers
            .iter_mut()
            .filter_map(|w| w.next())
            .filter(|b| b.y2() > 0 && b.y1() < FRAME_HEIGHT)
            .collect::<Vec<_>>();
        counter.process_frame(t, &boxes);
        counter.sink_mut().flush();
        thread::sleep(Duration::from_millis(10));
    }

    while !counter.sink_mut().flush() {
        thread::sleep(Duration::from_millis(50));
    }
    info!("Visitors counted: {}", counter.counter());

    drop(counter);
    speaker
        .join()
        .map_err(|_| anyhow::anyhow!("The announcement thread panicked"))?;
    Ok(())
}
