#![feature(test)]

extern crate test;

use linecount::examples::WalkerGen;
use linecount::prelude::{CounterOptions, CountingLine, LineCounter, PolicyKind};
use test::Bencher;

#[bench]
fn bench_tac_00010(b: &mut Bencher) {
    bench_counter(10, PolicyKind::TrackAndCount, b);
}

#[bench]
fn bench_tac_00100(b: &mut Bencher) {
    bench_counter(100, PolicyKind::TrackAndCount, b);
}

#[bench]
fn bench_vlb_00010(b: &mut Bencher) {
    bench_counter(10, PolicyKind::VirtualLightBarrier, b);
}

#[bench]
fn bench_vlb_00100(b: &mut Bencher) {
    bench_counter(100, PolicyKind::VirtualLightBarrier, b);
}

fn bench_counter(objects: i32, policy: PolicyKind, b: &mut Bencher) {
    let mut iterators = (0..objects)
        .map(|i| WalkerGen::new(100 * i, 0, 50, 50, 1, 1))
        .collect::<Vec<_>>();

    let mut counter = LineCounter::with_options(
        CounterOptions::default().policy(policy),
        CountingLine::new(i32::MAX),
    )
    .unwrap();

    let mut frame = 0;
    b.iter(|| {
        frame += 1;
        let observations = iterators
            .iter_mut()
            .map(|i| i.next().unwrap())
            .collect::<Vec<_>>();
        counter.process_frame(f64::from(frame) / 25.0, &observations);
    });
}
