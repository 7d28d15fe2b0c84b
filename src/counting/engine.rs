use crate::counting::association::associate;
use crate::counting::collector::Collector;
use crate::counting::event::CountEvent;
use crate::counting::line::CountingLine;
use crate::counting::options::CounterOptions;
use crate::counting::policy::Verdict;
use crate::counting::sink::{EventSink, NoopSink};
use crate::counting::FrameContext;
use crate::track::store::TrackStore;
use crate::track::TrackView;
use crate::utils::bbox::BoundingBox;
use anyhow::Result;
use log::{debug, info, warn};
use std::collections::HashSet;


/// Line counting engine
///
/// Turns per-frame detections into tracks and decides, once per track, when the tracked
/// object is counted. The engine is driven by a single thread: every call of
/// [LineCounter::process_frame] fully processes one frame (garbage collection, association,
/// policy evaluation, emission) before it returns.
///
pub struct LineCounter<N = NoopSink>
where
    N: EventSink,
{
    store: TrackStore,
    opts: CounterOptions,
    collector: Collector,
    line: CountingLine,
    counter: u64,
    sink: N,
    last_timestamp: Option<f64>,
}

impl LineCounter<NoopSink> {
    /// Creates the engine that only returns the events to the caller
    ///
    pub fn with_options(opts: CounterOptions, line: CountingLine) -> Result<Self> {
        Self::new(opts, line, NoopSink)
    }
}

impl<N> LineCounter<N>
where
    N: EventSink,
{
    /// Creates new engine
    ///
    /// # Parameters
    /// * `opts` - validated options, the engine is not created when they are out of range
    /// * `line` - counting line handle, the caller keeps a clone to move the line
    /// * `sink` - receiver of the emitted events
    ///
    pub fn new(opts: CounterOptions, line: CountingLine, sink: N) -> Result<Self> {
        opts.validate()?;
        info!(
            "Counting engine: policy={}, max_age={}, max_idle={}, min_dwell={}, matching={:?}, start={}",
            opts.get_policy(),
            opts.get_max_age(),
            opts.get_max_idle(),
            opts.get_min_dwell(),
            opts.get_match_strategy(),
            opts.get_start_value()
        );
        Ok(Self {
            store: TrackStore::new(),
            collector: opts.collector(),
            counter: opts.get_start_value(),
            opts,
            line,
            sink,
            last_timestamp: None,
        })
    }

    /// Processes the detections of one frame and returns the count events it produced
    ///
    /// # Parameters
    /// * `timestamp` - monotonic frame time, seconds
    /// * `detections` - boxes in detector output order; malformed boxes are discarded
    ///
    pub fn process_frame(&mut self, timestamp: f64, detections: &[BoundingBox]) -> Vec<CountEvent> {
        if !timestamp.is_finite() {
            warn!(
                "Frame with non-finite timestamp {} is ignored ({} detections).",
                timestamp,
                detections.len()
            );
            return Vec::default();
        }
        if let Some(last) = self.last_timestamp {
            if timestamp < last {
                warn!(
                    "Frame timestamp {} is lower than the previous one {}, frames must be delivered in order.",
                    timestamp, last
                );
            }
        }
        self.last_timestamp = Some(timestamp);

        let ctx = FrameContext::new(timestamp, self.line.position());
        self.collector.collect(&mut self.store, &ctx);

        let strategy = self.opts.get_match_strategy();
        let policy = self.opts.get_policy();
        let min_dwell = self.opts.get_min_dwell();

        let mut claimed = HashSet::new();
        let mut retired = Vec::new();
        let mut events = Vec::new();

        for detection in detections {
            if !detection.is_valid() {
                debug!("Malformed detection {:?} is discarded.", detection);
                continue;
            }

            let track_id = match associate(&self.store, detection, &strategy, &claimed) {
                Some(track_id) => track_id,
                None => {
                    if detection.y2() < ctx.line {
                        let track_id = self.store.add_track(*detection, ctx.now);
                        claimed.insert(track_id);
                        debug!("Track {} is created for {:?}.", track_id, detection);
                    } else {
                        debug!(
                            "Detection {:?} is not above the line {}, not tracked.",
                            detection, ctx.line
                        );
                    }
                    continue;
                }
            };
            claimed.insert(track_id);

            let Some(track) = self.store.get_mut(track_id) else {
                continue;
            };
            track.update(*detection, ctx.now);

            let verdict = policy.verdict(track, &ctx, min_dwell);
            if verdict == Verdict::Keep {
                continue;
            }

            let Some(value) = self.counter.checked_add(1) else {
                warn!(
                    "Track {} is not counted: the counter reached its maximum value {}.",
                    track_id, self.counter
                );
                continue;
            };
            if let Err(e) = track.mark_counted(value) {
                warn!("Track {} is not counted: {}", track_id, e);
                continue;
            }
            self.counter = value;

            let event = CountEvent::new(value, track, ctx.now);
            info!(
                "Object counted: {} (track={}, size={}, x={}, y={}, t={:.3})",
                event.counter, track_id, event.size, event.x, event.y, event.timestamp
            );
            self.sink.send(&event);
            events.push(event);

            if verdict == Verdict::CountAndRetire {
                retired.push(track_id);
            }
        }

        self.store.fetch_tracks(&retired);
        events
    }

    /// The current counter value
    ///
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// The handle of the counting line used by the engine
    ///
    pub fn line(&self) -> &CountingLine {
        &self.line
    }

    pub fn options(&self) -> &CounterOptions {
        &self.opts
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// The number of active tracks
    ///
    pub fn active_tracks(&self) -> usize {
        self.store.len()
    }

    /// Read-only projection of the active tracks for renderers, classified against the
    /// current line position
    ///
    pub fn tracks(&self) -> Vec<TrackView> {
        self.store.views(self.line.position())
    }

    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    /// Forgets all tracks, the counter is kept
    ///
    pub fn reset_tracks(&mut self) {
        self.store.clear();
        self.last_timestamp = None;
    }
}
