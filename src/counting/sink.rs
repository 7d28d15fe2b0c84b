use crate::counting::event::CountEvent;
use crossbeam::channel::{bounded, Receiver, Sender, TrySendError};
use log::warn;

/// Receives count events as soon as the engine emits them
///
/// Implementations must not block: the engine calls the sink from the frame loop.
///
pub trait EventSink: Send {
    fn send(&mut self, event: &CountEvent);
}

#[derive(Default, Clone, Debug)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn send(&mut self, _event: &CountEvent) {}
}

/// A range of counter values to be announced at once
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Announcement {
    /// the first counter value not announced yet
    pub first: u64,
    /// the last counter value emitted
    pub last: u64,
    /// the timestamp of the last event merged into the announcement
    pub timestamp: f64,
}

impl Announcement {
    pub fn is_range(&self) -> bool {
        self.first != self.last
    }
}

/// Hands events to a slow consumer (speech synthesis, serial display) without blocking
///
/// At most one announcement is outstanding in the channel. While the consumer hasn't taken
/// it, newly emitted events are merged into a single pending announcement covering the whole
/// range of counter values, which is delivered as soon as the channel is free again.
///
pub struct AnnouncementQueue {
    tx: Sender<Announcement>,
    pending: Option<Announcement>,
}

impl AnnouncementQueue {
    /// Creates the queue and the receiving end for the consumer
    ///
    pub fn new() -> (Self, Receiver<Announcement>) {
        let (tx, rx) = bounded(1);
        (Self { tx, pending: None }, rx)
    }

    /// The announcement waiting for the consumer to become free
    ///
    pub fn pending(&self) -> Option<&Announcement> {
        self.pending.as_ref()
    }

    /// Tries to deliver the pending announcement, returns `true` when nothing is left pending
    ///
    pub fn flush(&mut self) -> bool {
        if let Some(announcement) = self.pending.take() {
            match self.tx.try_send(announcement) {
                Ok(()) => {}
                Err(TrySendError::Full(a)) => self.pending = Some(a),
                Err(TrySendError::Disconnected(a)) => {
                    warn!(
                        "Unable to deliver announcement {:?}, the consumer closed the channel.",
                        a
                    );
                }
            }
        }
        self.pending.is_none()
    }
}

impl EventSink for AnnouncementQueue {
    fn send(&mut self, event: &CountEvent) {
        let announcement = match self.pending.take() {
            Some(mut a) => {
                a.last = event.counter;
                a.timestamp = event.timestamp;
                a
            }
            None => Announcement {
                first: event.counter,
                last: event.counter,
                timestamp: event.timestamp,
            },
        };
        self.pending = Some(announcement);
        self.flush();
    }
}
