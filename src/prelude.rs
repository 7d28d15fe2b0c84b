use crate::counting;
use crate::track;
use crate::utils;

pub use counting::association::MatchStrategy;
pub use counting::engine::LineCounter;
pub use counting::event::CountEvent;
pub use counting::line::CountingLine;
pub use counting::options::CounterOptions;
pub use counting::policy::PolicyKind;
pub use counting::sink::{Announcement, AnnouncementQueue, EventSink, NoopSink};
pub use track::{LineSide, TrackView};
pub use utils::bbox::BoundingBox;
