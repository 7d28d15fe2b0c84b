use crate::counting::FrameContext;
use crate::track::Track;
use crate::Errors;
use std::fmt;
use std::str::FromStr;

/// Counting policy, selected once at configuration time
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// Counts an object after it dwelled above the line; the counted track stays in the
    /// store with its label.
    #[default]
    TrackAndCount,
    /// Counts an object when its upper edge crossed below the line; the counted track is
    /// removed right away.
    VirtualLightBarrier,
}

/// What the engine must do with a matched track
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Count,
    CountAndRetire,
}

impl PolicyKind {
    /// Evaluates a track that was just matched with a detection of the frame
    ///
    /// Counted tracks are always kept as they are; uncounted ones become countable only when
    /// they are older than `min_dwell`.
    ///
    pub fn verdict(&self, track: &Track, ctx: &FrameContext, min_dwell: f64) -> Verdict {
        if track.is_counted() || track.age(ctx.now) <= min_dwell {
            return Verdict::Keep;
        }
        let bbox = track.get_bbox();
        match self {
            PolicyKind::TrackAndCount if bbox.y2() < ctx.line => Verdict::Count,
            PolicyKind::VirtualLightBarrier if bbox.y1() > ctx.line => Verdict::CountAndRetire,
            _ => Verdict::Keep,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            PolicyKind::TrackAndCount => "TAC",
            PolicyKind::VirtualLightBarrier => "VLB",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for PolicyKind {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("TAC") {
            Ok(PolicyKind::TrackAndCount)
        } else if s.eq_ignore_ascii_case("VLB") {
            Ok(PolicyKind::VirtualLightBarrier)
        } else {
            Err(Errors::UnknownPolicy(s.to_string()))
        }
    }
}
