use crate::counting::association::MatchStrategy;
use crate::counting::collector::Collector;
use crate::counting::policy::PolicyKind;
use crate::counting::{DEFAULT_MAX_AGE, DEFAULT_MAX_IDLE, DEFAULT_MIN_DWELL};
use crate::Errors;
use anyhow::Result;

/// Class that is used to configure the counting engine
///
/// Setters don't check values; the whole set is validated by [CounterOptions::validate] which
/// is also called when the engine is constructed, so an engine never runs with an invalid
/// configuration.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CounterOptions {
    max_age: f64,
    max_idle: f64,
    min_dwell: f64,
    match_strategy: MatchStrategy,
    policy: PolicyKind,
    start_value: u64,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            max_idle: DEFAULT_MAX_IDLE,
            min_dwell: DEFAULT_MIN_DWELL,
            match_strategy: MatchStrategy::default(),
            policy: PolicyKind::default(),
            start_value: 0,
        }
    }
}

impl CounterOptions {
    /// Maximum lifetime of a track in seconds.
    ///
    /// A track older than that is removed even if it is still matched on every frame, so an
    /// object standing in front of the camera is dropped and, under the Track-And-Count
    /// policy, counted again if it keeps being detected above the line.
    ///
    pub fn max_age(mut self, seconds: f64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Time in seconds a track survives without being matched.
    ///
    pub fn max_idle(mut self, seconds: f64) -> Self {
        self.max_idle = seconds;
        self
    }

    /// Minimal time in seconds a track must exist before it may be counted. Suppresses
    /// counting of detector flicker.
    ///
    pub fn min_dwell(mut self, seconds: f64) -> Self {
        self.min_dwell = seconds;
        self
    }

    /// Proportional tolerance of the center offset, a shortcut for
    /// `match_strategy(MatchStrategy::Proportional(factor))`.
    ///
    pub fn offset_factor(mut self, factor: f32) -> Self {
        self.match_strategy = MatchStrategy::Proportional(factor);
        self
    }

    pub fn match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the policy by its short name, `TAC` or `VLB`
    ///
    pub fn policy_name(self, name: &str) -> Result<Self> {
        let policy = name.parse::<PolicyKind>()?;
        Ok(self.policy(policy))
    }

    /// Initial value of the counter, the first counted object gets `start_value + 1`.
    ///
    pub fn start_value(mut self, value: u64) -> Self {
        self.start_value = value;
        self
    }

    pub fn get_max_age(&self) -> f64 {
        self.max_age
    }

    pub fn get_max_idle(&self) -> f64 {
        self.max_idle
    }

    pub fn get_min_dwell(&self) -> f64 {
        self.min_dwell
    }

    pub fn get_match_strategy(&self) -> MatchStrategy {
        self.match_strategy
    }

    pub fn get_policy(&self) -> PolicyKind {
        self.policy
    }

    pub fn get_start_value(&self) -> u64 {
        self.start_value
    }

    pub fn validate(&self) -> Result<()> {
        positive("max_age", self.max_age)?;
        positive("max_idle", self.max_idle)?;
        if !self.min_dwell.is_finite() || self.min_dwell < 0.0 {
            return Err(Errors::OptionOutOfRange(
                "min_dwell",
                format!("expected a finite non-negative number, got {}", self.min_dwell),
            )
            .into());
        }
        if self.min_dwell >= self.max_age {
            return Err(Errors::DwellExceedsMaxAge(self.min_dwell, self.max_age).into());
        }
        let name = match self.match_strategy {
            MatchStrategy::Proportional(_) => "offset_factor",
            MatchStrategy::FixedRadius(_) => "match_radius",
        };
        positive(name, f64::from(self.match_strategy.parameter()))?;
        Ok(())
    }

    pub(crate) fn collector(&self) -> Collector {
        Collector::new(self.max_idle, self.max_age)
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Errors::OptionOutOfRange(
            name,
            format!("expected a finite positive number, got {}", value),
        )
        .into())
    }
}
