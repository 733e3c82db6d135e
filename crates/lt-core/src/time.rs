//! Simulation time model.
//!
//! # Design
//!
//! Two clocks run side by side:
//!
//! - A frame counter (`Tick`), advanced once per host `tick(delta)` call.
//!   Animation progress moves by a fixed increment per tick.
//! - Accumulated host time (`Duration`), used to decide when the next
//!   resolution pass is due.  A pass runs when at least `action_interval`
//!   has accumulated since the last one.
//!
//! The engine never reads a wall clock; all time enters through `delta`, so
//! a test can drive it with synthetic durations.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A host frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Frame counter plus the resolution-pass schedule.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// Frames processed since the run started.
    pub current_tick: Tick,
    /// Host time accumulated since the run started.
    pub elapsed: Duration,
    /// Value of `elapsed` when the last resolution pass ran (0 at start).
    pub last_resolution: Duration,
    /// Number of resolution passes run so far.
    pub passes: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one host frame of length `delta`.
    #[inline]
    pub fn advance(&mut self, delta: Duration) {
        self.current_tick = self.current_tick.next();
        self.elapsed += delta;
    }

    /// `true` once `interval` has accumulated since the last pass.
    #[inline]
    pub fn resolution_due(&self, interval: Duration) -> bool {
        self.elapsed.saturating_sub(self.last_resolution) >= interval
    }

    /// Mark a resolution pass as having run at the current time.
    #[inline]
    pub fn mark_resolved(&mut self) {
        self.last_resolution = self.elapsed;
        self.passes += 1;
    }

    /// Time remaining until the next pass is due.
    pub fn until_next_resolution(&self, interval: Duration) -> Duration {
        interval.saturating_sub(self.elapsed.saturating_sub(self.last_resolution))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}s, {} passes)",
            self.current_tick,
            self.elapsed.as_secs_f32(),
            self.passes
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Smallest line that can seat the three-character cast with room to move.
pub const MIN_LINE_LENGTH: usize = 5;
/// Largest line the configuration surface offers.
pub const MAX_LINE_LENGTH: usize = 20;
/// Floor on the resolution-pass period.
pub const MIN_ACTION_INTERVAL_MS: u64 = 100;
/// Animation progress gained per frame: ~1 s of animation at 60 fps.
pub const DEFAULT_ANIMATION_RATE: f32 = 0.016;

/// Top-level simulation configuration.
///
/// Hosts build this from their configuration surface (or load it from JSON
/// with the `serde` feature) and call [`clamped`](Self::clamped) before
/// handing it to the engine.  The engine uses the values as given.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of cells on the line.  Default 10.
    pub line_length: usize,

    /// Resolution-pass period in milliseconds.  Default 1000.
    pub action_interval_ms: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Progress added to every agent's animation each frame.
    pub animation_rate: f32,

    /// Relative weight of `initiate_interaction` in the action draw when it
    /// is legal.  Each of the six baseline actions has weight 1.  0 disables
    /// interactions entirely.
    pub interaction_weight: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            line_length:        10,
            action_interval_ms: 1_000,
            seed:               42,
            animation_rate:     DEFAULT_ANIMATION_RATE,
            interaction_weight: 0.0,
        }
    }
}

impl SimConfig {
    /// Resolution-pass period as a `Duration`.
    #[inline]
    pub fn action_interval(&self) -> Duration {
        Duration::from_millis(self.action_interval_ms)
    }

    /// Apply the configuration surface's bounds: line length in
    /// `[MIN_LINE_LENGTH, MAX_LINE_LENGTH]`, interval at least
    /// `MIN_ACTION_INTERVAL_MS`, animation rate in `(0, 1]`, interaction
    /// weight finite and non-negative.
    pub fn clamped(mut self) -> Self {
        self.line_length = self.line_length.clamp(MIN_LINE_LENGTH, MAX_LINE_LENGTH);
        self.action_interval_ms = self.action_interval_ms.max(MIN_ACTION_INTERVAL_MS);
        if !(self.animation_rate > 0.0 && self.animation_rate <= 1.0) {
            self.animation_rate = DEFAULT_ANIMATION_RATE;
        }
        if !self.interaction_weight.is_finite() || self.interaction_weight < 0.0 {
            self.interaction_weight = 0.0;
        }
        self
    }

    /// Construct a fresh `SimClock` for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }
}
