//! Simulation time model and scoring configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time a
//! car needs to cross one unit of street length, and the smallest unit a
//! green phase can last.  Ticks run from `0` to `SimConfig::duration`
//! **inclusive**.
//!
//! All tick arithmetic saturates at `u64::MAX`.  A saturated tick is later
//! than any reachable duration, so a car whose arrival overflows simply
//! finishes too late to score.

use std::fmt;

/// Points awarded by the scoring rules.  Accumulated with saturating
/// addition, so a pathological total pins at `u64::MAX` instead of wrapping.
pub type Score = u64;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single logical clock shared by every car and intersection in a run.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// `true` once the clock has moved past the last simulated tick.
    #[inline]
    pub fn is_past(&self, end: Tick) -> bool {
        self.current_tick > end
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Scoring parameters of one problem instance.
///
/// A car that completes its route at tick `t <= duration` earns
/// `bonus + (duration - t)` points; a later car earns nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulation horizon `D`.  Ticks `0..=duration` are simulated.
    pub duration: u64,

    /// Fixed bonus `B` for every car that finishes in time.
    pub bonus: u64,
}

impl SimConfig {
    pub fn new(duration: u64, bonus: u64) -> Self {
        Self { duration, bonus }
    }

    /// The last simulated tick (inclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.duration)
    }

    /// Points for a car completing its route at `arrival`.
    ///
    /// Zero when `arrival` is past the horizon.
    #[inline]
    pub fn score_for_arrival(&self, arrival: Tick) -> Score {
        if arrival > self.end_tick() {
            0
        } else {
            self.bonus.saturating_add(self.duration - arrival.0)
        }
    }
}
