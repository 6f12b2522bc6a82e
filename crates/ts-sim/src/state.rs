//! Per-run mutable state: car positions and live signal phases.

use ts_core::{CarId, StreetId, Tick};
use ts_schedule::IntersectionPlan;

// ── CarState ──────────────────────────────────────────────────────────────────

/// Where one unfinished car is.
///
/// `route_pos` indexes the street the car is currently driving on (or
/// waiting at the end of); `arrival` is the tick it reaches that street's
/// end.  A car never moves more than one street per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CarState {
    pub car:       CarId,
    pub route_pos: usize,
    pub arrival:   Tick,
    pub finished:  bool,
}

impl CarState {
    /// Ordering key for the crossing queue.  Unique per car.
    #[inline]
    pub fn queue_key(&self) -> (Tick, CarId) {
        (self.arrival, self.car)
    }
}

// ── SignalState ───────────────────────────────────────────────────────────────

/// Live phase of one intersection during a run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SignalState {
    /// Slot currently green; `None` before tick 0 or for an empty plan.
    pub active_slot: Option<usize>,
    /// First tick at which the active phase has run out.
    pub next_change: Tick,
    /// Last tick a car crossed here.
    pub used_at:     Option<Tick>,
}

impl SignalState {
    pub fn new() -> Self {
        Self { active_slot: None, next_change: Tick::ZERO, used_at: None }
    }

    /// Move to the next phase if the active one has run out at `now`.
    ///
    /// Durations are ≥ 1, so at most one advance happens per tick.  An empty
    /// plan never advances.
    pub fn advance(&mut self, now: Tick, plan: &IntersectionPlan) {
        if plan.is_empty() || self.next_change > now {
            return;
        }
        let slot = match self.active_slot {
            None    => 0,
            Some(s) => (s + 1) % plan.len(),
        };
        self.active_slot = Some(slot);
        self.next_change = now + u64::from(plan.phase(slot).duration);

        // Swaps only exchange equal-duration slots, so the live rotation
        // always agrees with the static one.
        debug_assert_eq!(Some(plan.phase(slot).street), plan.green_at(now));
    }

    /// The green street at this intersection right now, if any.
    #[inline]
    pub fn green(&self, plan: &IntersectionPlan) -> Option<(usize, StreetId)> {
        self.active_slot.map(|slot| (slot, plan.phase(slot).street))
    }

    #[inline]
    pub fn used(&self, now: Tick) -> bool {
        self.used_at == Some(now)
    }
}
