//! Phase policies: what the tick loop may do to a schedule while it runs.
//!
//! [`FixedOrder`] only reads the schedule; [`GreedySwap`] may exchange two
//! equal-duration phases so that a car waiting on a red street can cross.

use ts_core::{IntersectionId, StreetId};
use ts_schedule::SignalSchedule;

pub(crate) trait PhasePolicy {
    fn schedule(&self) -> &SignalSchedule;

    /// A car on `street` is waiting at `intersection`, whose `active_slot` is
    /// green for some other street.  Return the slot `street` was moved out
    /// of if the policy made `street` green in `active_slot`.
    fn rescue(
        &mut self,
        _intersection: IntersectionId,
        _active_slot:  usize,
        _street:       StreetId,
    ) -> Option<usize> {
        None
    }
}

// ── FixedOrder ────────────────────────────────────────────────────────────────

pub(crate) struct FixedOrder<'s> {
    pub schedule: &'s SignalSchedule,
}

impl PhasePolicy for FixedOrder<'_> {
    fn schedule(&self) -> &SignalSchedule {
        self.schedule
    }
}

// ── GreedySwap ────────────────────────────────────────────────────────────────

/// Swaps the active phase with the waiting street's phase when both have the
/// same duration.
///
/// A phase counts as used only for the tick in which a car crossed on it.
/// The tick loop already refuses a second crossing at an intersection within
/// one tick, so by the time `rescue` runs neither slot has carried a car this
/// tick and no per-slot flags are needed.  An earlier crossing on either slot
/// does not pin it: a phase can be swapped away on a later tick.
pub(crate) struct GreedySwap<'s> {
    schedule:  &'s mut SignalSchedule,
    pub swaps: u64,
}

impl<'s> GreedySwap<'s> {
    pub fn new(schedule: &'s mut SignalSchedule) -> Self {
        Self { schedule, swaps: 0 }
    }
}

impl PhasePolicy for GreedySwap<'_> {
    fn schedule(&self) -> &SignalSchedule {
        self.schedule
    }

    fn rescue(
        &mut self,
        intersection: IntersectionId,
        active_slot:  usize,
        street:       StreetId,
    ) -> Option<usize> {
        let plan = self.schedule.plan_mut(intersection);
        let slot = plan.slot_of(street)?;
        plan.swap_equal(active_slot, slot).ok()?;
        self.swaps += 1;
        Some(slot)
    }
}
