//! Green phases and the ordered plan of one intersection.

use ts_core::{SimRng, StreetId, Tick};

use crate::{ScheduleError, ScheduleResult};

// ── GreenPhase ────────────────────────────────────────────────────────────────

/// One entry of an intersection plan: `street` has the exclusive right of
/// way for `duration` consecutive ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenPhase {
    pub street:   StreetId,
    /// Ticks of green, always ≥ 1.
    pub duration: u32,
}

// ── IntersectionPlan ──────────────────────────────────────────────────────────

/// The ordered, cyclic list of green phases at one intersection.
///
/// An empty plan is legal: the light never turns green and every incoming
/// street waits forever.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionPlan {
    phases: Vec<GreenPhase>,
}

impl IntersectionPlan {
    /// A plan with no phases.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Read-only slice of the phases in rotation order.
    pub fn phases(&self) -> &[GreenPhase] {
        &self.phases
    }

    #[inline]
    pub fn phase(&self, slot: usize) -> &GreenPhase {
        &self.phases[slot]
    }

    /// Length of one full rotation, in ticks.  Zero for an empty plan.
    pub fn cycle_ticks(&self) -> u64 {
        self.phases.iter().map(|p| u64::from(p.duration)).sum()
    }

    /// Slot of the phase for `street`, if it has one.
    pub fn slot_of(&self, street: StreetId) -> Option<usize> {
        self.phases.iter().position(|p| p.street == street)
    }

    /// The street that is green at `tick` if the plan rotates unchanged from
    /// tick 0.  `None` for an empty plan.
    pub fn green_at(&self, tick: Tick) -> Option<StreetId> {
        let cycle = self.cycle_ticks();
        if cycle == 0 {
            return None;
        }
        let mut pos = tick.0 % cycle;
        for phase in &self.phases {
            let d = u64::from(phase.duration);
            if pos < d {
                return Some(phase.street);
            }
            pos -= d;
        }
        None
    }

    // ── Order-only mutation ───────────────────────────────────────────────

    /// Exchange the phases in slots `a` and `b`.
    ///
    /// Only phases of equal duration may be swapped, so the cycle length and
    /// the tick at which each slot starts stay the same.
    pub fn swap_equal(&mut self, a: usize, b: usize) -> ScheduleResult<()> {
        let len = self.phases.len();
        for slot in [a, b] {
            if slot >= len {
                return Err(ScheduleError::SlotOutOfRange { slot, len });
            }
        }
        let (left, right) = (self.phases[a].duration, self.phases[b].duration);
        if left != right {
            return Err(ScheduleError::UnequalDurations { left, right });
        }
        self.phases.swap(a, b);
        Ok(())
    }

    /// Randomly permute the phase order.  Durations and membership are
    /// unchanged, so `cycle_ticks()` is too.
    pub fn shuffle_order(&mut self, rng: &mut SimRng) {
        rng.shuffle(&mut self.phases);
    }

    pub(crate) fn push(&mut self, phase: GreenPhase) {
        self.phases.push(phase);
    }
}
