//! `SignalSchedule`: one [`IntersectionPlan`] per intersection.

use rustc_hash::FxHashSet;

use ts_core::{IntersectionId, StreetId};
use ts_network::{NetworkError, RoadNetwork};

use crate::{GreenPhase, IntersectionPlan, ScheduleError, ScheduleResult};

/// A complete candidate signal plan, indexed by `IntersectionId`.
///
/// Cloning is a deep copy: no two schedules ever share a phase list, so
/// independent optimizer runs can each own one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalSchedule {
    plans: Vec<IntersectionPlan>,
}

impl SignalSchedule {
    /// A schedule with `intersection_count` empty plans.
    pub fn new(intersection_count: usize) -> Self {
        Self { plans: vec![IntersectionPlan::empty(); intersection_count] }
    }

    /// An all-empty schedule sized for `network`.
    pub fn for_network(network: &RoadNetwork) -> Self {
        Self::new(network.intersection_count())
    }

    pub fn intersection_count(&self) -> usize {
        self.plans.len()
    }

    /// Append a phase to the end of `intersection`'s rotation.
    ///
    /// Range and duration are checked here.  Whether `street` really ends at
    /// `intersection` needs the network; see [`validate`](Self::validate) or
    /// [`add_phase_by_name`](Self::add_phase_by_name).
    pub fn add_phase(
        &mut self,
        intersection: IntersectionId,
        street:       StreetId,
        duration:     u32,
    ) -> ScheduleResult<()> {
        let count = self.plans.len();
        let plan = self
            .plans
            .get_mut(intersection.index())
            .ok_or(ScheduleError::IntersectionOutOfRange { intersection, count })?;
        if duration == 0 {
            return Err(ScheduleError::ZeroDuration { intersection, street });
        }
        plan.push(GreenPhase { street, duration });
        Ok(())
    }

    /// Append a phase for the street called `name`, giving it to the
    /// intersection at the street's end.
    pub fn add_phase_by_name(
        &mut self,
        network:  &RoadNetwork,
        name:     &str,
        duration: u32,
    ) -> ScheduleResult<IntersectionId> {
        let street = network.require_street(name)?;
        let intersection = network.street(street).to;
        self.add_phase(intersection, street, duration)?;
        Ok(intersection)
    }

    #[inline]
    pub fn plan(&self, intersection: IntersectionId) -> &IntersectionPlan {
        &self.plans[intersection.index()]
    }

    /// Mutable access for order-only edits (`swap_equal`, `shuffle_order`).
    #[inline]
    pub fn plan_mut(&mut self, intersection: IntersectionId) -> &mut IntersectionPlan {
        &mut self.plans[intersection.index()]
    }

    /// `(IntersectionId, &IntersectionPlan)` for every intersection.
    pub fn iter(&self) -> impl Iterator<Item = (IntersectionId, &IntersectionPlan)> + '_ {
        self.plans
            .iter()
            .enumerate()
            .map(|(i, p)| (IntersectionId(i as u32), p))
    }

    /// Number of intersections with at least one phase.
    pub fn scheduled_intersections(&self) -> usize {
        self.plans.iter().filter(|p| !p.is_empty()).count()
    }

    /// Cycle length of every intersection, indexed by `IntersectionId`.
    pub fn cycle_lengths(&self) -> Vec<u64> {
        self.plans.iter().map(IntersectionPlan::cycle_ticks).collect()
    }

    /// Check the whole schedule against `network`.
    ///
    /// Rejects a size mismatch, phases for unknown streets, streets that do
    /// not end at the phase's intersection, zero durations, and a street that
    /// appears twice in one plan.  Linear in the total number of phases.
    pub fn validate(&self, network: &RoadNetwork) -> ScheduleResult<()> {
        if self.plans.len() != network.intersection_count() {
            return Err(ScheduleError::SizeMismatch {
                expected: network.intersection_count(),
                got:      self.plans.len(),
            });
        }
        let mut seen: FxHashSet<StreetId> = FxHashSet::default();
        for (intersection, plan) in self.iter() {
            seen.clear();
            for phase in plan.phases() {
                if !network.contains_street(phase.street) {
                    return Err(NetworkError::StreetNotFound(phase.street).into());
                }
                let street = network.street(phase.street);
                if street.to != intersection {
                    return Err(ScheduleError::NotIncoming {
                        intersection,
                        street: street.name.clone(),
                    });
                }
                if phase.duration == 0 {
                    return Err(ScheduleError::ZeroDuration {
                        intersection,
                        street: phase.street,
                    });
                }
                if !seen.insert(phase.street) {
                    return Err(ScheduleError::DuplicatePhase {
                        intersection,
                        street: street.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
