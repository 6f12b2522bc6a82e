//! Iterated greedy local search over phase orders.
//!
//! Each iteration runs [`Sim::optimize`] on a copy of the current best
//! schedule, then re-scores the copy with [`Sim::evaluate`].  The copy is kept
//! only if its replayed score is strictly better; otherwise, or when the
//! optimizer made no swap at all, the search has converged.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use ts_core::{IntersectionId, Score, SimRng};
use ts_schedule::SignalSchedule;

use crate::{NoopObserver, RunStats, Sim, SimError, SimResult};

// ── LocalSearchConfig ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Upper limit on optimizer passes per starting schedule.
    pub max_iterations: usize,
    /// Wall-clock limit for the whole search.  `None` means unlimited.
    pub time_budget: Option<Duration>,
    /// Starting schedules for [`LocalSearch::run_multi_start`].  The first is
    /// the caller's schedule; the rest are seeded shuffles of it.
    pub restarts: usize,
    /// Master seed for the shuffles.
    pub seed: u64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self { max_iterations: 100, time_budget: None, restarts: 1, seed: 0 }
    }
}

impl LocalSearchConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.max_iterations == 0 {
            return Err(SimError::Config("max_iterations must be at least 1".into()));
        }
        if self.restarts == 0 {
            return Err(SimError::Config("restarts must be at least 1".into()));
        }
        Ok(())
    }
}

// ── SearchOutcome ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Evaluated score of the schedule passed in.
    pub initial_score: Score,
    /// Evaluated score of the schedule left behind.
    pub best_score:    Score,
    pub upper_bound:   Score,
    /// Optimizer passes run, over every starting schedule.
    pub iterations:    usize,
    /// Passes whose result replaced the best schedule.
    pub accepted:      usize,
    /// Phase swaps in the accepted passes.
    pub swaps:         u64,
}

impl SearchOutcome {
    pub fn improvement(&self) -> Score {
        self.best_score.saturating_sub(self.initial_score)
    }
}

// ── LocalSearch ───────────────────────────────────────────────────────────────

pub struct LocalSearch<'s, 'a> {
    sim:    &'s Sim<'a>,
    config: LocalSearchConfig,
}

impl<'s, 'a> LocalSearch<'s, 'a> {
    pub fn new(sim: &'s Sim<'a>, config: LocalSearchConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { sim, config })
    }

    /// Improve `schedule` in place from its current order.
    ///
    /// The schedule is only ever replaced by a strictly better one, so the
    /// outcome's `best_score` is never below `initial_score`.
    pub fn run(&self, schedule: &mut SignalSchedule) -> SimResult<SearchOutcome> {
        let deadline = self.deadline();
        let outcome = self.climb(schedule, deadline)?;
        info!(
            initial = outcome.initial_score,
            best = outcome.best_score,
            bound = outcome.upper_bound,
            iterations = outcome.iterations,
            "local search finished"
        );
        Ok(outcome)
    }

    /// Climb from `restarts` starting orders and keep the best result.
    ///
    /// Start 0 is `schedule` itself; start `k > 0` shuffles every plan with
    /// a child RNG of `seed`.  On a score tie the lowest start wins, so the
    /// result does not depend on the `parallel` feature.
    pub fn run_multi_start(&self, schedule: &mut SignalSchedule) -> SimResult<SearchOutcome> {
        let deadline = self.deadline();
        let baseline = self.sim.evaluate(schedule, &mut NoopObserver)?;

        let mut root = SimRng::new(self.config.seed);
        let starts: Vec<SignalSchedule> = (0..self.config.restarts)
            .map(|k| {
                let mut start = schedule.clone();
                if k > 0 {
                    let mut rng = root.child(k as u64);
                    for i in 0..start.intersection_count() {
                        start.plan_mut(IntersectionId(i as u32)).shuffle_order(&mut rng);
                    }
                }
                start
            })
            .collect();

        let climb = |mut start: SignalSchedule| -> SimResult<(SearchOutcome, SignalSchedule)> {
            let outcome = self.climb(&mut start, deadline)?;
            Ok((outcome, start))
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<SimResult<(SearchOutcome, SignalSchedule)>> =
            starts.into_iter().map(climb).collect();

        #[cfg(feature = "parallel")]
        let results: Vec<SimResult<(SearchOutcome, SignalSchedule)>> = {
            use rayon::prelude::*;
            starts.into_par_iter().map(climb).collect()
        };

        let mut iterations = 0;
        let mut best: Option<(SearchOutcome, SignalSchedule)> = None;
        for (k, result) in results.into_iter().enumerate() {
            let (outcome, start) = result?;
            iterations += outcome.iterations;
            debug!(start = k, score = outcome.best_score, "multi-start candidate");
            if best.as_ref().is_none_or(|(b, _)| outcome.best_score > b.best_score) {
                best = Some((outcome, start));
            }
        }

        let Some((mut outcome, winner)) = best else {
            return Err(SimError::Config("restarts must be at least 1".into()));
        };
        outcome.initial_score = baseline;
        outcome.iterations = iterations;
        if outcome.best_score > baseline {
            *schedule = winner;
        } else {
            outcome.best_score = baseline;
        }
        info!(
            initial = outcome.initial_score,
            best = outcome.best_score,
            bound = outcome.upper_bound,
            restarts = self.config.restarts,
            "multi-start search finished"
        );
        Ok(outcome)
    }

    fn deadline(&self) -> Option<Instant> {
        self.config.time_budget.map(|b| Instant::now() + b)
    }

    fn climb(&self, schedule: &mut SignalSchedule, deadline: Option<Instant>) -> SimResult<SearchOutcome> {
        let initial = self.sim.evaluate(schedule, &mut NoopObserver)?;
        let bound = self.sim.upper_bound().score;
        let mut outcome = SearchOutcome {
            initial_score: initial,
            best_score:    initial,
            upper_bound:   bound,
            ..SearchOutcome::default()
        };

        while outcome.iterations < self.config.max_iterations {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                warn!(iterations = outcome.iterations, "time budget exhausted");
                break;
            }
            if outcome.best_score >= bound {
                debug!("reached the upper bound");
                break;
            }
            outcome.iterations += 1;

            let mut candidate = schedule.clone();
            let mut stats = RunStats::new(&self.sim.config);
            let optimistic = self.sim.optimize(&mut candidate, &mut stats)?;
            if stats.swaps == 0 {
                debug!(iteration = outcome.iterations, "no swap possible");
                break;
            }
            let score = self.sim.evaluate(&candidate, &mut NoopObserver)?;
            debug!(iteration = outcome.iterations, optimistic, score, swaps = stats.swaps);

            if score <= outcome.best_score {
                break;
            }
            *schedule = candidate;
            outcome.best_score = score;
            outcome.accepted += 1;
            outcome.swaps += stats.swaps;
            info!(iteration = outcome.iterations, score, "accepted improved schedule");
        }
        Ok(outcome)
    }
}
