//! The `Sim` struct and its tick loop.

use tracing::debug;

use ts_core::{CarId, IntersectionId, Score, SimClock, SimConfig, Tick};
use ts_network::{Car, RoadNetwork};
use ts_schedule::SignalSchedule;

use crate::policy::{FixedOrder, GreedySwap, PhasePolicy};
use crate::state::{CarState, SignalState};
use crate::{SimError, SimObserver, SimResult, UpperBound};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// A road network, its cars, and the scoring rules.
///
/// `Sim` is immutable and holds no per-run state, so one instance can score
/// any number of schedules, from any number of threads.
///
/// Every run walks ticks `0..=config.duration`:
///
/// 1. **Signals**: each intersection whose active phase has run out moves to
///    the next phase in its rotation.  At tick 0 every non-empty plan starts
///    on its first phase.
/// 2. **Cars**: unfinished cars whose arrival tick is ≤ now are visited in
///    ascending `(arrival, CarId)` order.  A car crosses when its street is
///    green and no other car has crossed that intersection this tick.  After
///    crossing it drives the full length of its next street; reaching the end
///    of the last street finishes it.
///
/// A car starts at the beginning of its first street and drives all of it,
/// so a car that never waits finishes at the sum of its street lengths.
#[derive(Clone, Copy, Debug)]
pub struct Sim<'a> {
    pub config:  SimConfig,
    pub network: &'a RoadNetwork,
    pub cars:    &'a [Car],
}

impl<'a> Sim<'a> {
    /// Check every car route against `network` and wrap them up.
    pub fn new(config: SimConfig, network: &'a RoadNetwork, cars: &'a [Car]) -> SimResult<Self> {
        if u32::try_from(cars.len()).is_err() {
            return Err(SimError::Config(format!("{} cars exceed the id range", cars.len())));
        }
        for (i, car) in cars.iter().enumerate() {
            network.check_car(CarId(i as u32), car)?;
        }
        Ok(Self { config, network, cars })
    }

    /// Score `schedule` exactly as written.  The schedule is not modified.
    pub fn evaluate<O: SimObserver>(
        &self,
        schedule: &SignalSchedule,
        observer: &mut O,
    ) -> SimResult<Score> {
        schedule.validate(self.network)?;
        let score = self.run(&mut FixedOrder { schedule }, observer);
        debug!(score, "evaluated schedule");
        Ok(score)
    }

    /// Score `schedule` while greedily reordering its phases in place.
    ///
    /// When a car waits on a red street and no car has crossed that
    /// intersection this tick, the active phase is swapped with that street's
    /// phase if both have equal duration.  Durations and phase membership
    /// never change, only order.
    ///
    /// The returned score is what this run achieved while swapping.  It can
    /// differ from [`evaluate`](Self::evaluate) on the resulting schedule,
    /// because swaps made late in the run change earlier ticks on a replay.
    pub fn optimize<O: SimObserver>(
        &self,
        schedule: &mut SignalSchedule,
        observer: &mut O,
    ) -> SimResult<Score> {
        schedule.validate(self.network)?;
        let mut policy = GreedySwap::new(schedule);
        let score = self.run(&mut policy, observer);
        debug!(score, swaps = policy.swaps, "optimizer pass");
        Ok(score)
    }

    /// Best score any schedule could reach: every car crosses without waiting.
    pub fn upper_bound(&self) -> UpperBound {
        crate::upper_bound(self.network, self.cars, &self.config)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────────

    fn run<P: PhasePolicy, O: SimObserver>(&self, policy: &mut P, observer: &mut O) -> Score {
        let end = self.config.end_tick();
        let mut score: Score = 0;
        let mut signals = vec![SignalState::new(); self.network.intersection_count()];

        // Single-street cars finish on arrival and never reach a signal.
        let mut queue: Vec<CarState> = Vec::with_capacity(self.cars.len());
        for (i, car) in self.cars.iter().enumerate() {
            let id = CarId(i as u32);
            let arrival = Tick::ZERO + u64::from(self.network.street(car.street_at(0)).length);
            if car.is_last(0) {
                score = score.saturating_add(self.finish(id, arrival, observer));
            } else {
                queue.push(CarState { car: id, route_pos: 0, arrival, finished: false });
            }
        }
        queue.sort_unstable_by_key(CarState::queue_key);

        let mut clock = SimClock::new();
        let mut last = Tick::ZERO;
        while !clock.is_past(end) && !queue.is_empty() {
            let now = clock.current_tick;
            last = now;
            observer.on_tick_start(now);

            for (i, signal) in signals.iter_mut().enumerate() {
                signal.advance(now, policy.schedule().plan(IntersectionId(i as u32)));
            }

            let mut moved = false;
            for state in queue.iter_mut() {
                if state.arrival > now {
                    break;
                }
                let car = &self.cars[state.car.index()];
                let street = car.street_at(state.route_pos);
                let at = self.network.street(street).to;
                let signal = &mut signals[at.index()];

                if signal.used(now) {
                    observer.on_blocked(now, at, street, state.car);
                    continue;
                }
                let green = signal.green(policy.schedule().plan(at));
                let crosses = match green {
                    Some((_, green)) if green == street => true,
                    Some((slot, _)) => match policy.rescue(at, slot, street) {
                        Some(other) => {
                            observer.on_phase_swap(now, at, slot, other);
                            true
                        }
                        None => false,
                    },
                    None => false,
                };
                if !crosses {
                    observer.on_blocked(now, at, street, state.car);
                    continue;
                }

                signal.used_at = Some(now);
                observer.on_crossing(now, at, street, state.car);
                moved = true;

                state.route_pos += 1;
                let next = car.street_at(state.route_pos);
                state.arrival = now + u64::from(self.network.street(next).length);
                if car.is_last(state.route_pos) {
                    state.finished = true;
                    score = score.saturating_add(self.finish(state.car, state.arrival, observer));
                }
            }

            if moved {
                queue.retain(|s| !s.finished);
                queue.sort_unstable_by_key(CarState::queue_key);
            }
            if now == end {
                break;
            }
            clock.advance();
        }

        observer.on_sim_end(last, score);
        score
    }

    fn finish<O: SimObserver>(&self, car: CarId, arrival: Tick, observer: &mut O) -> Score {
        let points = self.config.score_for_arrival(arrival);
        observer.on_car_finished(car, arrival, points);
        points
    }
}
