//! Simulation observer trait for diagnostics and statistics.

use ts_core::{CarId, IntersectionId, Score, StreetId, Tick};

/// Callbacks invoked by [`Sim::evaluate`][crate::Sim::evaluate] and
/// [`Sim::optimize`][crate::Sim::optimize] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A pair `(A, B)` of observers is itself an
/// observer that forwards every call to both, in order.
///
/// # Example: count blocked events
///
/// ```rust,ignore
/// struct BlockCounter(u64);
///
/// impl SimObserver for BlockCounter {
///     fn on_blocked(&mut self, _: Tick, _: IntersectionId, _: StreetId, _: CarId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each simulated tick, before signals advance.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// `car` waited at the end of `street` and could not cross
    /// `intersection` this tick.
    fn on_blocked(
        &mut self,
        _tick:         Tick,
        _intersection: IntersectionId,
        _street:       StreetId,
        _car:          CarId,
    ) {}

    /// `car` left `street` through `intersection`.
    fn on_crossing(
        &mut self,
        _tick:         Tick,
        _intersection: IntersectionId,
        _street:       StreetId,
        _car:          CarId,
    ) {}

    /// Optimizer only: the phases in `active_slot` and `other_slot` of
    /// `intersection` were swapped so a waiting car could cross.
    fn on_phase_swap(
        &mut self,
        _tick:         Tick,
        _intersection: IntersectionId,
        _active_slot:  usize,
        _other_slot:   usize,
    ) {}

    /// `car` reached the end of its route at `arrival` and earned `points`
    /// (zero when late).
    fn on_car_finished(&mut self, _car: CarId, _arrival: Tick, _points: Score) {}

    /// Called once after the last simulated tick with the total score.
    fn on_sim_end(&mut self, _final_tick: Tick, _score: Score) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_blocked(&mut self, tick: Tick, intersection: IntersectionId, street: StreetId, car: CarId) {
        self.0.on_blocked(tick, intersection, street, car);
        self.1.on_blocked(tick, intersection, street, car);
    }

    fn on_crossing(&mut self, tick: Tick, intersection: IntersectionId, street: StreetId, car: CarId) {
        self.0.on_crossing(tick, intersection, street, car);
        self.1.on_crossing(tick, intersection, street, car);
    }

    fn on_phase_swap(&mut self, tick: Tick, intersection: IntersectionId, active_slot: usize, other_slot: usize) {
        self.0.on_phase_swap(tick, intersection, active_slot, other_slot);
        self.1.on_phase_swap(tick, intersection, active_slot, other_slot);
    }

    fn on_car_finished(&mut self, car: CarId, arrival: Tick, points: Score) {
        self.0.on_car_finished(car, arrival, points);
        self.1.on_car_finished(car, arrival, points);
    }

    fn on_sim_end(&mut self, final_tick: Tick, score: Score) {
        self.0.on_sim_end(final_tick, score);
        self.1.on_sim_end(final_tick, score);
    }
}
