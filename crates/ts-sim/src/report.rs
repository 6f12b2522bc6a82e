//! Observers that collect diagnostics from a run.

use rustc_hash::FxHashMap;

use ts_core::{CarId, IntersectionId, Score, SimConfig, StreetId, Tick};
use ts_network::RoadNetwork;

use crate::SimObserver;

// ── BlockedTrafficReport ──────────────────────────────────────────────────────

/// Counts blocked car-ticks per (intersection, incoming street).
///
/// A car waiting three ticks at one light counts three times.  Use it to find
/// the intersections where a schedule wastes the most time.
#[derive(Clone, Debug, Default)]
pub struct BlockedTrafficReport {
    per_intersection: Vec<FxHashMap<StreetId, u64>>,
}

/// One intersection's entry in [`BlockedTrafficReport::by_name`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionBlocking {
    pub intersection: IntersectionId,
    pub total:        u64,
    /// `(street name, blocked car-ticks)`, most blocked first.
    pub streets:      Vec<(String, u64)>,
}

impl BlockedTrafficReport {
    pub fn new(intersection_count: usize) -> Self {
        Self { per_intersection: vec![FxHashMap::default(); intersection_count] }
    }

    /// Blocked car-ticks on `street` at `intersection`.
    pub fn blocked(&self, intersection: IntersectionId, street: StreetId) -> u64 {
        self.per_intersection
            .get(intersection.index())
            .and_then(|m| m.get(&street).copied())
            .unwrap_or(0)
    }

    /// Blocked car-ticks at `intersection`, over all its streets.
    pub fn intersection_total(&self, intersection: IntersectionId) -> u64 {
        self.per_intersection
            .get(intersection.index())
            .map_or(0, |m| m.values().sum())
    }

    pub fn total(&self) -> u64 {
        self.per_intersection.iter().flat_map(|m| m.values()).sum()
    }

    /// Per-intersection breakdown with street names resolved against
    /// `network`, skipping intersections where nothing waited.
    ///
    /// Intersections are sorted by total descending, then by id; streets by
    /// count descending, then by name.
    pub fn by_name(&self, network: &RoadNetwork) -> Vec<IntersectionBlocking> {
        let mut out: Vec<IntersectionBlocking> = self
            .per_intersection
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_empty())
            .map(|(i, m)| {
                let mut streets: Vec<(String, u64)> = m
                    .iter()
                    .map(|(&s, &n)| (network.street(s).name.clone(), n))
                    .collect();
                streets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                IntersectionBlocking {
                    intersection: IntersectionId(i as u32),
                    total:        m.values().sum(),
                    streets,
                }
            })
            .collect();
        out.sort_by(|a, b| b.total.cmp(&a.total).then(a.intersection.cmp(&b.intersection)));
        out
    }
}

impl SimObserver for BlockedTrafficReport {
    fn on_blocked(&mut self, _tick: Tick, intersection: IntersectionId, street: StreetId, _car: CarId) {
        let i = intersection.index();
        if i >= self.per_intersection.len() {
            self.per_intersection.resize_with(i + 1, FxHashMap::default);
        }
        *self.per_intersection[i].entry(street).or_insert(0) += 1;
    }
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Aggregate counters for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    horizon:   Tick,
    pub ticks:     u64,
    pub crossings: u64,
    pub blocked:   u64,
    pub swaps:     u64,
    /// Cars that completed their route inside the horizon.
    pub finished:  u64,
    /// Cars that completed their route after the horizon.
    pub late:      u64,
    pub score:     Score,
}

impl RunStats {
    /// Zeroed counters; `config` decides which finishes count as late.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            horizon:   config.end_tick(),
            ticks:     0,
            crossings: 0,
            blocked:   0,
            swaps:     0,
            finished:  0,
            late:      0,
            score:     0,
        }
    }
}

impl SimObserver for RunStats {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.ticks += 1;
    }

    fn on_blocked(&mut self, _: Tick, _: IntersectionId, _: StreetId, _: CarId) {
        self.blocked += 1;
    }

    fn on_crossing(&mut self, _: Tick, _: IntersectionId, _: StreetId, _: CarId) {
        self.crossings += 1;
    }

    fn on_phase_swap(&mut self, _: Tick, _: IntersectionId, _: usize, _: usize) {
        self.swaps += 1;
    }

    fn on_car_finished(&mut self, _car: CarId, arrival: Tick, _points: Score) {
        if arrival <= self.horizon {
            self.finished += 1;
        } else {
            self.late += 1;
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, score: Score) {
        self.score = score;
    }
}
