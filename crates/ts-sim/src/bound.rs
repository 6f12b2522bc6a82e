//! Contention-free upper bound on the score of any schedule.

use ts_core::{Score, SimConfig};
use ts_network::{Car, RoadNetwork};

/// The score every car would earn if it never waited at a light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpperBound {
    pub score: Score,
    /// Cars whose route fits inside the horizon.
    pub reachable_cars: usize,
    /// Cars that are late even with every light green.  No schedule can
    /// score them.
    pub unreachable_cars: usize,
}

impl UpperBound {
    /// Points a schedule scoring `score` leaves on the table.
    pub fn gap(&self, score: Score) -> Score {
        self.score.saturating_sub(score)
    }
}

/// Sum over cars of the score for finishing at the minimum completion tick.
pub fn upper_bound(network: &RoadNetwork, cars: &[Car], config: &SimConfig) -> UpperBound {
    cars.iter().fold(UpperBound::default(), |mut acc, car| {
        let finish = car.min_completion_tick(network);
        if finish > config.end_tick() {
            acc.unreachable_cars += 1;
        } else {
            acc.reachable_cars += 1;
            acc.score = acc.score.saturating_add(config.score_for_arrival(finish));
        }
        acc
    })
}
