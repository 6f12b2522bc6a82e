//! Car routes.
//!
//! # Timing model
//!
//! A car enters the first street of its route at tick 0 and reaches the end
//! of it `length` ticks later.  Each crossing at tick `t` onto street `s`
//! puts the car at the end of `s` at `t + s.length`.  The route is complete
//! once the car reaches the end of its last street, so with no waiting at
//! all the completion tick is the sum of every street length on the route.

use ts_core::{StreetId, Tick};

use crate::network::RoadNetwork;

/// One vehicle: an ordered, non-empty list of connected streets.
///
/// Construct through [`RoadNetworkBuilder::add_car`][crate::RoadNetworkBuilder::add_car],
/// which checks that every street exists and that consecutive streets meet
/// at an intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Streets to traverse in order.
    pub route: Vec<StreetId>,
}

impl Car {
    /// Number of streets on the route (always ≥ 1 for a built car).
    #[inline]
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// The street at route position `pos`.
    #[inline]
    pub fn street_at(&self, pos: usize) -> StreetId {
        self.route[pos]
    }

    /// `true` if `pos` is the final street of the route.
    #[inline]
    pub fn is_last(&self, pos: usize) -> bool {
        pos + 1 == self.route.len()
    }

    /// Streets the car has to leave through an intersection, i.e. every
    /// street except the last.
    pub fn through_streets(&self) -> &[StreetId] {
        match self.route.split_last() {
            Some((_, through)) => through,
            None => &[],
        }
    }

    /// Earliest possible completion tick: the sum of all street lengths,
    /// reached only if every light is green on arrival.
    pub fn min_completion_tick(&self, network: &RoadNetwork) -> Tick {
        self.route
            .iter()
            .fold(Tick::ZERO, |t, &s| t + u64::from(network.street(s).length))
    }
}
