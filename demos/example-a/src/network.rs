//! The four-intersection sample city and a hand-written signal plan.

use anyhow::Result;

use ts_core::IntersectionId;
use ts_network::{Car, RoadNetwork, RoadNetworkBuilder};
use ts_schedule::SignalSchedule;

pub const DURATION: u64 = 6;
pub const BONUS:    u64 = 1000;

/// `(name, from, to, length)`
const STREETS: &[(&str, u32, u32, u32)] = &[
    ("rue-de-londres",  2, 0, 1),
    ("rue-d-amsterdam", 0, 1, 1),
    ("rue-d-athenes",   3, 1, 1),
    ("rue-de-rome",     2, 3, 2),
    ("rue-de-moscou",   1, 2, 3),
];

const CARS: &[&[&str]] = &[
    &["rue-de-londres", "rue-d-amsterdam", "rue-de-moscou", "rue-de-rome"],
    &["rue-d-athenes", "rue-de-moscou", "rue-de-londres"],
];

/// `(street, green ticks)` in rotation order, grouped by the street's end.
const PLAN: &[(&str, u32)] = &[
    ("rue-d-athenes",   2),
    ("rue-d-amsterdam", 1),
    ("rue-de-londres",  2),
    ("rue-de-moscou",   1),
];

pub fn build_network() -> Result<(RoadNetwork, Vec<Car>)> {
    let mut b = RoadNetworkBuilder::with_capacity(4, STREETS.len(), CARS.len());
    for &(name, from, to, length) in STREETS {
        b.add_street(name, IntersectionId(from), IntersectionId(to), length)?;
    }
    for &route in CARS {
        b.add_car(route)?;
    }
    Ok(b.build())
}

pub fn hand_written_schedule(network: &RoadNetwork) -> Result<SignalSchedule> {
    let mut schedule = SignalSchedule::for_network(network);
    for &(street, duration) in PLAN {
        schedule.add_phase_by_name(network, street, duration)?;
    }
    Ok(schedule)
}
