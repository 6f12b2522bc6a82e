//! Unit tests for ts-network.
//!
//! All tests use hand-crafted networks; nothing is read from disk.

#[cfg(test)]
mod helpers {
    use ts_core::IntersectionId;

    use crate::{Car, RoadNetwork, RoadNetworkBuilder};

    /// Four intersections, five streets:
    ///
    /// ```text
    ///   rue-de-londres   2 → 0  len 1
    ///   rue-d-amsterdam  0 → 1  len 1
    ///   rue-d-athenes    3 → 1  len 1
    ///   rue-de-rome      2 → 3  len 2
    ///   rue-de-moscou    1 → 2  len 3
    /// ```
    ///
    /// Car 0: londres → amsterdam → moscou → rome
    /// Car 1: athenes → moscou → londres
    pub fn sample_network() -> (RoadNetwork, Vec<Car>) {
        let i = IntersectionId;
        let mut b = RoadNetworkBuilder::new(4);
        b.add_street("rue-de-londres", i(2), i(0), 1).unwrap();
        b.add_street("rue-d-amsterdam", i(0), i(1), 1).unwrap();
        b.add_street("rue-d-athenes", i(3), i(1), 1).unwrap();
        b.add_street("rue-de-rome", i(2), i(3), 2).unwrap();
        b.add_street("rue-de-moscou", i(1), i(2), 3).unwrap();
        b.add_car(&["rue-de-londres", "rue-d-amsterdam", "rue-de-moscou", "rue-de-rome"])
            .unwrap();
        b.add_car(&["rue-d-athenes", "rue-de-moscou", "rue-de-londres"]).unwrap();
        b.build()
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ts_core::{IntersectionId, StreetId};

    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let (net, cars) = RoadNetworkBuilder::new(0).build();
        assert_eq!(net.intersection_count(), 0);
        assert_eq!(net.street_count(), 0);
        assert!(cars.is_empty());
    }

    #[test]
    fn street_ids_are_sequential() {
        let mut b = RoadNetworkBuilder::new(2);
        let a = b.add_street("a", IntersectionId(0), IntersectionId(1), 1).unwrap();
        let c = b.add_street("c", IntersectionId(1), IntersectionId(0), 1).unwrap();
        assert_eq!(a, StreetId(0));
        assert_eq!(c, StreetId(1));
    }

    #[test]
    fn incoming_and_outgoing_lists() {
        let (net, _) = super::helpers::sample_network();
        let i1 = net.intersection(IntersectionId(1));
        let amsterdam = net.street_id("rue-d-amsterdam").unwrap();
        let athenes = net.street_id("rue-d-athenes").unwrap();
        let moscou = net.street_id("rue-de-moscou").unwrap();
        assert_eq!(i1.incoming, vec![amsterdam, athenes]);
        assert_eq!(i1.outgoing, vec![moscou]);

        // Every incoming street ends at its intersection.
        for (idx, inter) in net.intersections.iter().enumerate() {
            for &s in &inter.incoming {
                assert_eq!(net.street(s).to, IntersectionId(idx as u32));
            }
            for &s in &inter.outgoing {
                assert_eq!(net.street(s).from, IntersectionId(idx as u32));
            }
        }
    }

    #[test]
    fn name_lookup() {
        let (net, _) = super::helpers::sample_network();
        assert_eq!(net.street_id("rue-de-rome"), Some(StreetId(3)));
        assert!(net.street_id("rue-de-nulle-part").is_none());
        assert!(net.require_street("rue-de-nulle-part").is_err());
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use ts_core::{CarId, IntersectionId, StreetId};

    use crate::{Car, NetworkError, RoadNetworkBuilder};

    fn two_node_builder() -> RoadNetworkBuilder {
        let mut b = RoadNetworkBuilder::new(2);
        b.add_street("in", IntersectionId(0), IntersectionId(1), 2).unwrap();
        b.add_street("out", IntersectionId(1), IntersectionId(0), 3).unwrap();
        b
    }

    #[test]
    fn rejects_out_of_range_intersection() {
        let mut b = RoadNetworkBuilder::new(2);
        let err = b
            .add_street("x", IntersectionId(0), IntersectionId(2), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            NetworkError::IntersectionOutOfRange { intersection: IntersectionId(2), count: 2 }
        ));
    }

    #[test]
    fn rejects_zero_length() {
        let mut b = RoadNetworkBuilder::new(2);
        let err = b
            .add_street("x", IntersectionId(0), IntersectionId(1), 0)
            .unwrap_err();
        assert!(matches!(err, NetworkError::ZeroLength(name) if name == "x"));
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut b = two_node_builder();
        let err = b
            .add_street("in", IntersectionId(1), IntersectionId(0), 1)
            .unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStreet(_)));
        assert_eq!(b.street_count(), 2);
    }

    #[test]
    fn rejects_unknown_street_in_route() {
        let mut b = two_node_builder();
        let err = b.add_car(&["in", "sideways"]).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStreet(name) if name == "sideways"));
        assert_eq!(b.car_count(), 0);
    }

    #[test]
    fn rejects_unknown_street_id() {
        let mut b = two_node_builder();
        let err = b.add_car_route(vec![StreetId(9)]).unwrap_err();
        assert!(matches!(err, NetworkError::StreetNotFound(StreetId(9))));
    }

    #[test]
    fn rejects_empty_route() {
        let mut b = two_node_builder();
        let empty: [&str; 0] = [];
        let err = b.add_car(&empty).unwrap_err();
        assert!(matches!(err, NetworkError::EmptyRoute(CarId(0))));
    }

    #[test]
    fn rejects_disconnected_route() {
        let mut b = two_node_builder();
        // "in" ends at 1, so "in" cannot follow "in".
        let err = b.add_car(&["in", "in"]).unwrap_err();
        assert!(matches!(err, NetworkError::DisconnectedRoute { car: CarId(0), .. }));
    }

    #[test]
    fn check_car_against_built_network() {
        let mut b = two_node_builder();
        b.add_car(&["in", "out", "in"]).unwrap();
        let (net, cars) = b.build();
        assert!(net.check_car(CarId(0), &cars[0]).is_ok());

        let stray = Car { route: vec![StreetId(0), StreetId(7)] };
        assert!(matches!(
            net.check_car(CarId(1), &stray),
            Err(NetworkError::StreetNotFound(StreetId(7)))
        ));
    }
}

// ── Cars ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cars {
    use ts_core::Tick;

    #[test]
    fn through_streets_exclude_last() {
        let (net, cars) = super::helpers::sample_network();
        let names: Vec<&str> = cars[1]
            .through_streets()
            .iter()
            .map(|&s| net.street(s).name.as_str())
            .collect();
        assert_eq!(names, vec!["rue-d-athenes", "rue-de-moscou"]);
        assert!(cars[1].is_last(2));
        assert!(!cars[1].is_last(1));
    }

    #[test]
    fn min_completion_is_sum_of_lengths() {
        let (net, cars) = super::helpers::sample_network();
        // 1 + 1 + 3 + 2
        assert_eq!(cars[0].min_completion_tick(&net), Tick(7));
        // 1 + 3 + 1
        assert_eq!(cars[1].min_completion_tick(&net), Tick(5));
    }
}

// ── Derived counters & pruning ────────────────────────────────────────────────

#[cfg(test)]
mod usage {
    use ts_core::{CarId, IntersectionId, StreetId};

    use crate::{Car, NetworkError, RoadNetworkBuilder};

    #[test]
    fn counters_from_routes() {
        let (net, _) = super::helpers::sample_network();
        let usage = |name: &str| {
            let s = net.street(net.street_id(name).unwrap());
            (s.incoming_usage, s.cars_on_start)
        };
        assert_eq!(usage("rue-de-londres"), (1, 1));
        assert_eq!(usage("rue-d-amsterdam"), (1, 0));
        assert_eq!(usage("rue-d-athenes"), (1, 1));
        assert_eq!(usage("rue-de-moscou"), (2, 0));
        // Only ever a final street.
        assert_eq!(usage("rue-de-rome"), (0, 0));
    }

    #[test]
    fn repeated_street_counts_every_occurrence() {
        let mut b = RoadNetworkBuilder::new(2);
        b.add_street("in", IntersectionId(0), IntersectionId(1), 1).unwrap();
        b.add_street("out", IntersectionId(1), IntersectionId(0), 1).unwrap();
        b.add_car(&["in", "out", "in", "out"]).unwrap();
        let (net, _) = b.build();
        assert_eq!(net.street(net.street_id("in").unwrap()).incoming_usage, 2);
        assert_eq!(net.street(net.street_id("out").unwrap()).incoming_usage, 1);
    }

    #[test]
    fn recompute_replaces_previous_counts() {
        let (mut net, mut cars) = super::helpers::sample_network();
        cars.truncate(1);
        net.recompute_usage(&cars).unwrap();
        let moscou = net.street(net.street_id("rue-de-moscou").unwrap());
        assert_eq!(moscou.incoming_usage, 1);
        let athenes = net.street(net.street_id("rue-d-athenes").unwrap());
        assert_eq!((athenes.incoming_usage, athenes.cars_on_start), (0, 0));

        net.recompute_usage(&Vec::<Car>::new()).unwrap();
        assert!(net.streets.iter().all(|s| s.incoming_usage == 0 && s.cars_on_start == 0));
    }

    #[test]
    fn recompute_rejects_unknown_street() {
        let mut b = RoadNetworkBuilder::new(2);
        b.add_street("only", IntersectionId(0), IntersectionId(1), 1).unwrap();
        b.add_car(&["only"]).unwrap();
        let (mut net, _) = b.build();

        let err = net.recompute_usage(&[Car { route: vec![StreetId(7)] }]).unwrap_err();
        assert!(matches!(err, NetworkError::StreetNotFound(StreetId(7))));
        // Counters from the build are untouched.
        assert_eq!(net.street(StreetId(0)).cars_on_start, 1);
    }

    #[test]
    fn recompute_rejects_disconnected_route() {
        let (mut net, _) = super::helpers::sample_network();
        let rome = net.street_id("rue-de-rome").unwrap();
        let err = net.recompute_usage(&[Car { route: vec![rome, rome] }]).unwrap_err();
        assert!(matches!(err, NetworkError::DisconnectedRoute { car: CarId(0), .. }));
    }

    #[test]
    fn prune_removes_only_unused() {
        let (mut net, _) = super::helpers::sample_network();
        let rome = net.street_id("rue-de-rome").unwrap();
        assert!(net.intersection(IntersectionId(3)).incoming.contains(&rome));

        let removed = net.prune_unused_incoming();
        assert_eq!(removed, 1);
        assert!(net.intersection(IntersectionId(3)).incoming.is_empty());
        // The street itself is still part of the network.
        assert_eq!(net.street_count(), 5);
        assert_eq!(net.intersection(IntersectionId(1)).incoming.len(), 2);

        // Idempotent.
        assert_eq!(net.prune_unused_incoming(), 0);
    }

    #[test]
    fn busy_intersections_skip_idle_ones() {
        let (net, _) = super::helpers::sample_network();
        let busy: Vec<_> = net.busy_intersections().collect();
        assert_eq!(busy, vec![IntersectionId(0), IntersectionId(1), IntersectionId(2)]);
    }
}
