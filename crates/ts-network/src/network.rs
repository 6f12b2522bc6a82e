//! Road network representation and builder.
//!
//! # Data layout
//!
//! Streets and intersections are stored in dense `Vec`s indexed by
//! `StreetId` / `IntersectionId`.  Each intersection keeps two id lists:
//!
//! ```text
//! incoming = streets whose `to` is this intersection   (candidates for a green phase)
//! outgoing = streets whose `from` is this intersection
//! ```
//!
//! Both lists are in ascending `StreetId` order.  A name index maps street
//! names to ids for collaborators that only know names.
//!
//! # Derived counters
//!
//! `Street::incoming_usage` and `Street::cars_on_start` are never edited
//! directly.  [`RoadNetwork::recompute_usage`] derives both from the full car
//! list in one pass; the builder calls it once in `build()`.

use rustc_hash::FxHashMap;

use ts_core::{CarId, IntersectionId, StreetId};

use crate::{Car, NetworkError, NetworkResult};

// ── Street ────────────────────────────────────────────────────────────────────

/// A directed one-way street between two intersections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    /// Unique name.
    pub name: String,

    /// Intersection at the start of the street.
    pub from: IntersectionId,

    /// Intersection at the end of the street; the one whose light governs it.
    pub to: IntersectionId,

    /// Ticks needed to drive from one end to the other (≥ 1).
    pub length: u32,

    /// How many times this street appears as a non-final route segment,
    /// i.e. how many crossings of `to` it has to serve.
    pub incoming_usage: u32,

    /// How many cars begin their route on this street.
    pub cars_on_start: u32,
}

// ── Intersection ──────────────────────────────────────────────────────────────

/// A node of the network with its incoming and outgoing streets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub incoming: Vec<StreetId>,
    pub outgoing: Vec<StreetId>,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// The static road graph.
///
/// All fields except the name index are `pub` for direct indexed access on
/// hot paths.  Do not construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    /// Streets indexed by `StreetId`.
    pub streets: Vec<Street>,

    /// Intersections indexed by `IntersectionId`.
    pub intersections: Vec<Intersection>,

    by_name: FxHashMap<String, StreetId>,
}

impl RoadNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn street(&self, id: StreetId) -> &Street {
        &self.streets[id.index()]
    }

    #[inline]
    pub fn intersection(&self, id: IntersectionId) -> &Intersection {
        &self.intersections[id.index()]
    }

    /// Resolve a street name to its id.
    pub fn street_id(&self, name: &str) -> Option<StreetId> {
        self.by_name.get(name).copied()
    }

    /// Like [`street_id`](Self::street_id) but reports an unknown name as an
    /// error.
    pub fn require_street(&self, name: &str) -> NetworkResult<StreetId> {
        self.street_id(name)
            .ok_or_else(|| NetworkError::UnknownStreet(name.to_owned()))
    }

    /// `true` if `id` names a street of this network.
    #[inline]
    pub fn contains_street(&self, id: StreetId) -> bool {
        id.index() < self.streets.len()
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check that `car` references only streets of this network and that its
    /// route is connected.
    pub fn check_car(&self, id: CarId, car: &Car) -> NetworkResult<()> {
        check_route(&self.streets, id, &car.route)
    }

    // ── Derived counters ──────────────────────────────────────────────────

    /// Recompute `incoming_usage` and `cars_on_start` for every street from
    /// the complete car list.
    ///
    /// Call this whenever the car set changes.  Every car is checked first;
    /// on error the counters are left untouched.  Counters saturate at
    /// `u32::MAX`.
    pub fn recompute_usage(&mut self, cars: &[Car]) -> NetworkResult<()> {
        for (i, car) in cars.iter().enumerate() {
            let id = CarId::try_from(i).map_err(|_| NetworkError::Capacity("cars"))?;
            check_route(&self.streets, id, &car.route)?;
        }
        self.count_usage(cars);
        Ok(())
    }

    /// Counter pass over routes already known to be valid.
    fn count_usage(&mut self, cars: &[Car]) {
        for street in &mut self.streets {
            street.incoming_usage = 0;
            street.cars_on_start = 0;
        }
        for car in cars {
            if let Some(&first) = car.route.first() {
                let s = &mut self.streets[first.index()];
                s.cars_on_start = s.cars_on_start.saturating_add(1);
            }
            for &through in car.through_streets() {
                let s = &mut self.streets[through.index()];
                s.incoming_usage = s.incoming_usage.saturating_add(1);
            }
        }
    }

    /// Drop incoming streets with `incoming_usage == 0` from every
    /// intersection's incoming list.
    ///
    /// No car ever needs a green light on such a street, so callers deciding
    /// which intersections need phases at all can ignore them.  The streets
    /// themselves stay in the network.  Returns the number of entries removed.
    pub fn prune_unused_incoming(&mut self) -> usize {
        let streets = &self.streets;
        let mut removed = 0;
        for intersection in &mut self.intersections {
            let before = intersection.incoming.len();
            intersection
                .incoming
                .retain(|&s| streets[s.index()].incoming_usage > 0);
            removed += before - intersection.incoming.len();
        }
        removed
    }

    /// Intersections with at least one incoming street that carries traffic.
    pub fn busy_intersections(&self) -> impl Iterator<Item = IntersectionId> + '_ {
        self.intersections
            .iter()
            .enumerate()
            .filter(|(_, i)| {
                i.incoming
                    .iter()
                    .any(|&s| self.streets[s.index()].incoming_usage > 0)
            })
            .map(|(idx, _)| IntersectionId(idx as u32))
    }
}

/// Shared route validation for the builder and for cars checked against a
/// finished network.
fn check_route(streets: &[Street], id: CarId, route: &[StreetId]) -> NetworkResult<()> {
    if route.is_empty() {
        return Err(NetworkError::EmptyRoute(id));
    }
    if let Some(&bad) = route.iter().find(|s| s.index() >= streets.len()) {
        return Err(NetworkError::StreetNotFound(bad));
    }
    for pair in route.windows(2) {
        let (a, b) = (&streets[pair[0].index()], &streets[pair[1].index()]);
        if a.to != b.from {
            return Err(NetworkError::DisconnectedRoute {
                car:  id,
                from: a.name.clone(),
                to:   b.name.clone(),
            });
        }
    }
    Ok(())
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] and its cars incrementally, then call
/// [`build`](Self::build).
///
/// Every `add_*` call validates its input immediately, so a successful
/// `build()` always yields an internally consistent model.
///
/// # Example
///
/// ```
/// use ts_core::IntersectionId;
/// use ts_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new(2);
/// b.add_street("in", IntersectionId(0), IntersectionId(1), 2).unwrap();
/// b.add_street("out", IntersectionId(1), IntersectionId(0), 3).unwrap();
/// b.add_car(&["in", "out"]).unwrap();
/// let (net, cars) = b.build();
/// assert_eq!(net.street_count(), 2);
/// assert_eq!(cars.len(), 1);
/// assert_eq!(net.street(net.street_id("in").unwrap()).incoming_usage, 1);
/// ```
pub struct RoadNetworkBuilder {
    intersection_count: usize,
    streets:            Vec<Street>,
    by_name:            FxHashMap<String, StreetId>,
    cars:               Vec<Car>,
}

impl RoadNetworkBuilder {
    /// Start a network with `intersection_count` intersections, ids
    /// `0..intersection_count`.
    pub fn new(intersection_count: usize) -> Self {
        Self {
            intersection_count,
            streets: Vec::new(),
            by_name: FxHashMap::default(),
            cars:    Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of streets and cars.
    pub fn with_capacity(intersection_count: usize, streets: usize, cars: usize) -> Self {
        Self {
            intersection_count,
            streets: Vec::with_capacity(streets),
            by_name: FxHashMap::with_capacity_and_hasher(streets, Default::default()),
            cars:    Vec::with_capacity(cars),
        }
    }

    /// Add a directed street and return its id (sequential from 0).
    pub fn add_street(
        &mut self,
        name:   impl Into<String>,
        from:   IntersectionId,
        to:     IntersectionId,
        length: u32,
    ) -> NetworkResult<StreetId> {
        let name = name.into();
        for end in [from, to] {
            if end.index() >= self.intersection_count {
                return Err(NetworkError::IntersectionOutOfRange {
                    intersection: end,
                    count:        self.intersection_count,
                });
            }
        }
        if length == 0 {
            return Err(NetworkError::ZeroLength(name));
        }
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateStreet(name));
        }
        let id = StreetId::try_from(self.streets.len())
            .map_err(|_| NetworkError::Capacity("streets"))?;

        self.by_name.insert(name.clone(), id);
        self.streets.push(Street {
            name,
            from,
            to,
            length,
            incoming_usage: 0,
            cars_on_start:  0,
        });
        Ok(id)
    }

    /// Add a car whose route is given by street names.
    pub fn add_car<S: AsRef<str>>(&mut self, route: &[S]) -> NetworkResult<CarId> {
        let ids = route
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.by_name
                    .get(name)
                    .copied()
                    .ok_or_else(|| NetworkError::UnknownStreet(name.to_owned()))
            })
            .collect::<NetworkResult<Vec<_>>>()?;
        self.add_car_route(ids)
    }

    /// Add a car whose route is given by street ids.
    pub fn add_car_route(&mut self, route: Vec<StreetId>) -> NetworkResult<CarId> {
        let id = CarId::try_from(self.cars.len()).map_err(|_| NetworkError::Capacity("cars"))?;
        check_route(&self.streets, id, &route)?;

        self.cars.push(Car { route });
        Ok(id)
    }

    pub fn street_count(&self) -> usize { self.streets.len() }
    pub fn car_count(&self) -> usize { self.cars.len() }

    /// Consume the builder and produce the network plus the car list
    /// (indexed by `CarId`).
    ///
    /// Time complexity: O(S + total route length).
    pub fn build(self) -> (RoadNetwork, Vec<Car>) {
        let mut intersections = vec![Intersection::default(); self.intersection_count];
        for (i, street) in self.streets.iter().enumerate() {
            let id = StreetId(i as u32);
            intersections[street.to.index()].incoming.push(id);
            intersections[street.from.index()].outgoing.push(id);
        }

        let mut network = RoadNetwork {
            streets: self.streets,
            intersections,
            by_name: self.by_name,
        };
        // Routes were checked as they were added.
        network.count_usage(&self.cars);
        (network, self.cars)
    }
}
