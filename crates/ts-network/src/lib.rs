//! `ts-network`: road network, car routes, and street-usage counters.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Street`, `Intersection`, `RoadNetwork`, `RoadNetworkBuilder` |
//! | [`car`]     | `Car`, one vehicle's ordered street route                  |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Lifecycle
//!
//! Streets and cars are added to a [`RoadNetworkBuilder`], which validates
//! every reference as it goes.  `build()` wires up each intersection's
//! incoming/outgoing lists and runs the usage pass that fills in
//! `Street::incoming_usage` and `Street::cars_on_start`.  After that the
//! network is read-only apart from [`RoadNetwork::prune_unused_incoming`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod car;
pub mod error;
pub mod network;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use error::{NetworkError, NetworkResult};
pub use network::{Intersection, RoadNetwork, RoadNetworkBuilder, Street};
