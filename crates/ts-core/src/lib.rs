//! `ts-core`: foundational types for the traffic-signal optimizer.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and a single required external one (`rand`), plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module   | Contents                                                 |
//! |----------|----------------------------------------------------------|
//! | [`ids`]  | `CarId`, `IntersectionId`, `StreetId`                    |
//! | [`time`] | `Tick`, `SimClock`, `SimConfig`, `Score`                 |
//! | [`rng`]  | `SimRng` (seeded, used for multi-start perturbation)     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CarId, IntersectionId, StreetId};
pub use rng::SimRng;
pub use time::{Score, SimClock, SimConfig, Tick};
