//! `ts-sim`: tick-loop signal simulator and schedule optimizer.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..=config.duration:
//!   ① Signals:  every intersection whose phase has run out advances to the
//!                next phase in its rotation.
//!   ② Cars:     cars due at the end of their street, in ascending
//!                (arrival tick, CarId) order, try to cross:
//!                  intersection already used this tick → blocked
//!                  street not green                    → blocked (or rescued
//!                                                        by a swap when optimizing)
//!                  otherwise                           → cross, maybe finish
//!   ③ Re-sort:  restore arrival order if any car moved.
//! ```
//!
//! # Modes
//!
//! | Entry point            | Schedule   | Swaps | Use                               |
//! |------------------------|------------|-------|-----------------------------------|
//! | [`Sim::evaluate`]      | `&`        | no    | authoritative score + diagnostics |
//! | [`Sim::optimize`]      | `&mut`     | yes   | greedy reordering of green phases |
//! | [`Sim::upper_bound`]   | none       | no    | contention-free maximum           |
//! | [`LocalSearch`]        | `&mut`     | yes   | repeat `optimize` until stuck     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Runs multi-start candidates on Rayon's thread pool.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public output types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::SimConfig;
//! use ts_sim::{BlockedTrafficReport, LocalSearch, LocalSearchConfig, Sim};
//!
//! let sim = Sim::new(SimConfig::new(duration, bonus), &network, &cars)?;
//! LocalSearch::new(&sim, LocalSearchConfig::default())?.run(&mut schedule)?;
//! let mut report = BlockedTrafficReport::new(network.intersection_count());
//! let score = sim.evaluate(&schedule, &mut report)?;
//! ```

pub mod bound;
pub mod error;
pub mod observer;
pub mod report;
pub mod search;
pub mod sim;

mod policy;
mod state;


pub use bound::{UpperBound, upper_bound};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{BlockedTrafficReport, IntersectionBlocking, RunStats};
pub use search::{LocalSearch, LocalSearchConfig, SearchOutcome};
pub use sim::Sim;
