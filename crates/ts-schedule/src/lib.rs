//! `ts-schedule`: per-intersection green-phase plans.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`phase`]    | `GreenPhase`, `IntersectionPlan`                      |
//! | [`schedule`] | `SignalSchedule`, one plan per intersection          |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                  |
//!
//! # Cycle model (summary)
//!
//! An intersection's phases rotate round-robin.  With phase durations
//! `d0, d1, …` and `cycle = Σ d`, the street that is green at tick `t` is:
//!
//! ```text
//! pos   = t % cycle
//! green = phase k with  d0 + … + d(k-1)  ≤ pos  <  d0 + … + dk
//! ```
//!
//! Durations and phase membership are fixed once a schedule is built.  The
//! only in-place edits are order changes that keep every cycle length
//! ([`IntersectionPlan::swap_equal`], [`IntersectionPlan::shuffle_order`]).

pub mod error;
pub mod phase;
pub mod schedule;


pub use error::{ScheduleError, ScheduleResult};
pub use phase::{GreenPhase, IntersectionPlan};
pub use schedule::SignalSchedule;
