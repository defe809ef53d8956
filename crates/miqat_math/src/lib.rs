//! Degree-based trigonometry and range reduction.
//!
//! The prayer-time formulas are written in degrees and hours throughout.
//! This crate keeps the radian conversions in one place so the solver code
//! reads like the formulas it implements.

pub mod reduce;
pub mod trig;

pub use reduce::{fix_angle, fix_hour, time_diff};
pub use trig::{darccos, darccot, darcsin, darctan2, dcos, dsin, dtan};
