//! Core traits and types for the rootwork solvers.
//!
//! This crate defines the pieces every solver shares:
//!
//! - [`Equation`] — a scalar function `f(x)` whose root is sought, with the
//!   two concrete families [`Exponential`] and [`Quadratic`]
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Trace`] — the ordered, per-call record of a solver's iterations
//!
//! # Features
//!
//! - `serde` — derives `Serialize` and `Deserialize` for the public data types.

mod equation;
mod observer;
mod trace;

pub use equation::{Equation, Exponential, Quadratic};
pub use observer::Observer;
pub use trace::{Numbered, OutOfOrder, Trace};
