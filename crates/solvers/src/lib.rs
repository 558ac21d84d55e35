//! Classical numerical solvers that report their work.
//!
//! Each solver is a pure function of its inputs: it allocates a fresh
//! [`Trace`](rootwork_core::Trace), runs a bounded loop (or a single
//! elimination), and returns a solution record describing the outcome. No
//! outcome is ever raised as a panic or an `Err`; failures are part of the
//! returned status and always come with whatever trace was produced.
//!
//! # Solvers
//!
//! - [`elimination`] — 2×2 linear systems by Gaussian elimination and back
//!   substitution
//! - [`false_position`] — bracketing root finder (regula falsi)
//! - [`fixed_point`] — iteration of `x = g(x)` for five rearrangements of a
//!   quadratic or exponential equation
//! - [`secant`] — two-point, derivative-free root finder

pub mod elimination;
pub mod false_position;
pub mod fixed_point;
pub mod secant;

/// Actions an observer can take during an iterative solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration and return the trace so far.
    StopEarly,
}
