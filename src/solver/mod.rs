//! The problem-agnostic solver core.
//!
//! [`problem`] and [`constraint`] describe a CSP instance; [`strategy`]
//! holds the search algorithms; [`context`] and [`heuristics`] carry the
//! forward-checking machinery. [`engine`] wraps a boxed strategy behind a
//! small facade, and [`cancel`] provides the cooperative cancellation
//! token polled by the forward-checking driver.

pub mod cancel;
pub mod constraint;
pub mod context;
pub mod engine;
pub mod heuristics;
pub mod predicates;
pub mod problem;
pub mod stats;
pub mod strategy;
