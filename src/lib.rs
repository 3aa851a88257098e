//! Deterministic amount-combination optimizer.
//!
//! `budget-fit` takes a list of labeled amounts and a budget ceiling and finds
//! the subset whose sum is as large as possible without going over. Solving is
//! exact (0/1 subset-sum by dynamic programming) and deterministic: identical
//! inputs always produce the identical chosen subset, in the identical order.
//!
//! Around the solver sit the host-side pieces: an item collector that validates
//! entries, an append-only history of past results with CSV export, and a
//! [`session::Session`] tying them together as an explicit request/response
//! cycle.

pub mod history;
pub mod item;
pub mod selection;
pub mod session;
pub mod types;

pub use selection::solve;
