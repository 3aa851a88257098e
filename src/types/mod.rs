pub mod identifiers;
pub mod solution;

pub use identifiers::InputDigest;
pub use solution::{ChosenItem, Solution, SolveError};
