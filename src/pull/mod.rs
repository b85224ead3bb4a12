pub mod inputs;
pub mod reconcile;

pub use inputs::{PullInputs, ResolvedSource};
