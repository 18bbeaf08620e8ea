//! Submission boundary: where validated records go

mod simulated;
mod traits;

pub use simulated::{AuthError, SimulatedAuth, SimulatedFailure};
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
