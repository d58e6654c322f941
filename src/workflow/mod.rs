pub mod gate;
pub mod validation_flow;

pub use gate::{admit, AbortReason, GateOutcome};
pub use validation_flow::ValidationFlow;
