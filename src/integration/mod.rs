pub mod integrator;

pub use integrator::{advance, step, StepOutcome, StepParams};
