pub mod constants;
pub mod evaluator;
pub mod membership;
pub mod suitability;

pub use constants::{shape_for, Shape, SHAPE_TABLE};
pub use evaluator::{evaluate, evaluate_attribute};
pub use membership::{gaussian, trapezoidal, triangular};
pub use suitability::{
    evaluate_suitability, score, AttributeScore, Evaluation, OutputMode, SuitabilityOutput,
};
