#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;
pub mod state;

pub use error::{DishError, Result};
pub use models::{Attribute, AttributeValues, Dish, Label, Strategy};
pub use scoring::{
    evaluate_attribute, evaluate_suitability, Evaluation, OutputMode, SuitabilityOutput,
};
