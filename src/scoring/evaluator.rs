use crate::error::{DishError, Result};
use crate::models::{Attribute, Strategy};
use crate::scoring::constants::shape_for;

/// Membership score of one attribute value under a strategy.
///
/// Fails with `InvalidSelection` only if the shape table has no entry for the pair.
pub fn evaluate(attribute: Attribute, value: f64, strategy: Strategy) -> Result<f64> {
    let shape = shape_for(attribute, strategy).ok_or_else(|| {
        DishError::InvalidSelection(format!(
            "no {} shape defined for {}",
            strategy.name(),
            attribute
        ))
    })?;

    let score = shape.membership(value);
    log::debug!("{} = {} under {:?} -> {:.4}", attribute, value, shape, score);
    Ok(score)
}

/// Loosely-typed entry point for hosts holding an attribute name and a
/// numeric strategy selector (1, 2 or 3).
pub fn evaluate_attribute(attribute_name: &str, value: f64, strategy: u8) -> Result<f64> {
    let attribute: Attribute = attribute_name.parse()?;
    let strategy = Strategy::try_from(strategy)?;
    evaluate(attribute, value, strategy)
}
