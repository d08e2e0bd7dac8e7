use dialoguer::{Confirm, Input, Select};

use crate::error::{DishError, Result};
use crate::models::{Attribute, Strategy};
use crate::state::DishBook;

/// Parse a raw text field into a validated attribute value.
pub fn parse_attribute_value(attribute: Attribute, input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DishError::InvalidInput(format!("'{}' is not a number", input.trim())))?;
    attribute.validate(value)
}

/// Prompt for a dish name.
pub fn prompt_dish_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Dish name")
        .interact_text()?;

    let name = input.trim();
    if name.is_empty() {
        return Err(DishError::InvalidInput("Dish name cannot be empty".to_string()));
    }
    Ok(name.to_string())
}

/// Prompt for one attribute value within its range.
pub fn prompt_attribute(attribute: Attribute) -> Result<f64> {
    let (min, max) = attribute.range();
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", attribute, min, max))
        .interact_text()?;

    parse_attribute_value(attribute, &input)
}

/// Prompt for the membership function family.
pub fn prompt_strategy() -> Result<Strategy> {
    let options: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Select logic")
        .items(&options)
        .default(0)
        .interact()?;

    Strategy::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| DishError::InvalidSelection(format!("logic index {}", selection)))
}

/// Pick a dish from the dataset.
pub fn prompt_dish_selection(book: &DishBook) -> Result<String> {
    let names = book.names();
    if names.is_empty() {
        return Err(DishError::InvalidInput("The dataset has no dishes".to_string()));
    }

    let selection = Select::new()
        .with_prompt("Select dish")
        .items(&names)
        .default(0)
        .interact()?;

    names
        .get(selection)
        .map(|n| n.to_string())
        .ok_or_else(|| DishError::InvalidSelection(format!("dish index {}", selection)))
}

/// Resolve a typed name to a stored dish, offering fuzzy suggestions.
pub fn resolve_dish_name(book: &DishBook, input: &str) -> Result<String> {
    if let Some(dish) = book.get(input) {
        return Ok(dish.name.clone());
    }

    let suggestions = book.suggestions(input, 5);

    match suggestions.as_slice() {
        [] => Err(DishError::DishNotFound(input.to_string())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;

            if confirm {
                Ok(only.to_string())
            } else {
                Err(DishError::DishNotFound(input.to_string()))
            }
        }
        many => {
            let mut options: Vec<&str> = many.to_vec();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            many.get(selection)
                .map(|n| n.to_string())
                .ok_or_else(|| DishError::DishNotFound(input.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute_value() {
        assert_eq!(parse_attribute_value(Attribute::Taste, " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_attribute_value(Attribute::Texture, "10").unwrap(), 10.0);
    }

    #[test]
    fn test_parse_attribute_value_rejects_text() {
        assert!(matches!(
            parse_attribute_value(Attribute::Sweetness, "very"),
            Err(DishError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_attribute_value_rejects_out_of_range() {
        assert!(matches!(
            parse_attribute_value(Attribute::Spiciness, "12"),
            Err(DishError::OutOfRange { .. })
        ));
        assert!(parse_attribute_value(Attribute::Taste, "15").is_ok());
    }
}
