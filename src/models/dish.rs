use serde::{Deserialize, Serialize};

use crate::error::{DishError, Result};
use crate::models::Attribute;

/// The four raw attribute measurements fed to the scoring core.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeValues {
    pub taste: f64,
    pub spiciness: f64,
    pub sweetness: f64,
    pub texture: f64,
}

impl AttributeValues {
    pub fn new(taste: f64, spiciness: f64, sweetness: f64, texture: f64) -> Self {
        Self {
            taste,
            spiciness,
            sweetness,
            texture,
        }
    }

    #[inline]
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Taste => self.taste,
            Attribute::Spiciness => self.spiciness,
            Attribute::Sweetness => self.sweetness,
            Attribute::Texture => self.texture,
        }
    }

    /// Check every value against its attribute range.
    pub fn validate(&self) -> Result<()> {
        for attribute in Attribute::ALL {
            attribute.validate(self.get(attribute))?;
        }
        Ok(())
    }
}

/// A named dish record as stored in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Taste")]
    pub taste: f64,

    #[serde(rename = "Spiciness")]
    pub spiciness: f64,

    #[serde(rename = "Sweetness")]
    pub sweetness: f64,

    #[serde(rename = "Texture")]
    pub texture: f64,
}

impl Dish {
    /// Build a dish, rejecting a blank name or values outside the attribute ranges.
    pub fn new(name: impl Into<String>, values: AttributeValues) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DishError::InvalidInput("Dish name cannot be empty".to_string()));
        }
        values.validate()?;
        Ok(Self {
            name,
            taste: values.taste,
            spiciness: values.spiciness,
            sweetness: values.sweetness,
            texture: values.texture,
        })
    }

    pub fn values(&self) -> AttributeValues {
        AttributeValues::new(self.taste, self.spiciness, self.sweetness, self.texture)
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: taste:{} spice:{} sweet:{} texture:{}",
            self.name, self.taste, self.spiciness, self.sweetness, self.texture
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> AttributeValues {
        AttributeValues::new(15.0, 4.0, 2.0, 6.0)
    }

    #[test]
    fn test_get_in_report_order() {
        let values = sample_values();
        let ordered: Vec<f64> = Attribute::ALL.iter().map(|a| values.get(*a)).collect();
        assert_eq!(ordered, vec![15.0, 4.0, 2.0, 6.0]);
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(Dish::new("Menemen", sample_values()).is_ok());

        let mut too_spicy = sample_values();
        too_spicy.spiciness = 11.0;
        let err = Dish::new("Acili Ezme", too_spicy).unwrap_err();
        assert!(matches!(
            err,
            DishError::OutOfRange {
                attribute: Attribute::Spiciness,
                ..
            }
        ));
    }

    #[test]
    fn test_taste_allows_up_to_twenty() {
        let mut values = sample_values();
        values.taste = 20.0;
        assert!(values.validate().is_ok());
        values.taste = 20.5;
        assert!(values.validate().is_err());
    }

    #[test]
    fn test_key_normalizes_name() {
        let dish = Dish::new("  Iskender Kebap ", sample_values()).unwrap();
        assert_eq!(dish.name, "Iskender Kebap");
        assert_eq!(dish.key(), "iskender kebap");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        for name in ["", "   ", "\t"] {
            assert!(matches!(
                Dish::new(name, sample_values()),
                Err(DishError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_serde_column_names() {
        let dish = Dish::new("Baklava", AttributeValues::new(18.0, 0.0, 10.0, 7.0)).unwrap();
        let json = serde_json::to_string(&dish).unwrap();
        assert!(json.contains("\"Name\":\"Baklava\""));
        assert!(json.contains("\"Sweetness\":10.0"));
    }
}
