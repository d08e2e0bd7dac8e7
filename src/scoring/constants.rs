use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Attribute, Strategy};
use crate::scoring::membership::{gaussian, trapezoidal, triangular};

/// Lower bound shared by every attribute.
pub const ATTRIBUTE_MIN: f64 = 0.0;

/// Upper bound for taste.
pub const TASTE_MAX: f64 = 20.0;

/// Upper bound for spiciness, sweetness and texture.
pub const ATTRIBUTE_MAX: f64 = 10.0;

/// Scores below this are labelled Low.
pub const LOW_THRESHOLD: f64 = 0.4;

/// Scores at or above this are labelled Yummy.
pub const YUMMY_THRESHOLD: f64 = 0.7;

/// The CSV export is refreshed whenever the dataset size hits a multiple of this.
pub const CSV_EXPORT_INTERVAL: usize = 10;

/// Shape parameters for one membership function instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
}

impl Shape {
    /// Degree of membership of `x` in this shape.
    pub fn membership(&self, x: f64) -> f64 {
        match *self {
            Shape::Triangular { a, b, c } => triangular(x, a, b, c),
            Shape::Trapezoidal { a, b, c, d } => trapezoidal(x, a, b, c, d),
            Shape::Gaussian { mean, sigma } => gaussian(x, mean, sigma),
        }
    }
}

/// Shape parameters for every (attribute, strategy) pair.
pub static SHAPE_TABLE: LazyLock<HashMap<(Attribute, Strategy), Shape>> = LazyLock::new(|| {
    use Attribute::*;

    let mut m = HashMap::new();

    // Triangular (a, b, c)
    m.insert(
        (Taste, Strategy::Triangular),
        Shape::Triangular {
            a: 5.0,
            b: 10.0,
            c: 20.0,
        },
    );
    m.insert(
        (Spiciness, Strategy::Triangular),
        Shape::Triangular {
            a: 0.0,
            b: 3.0,
            c: 6.0,
        },
    );
    m.insert(
        (Sweetness, Strategy::Triangular),
        Shape::Triangular {
            a: 0.0,
            b: 5.0,
            c: 7.0,
        },
    );
    m.insert(
        (Texture, Strategy::Triangular),
        Shape::Triangular {
            a: 2.0,
            b: 3.0,
            c: 7.0,
        },
    );

    // Trapezoidal (a, b, c, d)
    m.insert(
        (Taste, Strategy::Trapezoidal),
        Shape::Trapezoidal {
            a: 0.0,
            b: 1.0,
            c: 19.0,
            d: 20.0,
        },
    );
    m.insert(
        (Spiciness, Strategy::Trapezoidal),
        Shape::Trapezoidal {
            a: 0.0,
            b: 1.0,
            c: 6.0,
            d: 10.0,
        },
    );
    m.insert(
        (Sweetness, Strategy::Trapezoidal),
        Shape::Trapezoidal {
            a: 0.0,
            b: 2.0,
            c: 7.0,
            d: 10.0,
        },
    );
    m.insert(
        (Texture, Strategy::Trapezoidal),
        Shape::Trapezoidal {
            a: 0.0,
            b: 2.0,
            c: 7.0,
            d: 10.0,
        },
    );

    // Gaussian (mean, sigma)
    m.insert(
        (Taste, Strategy::Gaussian),
        Shape::Gaussian {
            mean: 10.0,
            sigma: 2.0,
        },
    );
    m.insert(
        (Spiciness, Strategy::Gaussian),
        Shape::Gaussian {
            mean: 3.0,
            sigma: 3.5,
        },
    );
    m.insert(
        (Sweetness, Strategy::Gaussian),
        Shape::Gaussian {
            mean: 5.5,
            sigma: 3.8,
        },
    );
    m.insert(
        (Texture, Strategy::Gaussian),
        Shape::Gaussian {
            mean: 6.0,
            sigma: 2.2,
        },
    );

    m
});

/// Get the shape for an attribute under a strategy.
pub fn shape_for(attribute: Attribute, strategy: Strategy) -> Option<Shape> {
    SHAPE_TABLE.get(&(attribute, strategy)).copied()
}
