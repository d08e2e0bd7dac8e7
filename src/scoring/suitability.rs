use std::fmt;
use std::str::FromStr;

use crate::error::{DishError, Result};
use crate::models::{Attribute, AttributeValues, Label, Strategy};
use crate::scoring::evaluator::evaluate;

/// One row of an evaluation breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeScore {
    pub attribute: Attribute,
    pub value: f64,
    pub score: f64,
    pub label: Label,
}

/// A single suitability evaluation of four attribute values.
///
/// The score vector, the scalar suitability and the report are all views
/// over this one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    strategy: Strategy,
    values: AttributeValues,
    scores: [f64; 4],
    suitability: f64,
}

impl Evaluation {
    /// Score every attribute under `strategy` and average the results.
    pub fn compute(values: AttributeValues, strategy: Strategy) -> Result<Self> {
        let mut scores = [0.0; 4];
        for (slot, attribute) in scores.iter_mut().zip(Attribute::ALL) {
            *slot = evaluate(attribute, values.get(attribute), strategy)?;
        }

        let suitability = mean(&scores);
        log::debug!(
            "{} suitability {:.4} from scores {:?}",
            strategy.name(),
            suitability,
            scores
        );

        Ok(Self {
            strategy,
            values,
            scores,
            suitability,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Membership scores in order Taste, Spiciness, Sweetness, Texture.
    pub fn scores(&self) -> [f64; 4] {
        self.scores
    }

    /// Mean of the four membership scores.
    pub fn suitability(&self) -> f64 {
        self.suitability
    }

    pub fn label(&self) -> Label {
        Label::from_score(self.suitability)
    }

    pub fn breakdown(&self) -> impl Iterator<Item = AttributeScore> {
        let values = self.values;
        Attribute::ALL
            .into_iter()
            .zip(self.scores)
            .map(move |(attribute, score)| AttributeScore {
                attribute,
                value: values.get(attribute),
                score,
                label: Label::from_score(score),
            })
    }

    /// Formatted table of the breakdown followed by the suitability line.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Select one of the three output views.
    pub fn output(&self, mode: OutputMode) -> SuitabilityOutput {
        match mode {
            OutputMode::Report => SuitabilityOutput::Report(self.report()),
            OutputMode::Scalar => SuitabilityOutput::Scalar(self.suitability),
            OutputMode::Vector => SuitabilityOutput::Vector(self.scores),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.strategy.method())?;
        writeln!(f, "{:<10} {:>7} {:>6}  {}", "Attribute", "Value", "Score", "Label")?;
        for row in self.breakdown() {
            writeln!(
                f,
                "{:<10} {:>7.2} {:>6.2}  {}",
                row.attribute.name(),
                row.value,
                row.score,
                row.label
            )?;
        }
        write!(
            f,
            "Suitability Score = {:.2} ({})",
            self.suitability,
            self.label()
        )
    }
}

fn mean(scores: &[f64; 4]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Which view of an evaluation a host wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Report,
    Scalar,
    Vector,
}

impl FromStr for OutputMode {
    type Err = DishError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "report" => Ok(OutputMode::Report),
            "scalar" => Ok(OutputMode::Scalar),
            "vector" => Ok(OutputMode::Vector),
            other => Err(DishError::InvalidSelection(format!(
                "unknown output mode '{}'! Must be report, scalar, or vector.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuitabilityOutput {
    Report(String),
    Scalar(f64),
    Vector([f64; 4]),
}

/// Evaluate four raw values under a typed strategy.
pub fn score(
    taste: f64,
    spiciness: f64,
    sweetness: f64,
    texture: f64,
    strategy: Strategy,
) -> Result<Evaluation> {
    Evaluation::compute(
        AttributeValues::new(taste, spiciness, sweetness, texture),
        strategy,
    )
}

/// Loosely-typed entry point: numeric strategy selector plus output mode.
pub fn evaluate_suitability(
    taste: f64,
    spiciness: f64,
    sweetness: f64,
    texture: f64,
    strategy: u8,
    mode: OutputMode,
) -> Result<SuitabilityOutput> {
    let strategy = Strategy::try_from(strategy)?;
    let evaluation = score(taste, spiciness, sweetness, texture, strategy)?;
    Ok(evaluation.output(mode))
}
