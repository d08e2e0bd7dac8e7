use std::fmt;

use crate::scoring::constants::{LOW_THRESHOLD, YUMMY_THRESHOLD};

/// Qualitative bucket for a membership or suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Low,
    Moderate,
    Yummy,
}

impl Label {
    /// Classify a score: `< 0.4` Low, `< 0.7` Moderate, otherwise Yummy.
    ///
    /// NaN falls through to Low.
    pub fn from_score(score: f64) -> Self {
        if score >= YUMMY_THRESHOLD {
            Label::Yummy
        } else if score >= LOW_THRESHOLD {
            Label::Moderate
        } else {
            Label::Low
        }
    }

    /// Label text as shown to users. "Modarete" is the established spelling
    /// consumers match on.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Low => "Low",
            Label::Moderate => "Modarete",
            Label::Yummy => "Yummy",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers work in report tables
        f.pad(self.as_str())
    }
}
