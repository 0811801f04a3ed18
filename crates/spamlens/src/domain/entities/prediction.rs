//! Prediction Entity
//!
//! A classifier verdict that has been checked against the domain rules.

use serde::{Deserialize, Serialize};

use crate::domain::{errors::ClassificationFailure, Label};

/// Validated classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Preprocessed text as the classifier saw it
    pub clean: String,
    pub label: Label,
    /// Spam confidence in `[0.0, 1.0]`
    pub prob: f64,
    /// Outlier flag, independent of the label
    pub anomaly: bool,
}

impl Prediction {
    /// Build a prediction from raw classifier fields, rejecting values outside the contract
    pub fn from_raw(
        clean: String,
        label: i32,
        prob: f64,
        anomaly: bool,
    ) -> Result<Self, ClassificationFailure> {
        let label = Label::try_from(label).map_err(ClassificationFailure::InvalidPrediction)?;

        if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
            return Err(ClassificationFailure::InvalidPrediction(format!(
                "probability {} outside [0, 1]",
                prob
            )));
        }

        Ok(Self {
            clean,
            label,
            prob,
            anomaly,
        })
    }
}
