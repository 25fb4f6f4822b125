//! Threshold bucketing configured through small JSON documents.
//!
//! The Big Number "total" variant accepts a color-step document such as
//! `{"value": [0, 10], "color": ["red", "yellow", "green"]}`; the Pivot Table
//! uses the same structure under the keys `range` / `classname` to attach a CSS
//! class to each cell. Both parse into [`StepConfig`].
//!
//! ```
//! use chart_props::steps::{parse_step_config, StepConfig};
//!
//! let steps = parse_step_config(r#"{"value":[0,10],"color":["red","yellow","green"]}"#).unwrap();
//! assert_eq!(steps.lookup(5.0), Some("yellow"));
//! assert_eq!(steps.lookup(15.0), Some("green"));
//! assert_eq!(parse_step_config("").unwrap(), StepConfig::Disabled);
//! ```

use crate::error::StepParseError;
use serde::Deserialize;

/// A parsed step configuration. `Disabled` stands for "no override".
#[derive(Debug, Clone, PartialEq)]
pub enum StepConfig {
    Disabled,
    Steps {
        /// Ascending bucket boundaries.
        thresholds: Vec<f64>,
        /// One label per bucket; the last label also covers everything past the last threshold.
        labels: Vec<String>,
    },
}

#[derive(Deserialize)]
struct RawSteps {
    #[serde(alias = "range")]
    value: Vec<f64>,
    #[serde(alias = "classname")]
    color: Vec<String>,
}

/// Parse a step document. Blank input disables the feature.
pub fn parse_step_config(input: &str) -> Result<StepConfig, StepParseError> {
    if input.trim().is_empty() {
        return Ok(StepConfig::Disabled);
    }
    let raw: RawSteps = serde_json::from_str(input)?;
    if raw.color.is_empty() {
        return Err(StepParseError::NoLabels);
    }
    Ok(StepConfig::Steps {
        thresholds: raw.value,
        labels: raw.color,
    })
}

impl StepConfig {
    /// Like [`parse_step_config`], but a malformed document only logs a warning.
    pub fn from_input_or_disabled(input: &str) -> Self {
        match parse_step_config(input) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring step configuration: {}", e);
                StepConfig::Disabled
            }
        }
    }

    /// Label of the bucket `value` falls into.
    ///
    /// Linear scan, first match wins: bucket 0 is `value < t[0]`, bucket `i` is
    /// `t[i-1] <= value < t[i]`. Values past the last threshold (and NaN) take the last label.
    pub fn lookup(&self, value: f64) -> Option<&str> {
        let StepConfig::Steps { thresholds, labels } = self else {
            return None;
        };
        let index = thresholds.iter().enumerate().position(|(i, &t)| {
            if i == 0 {
                value < t
            } else {
                thresholds[i - 1] <= value && value < t
            }
        });
        let label = match index {
            Some(i) => labels.get(i).or(labels.last()),
            None => labels.last(),
        };
        label.map(String::as_str)
    }
}

/// Row-header classes for the Pivot Table: `{"keys": [...], "classname": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryClasses {
    pub keys: Vec<String>,
    pub classname: Vec<String>,
}

impl CategoryClasses {
    /// Class for a row header, matched by exact key.
    pub fn class_for(&self, key: &str) -> Option<&str> {
        let idx = self.keys.iter().position(|k| k == key)?;
        self.classname.get(idx).map(String::as_str)
    }
}

/// Parse a category class document. Blank input yields `None`.
pub fn parse_category_classes(input: &str) -> Result<Option<CategoryClasses>, StepParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let classes: CategoryClasses = serde_json::from_str(input)?;
    if classes.classname.is_empty() {
        return Err(StepParseError::NoLabels);
    }
    Ok(Some(classes))
}
