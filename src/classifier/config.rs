//! Classifier Configuration
//!
//! Defines the configuration structure for the categorical tree classifier
//! and the JSON persistence helpers shared by the config and the fitted
//! model.
use crate::errors::TreeError;
use crate::impurity::Criterion;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_depth() -> Option<usize> {
    None
}
fn default_min_samples_split() -> usize {
    2
}
fn default_criterion() -> Criterion {
    Criterion::Entropy
}

/// Configuration for the `CategoricalTreeClassifier`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TreeConfig {
    /// Maximum number of branch levels; unlimited if `None`.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Minimum number of rows a subset must have to be split further.
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    /// Impurity criterion used to score splits.
    #[serde(default = "default_criterion")]
    pub criterion: Criterion,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_depth: None,
            min_samples_split: 2,
            criterion: Criterion::Entropy,
        }
    }
}

impl TreeConfig {
    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.max_depth == Some(0) {
            return Err(TreeError::InvalidParameter(
                "max_depth".to_string(),
                "a positive integer or None".to_string(),
                "0".to_string(),
            ));
        }
        if self.min_samples_split == 0 {
            return Err(TreeError::InvalidParameter(
                "min_samples_split".to_string(),
                "a positive integer".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object.
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load from a Json string.
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str =
            fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for TreeConfig {}
