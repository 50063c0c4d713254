//! Errors
//!
//! Custom error types used throughout the `ramose` crate.
use thiserror::Error;

/// Errors that can occur in the categorical tree classifier.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Predict or introspection called before a successful fit.
    #[error("Model has not been fit, call fit before predicting.")]
    NotFitted,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Label vector length does not match the number of rows.
    #[error("Labels of length {0} passed for data with {1} rows.")]
    ShapeMismatch(usize, usize),
    /// Prediction data width does not match the fitted feature count.
    #[error("Data with {0} features passed to a model fit on {1} features.")]
    FeatureMismatch(usize, usize),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}
