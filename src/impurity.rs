//! Impurity criteria
//!
//! Entropy and Gini impurity over the class labels of a training subset.
use crate::errors::TreeError;
use crate::utils::{items_to_strings, label_counts};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Guards against `log2(0)` for classes at the frequency floor; negligible
/// for any non-trivial frequency.
const ENTROPY_EPS: f64 = f64::EPSILON;

/// Impurity criterion used to score candidate splits.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Shannon entropy, `-sum(p * log2(p))`.
    Entropy,
    /// Gini index, `1 - sum(p^2)`.
    Gini,
}

impl FromStr for Criterion {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entropy" => Ok(Criterion::Entropy),
            "gini" => Ok(Criterion::Gini),
            _ => Err(TreeError::ParseString(
                s.to_string(),
                "criterion".to_string(),
                items_to_strings(vec!["entropy", "gini"]),
            )),
        }
    }
}

impl Criterion {
    /// Impurity of a label subset. An empty subset is defined as 0.
    pub fn impurity(&self, y: &[usize]) -> f64 {
        if y.is_empty() {
            return 0.0;
        }
        let n = y.len() as f64;
        let counts = label_counts(y);
        match self {
            // The epsilon drags a pure subset a few ulps below zero
            // (`-log2(1 + EPS)`); clamp so the impurity stays non-negative.
            Criterion::Entropy => counts
                .values()
                .map(|&c| {
                    let p = c as f64 / n;
                    -p * (p + ENTROPY_EPS).log2()
                })
                .sum::<f64>()
                .max(0.0),
            Criterion::Gini => {
                1.0 - counts
                    .values()
                    .map(|&c| {
                        let p = c as f64 / n;
                        p * p
                    })
                    .sum::<f64>()
            }
        }
    }
}
