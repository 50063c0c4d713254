// public modules
pub mod config;
pub mod core;

pub use config::{ModelIO, TreeConfig};
pub use core::CategoricalTreeClassifier;
