mod utils;

// Modules
pub mod classifier;
pub mod data;
pub mod errors;
pub mod grower;
pub mod impurity;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use classifier::CategoricalTreeClassifier;
pub use data::Matrix;
