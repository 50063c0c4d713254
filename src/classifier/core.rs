use crate::classifier::config::{ModelIO, TreeConfig};
use crate::data::Matrix;
use crate::errors::TreeError;
use crate::tree::Tree;
use log::info;
use serde::{Deserialize, Serialize};

/// Multi-way categorical decision tree classifier.
///
/// Features are opaque category codes compared only by equality; every
/// split fans out into one child per value observed in the training subset.
/// The fitted state is immutable, prediction only reads it.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CategoricalTreeClassifier {
    pub cfg: TreeConfig,
    classes_: Vec<usize>,
    n_features_: usize,
    feature_importances_: Vec<f64>,
    tree_: Option<Tree>,
}

impl Default for CategoricalTreeClassifier {
    fn default() -> Self {
        CategoricalTreeClassifier {
            cfg: TreeConfig::default(),
            classes_: Vec::new(),
            n_features_: 0,
            feature_importances_: Vec::new(),
            tree_: None,
        }
    }
}

impl CategoricalTreeClassifier {
    /// Create an unfitted classifier from a configuration.
    pub fn new(cfg: TreeConfig) -> Result<Self, TreeError> {
        cfg.validate()?;
        Ok(CategoricalTreeClassifier {
            cfg,
            ..Default::default()
        })
    }

    /// Fit the tree on already-encoded training data.
    ///
    /// * `data` - Feature matrix of category codes.
    /// * `y` - Integer class labels, one per row.
    pub fn fit(&mut self, data: &Matrix<u16>, y: &[usize]) -> Result<(), TreeError> {
        self.cfg.validate()?;
        if y.len() != data.rows {
            return Err(TreeError::ShapeMismatch(y.len(), data.rows));
        }

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let tree = Tree::fit(
            data,
            y,
            self.cfg.max_depth,
            self.cfg.min_samples_split,
            self.cfg.criterion,
        );

        info!(
            "fit complete: rows={}, features={}, classes={}, depth={}, leaves={}",
            data.rows,
            data.cols,
            classes.len(),
            tree.depth,
            tree.n_leaves
        );

        self.classes_ = classes;
        self.n_features_ = data.cols;
        self.feature_importances_ = tree.feature_importances(data.cols);
        self.tree_ = Some(tree);
        Ok(())
    }

    /// Predict a class label for every row of `data`.
    ///
    /// * `parallel` - Map rows through the tree on the rayon pool.
    pub fn predict(&self, data: &Matrix<u16>, parallel: bool) -> Result<Vec<usize>, TreeError> {
        let tree = self.tree_.as_ref().ok_or(TreeError::NotFitted)?;
        if data.cols != self.n_features_ {
            return Err(TreeError::FeatureMismatch(data.cols, self.n_features_));
        }
        Ok(tree.predict(data, parallel))
    }

    /// Distinct class labels seen during training, ascending.
    pub fn classes(&self) -> Result<&[usize], TreeError> {
        if self.tree_.is_none() {
            return Err(TreeError::NotFitted);
        }
        Ok(&self.classes_)
    }

    /// Number of distinct classes seen during training.
    pub fn n_classes(&self) -> Result<usize, TreeError> {
        self.classes().map(<[usize]>::len)
    }

    /// Number of features fixed at training time.
    pub fn n_features(&self) -> Result<usize, TreeError> {
        if self.tree_.is_none() {
            return Err(TreeError::NotFitted);
        }
        Ok(self.n_features_)
    }

    /// Normalized per-feature split contributions.
    pub fn feature_importances(&self) -> Result<&[f64], TreeError> {
        if self.tree_.is_none() {
            return Err(TreeError::NotFitted);
        }
        Ok(&self.feature_importances_)
    }

    /// The fitted tree.
    pub fn tree(&self) -> Result<&Tree, TreeError> {
        self.tree_.as_ref().ok_or(TreeError::NotFitted)
    }
}

impl ModelIO for CategoricalTreeClassifier {}
