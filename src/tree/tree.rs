use crate::data::Matrix;
use crate::grower::grow;
use crate::impurity::Criterion;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A node of the fitted tree.
///
/// A branch owns one child per feature value observed in the training subset
/// it was grown from, keyed by that value. The tree is a strict hierarchy.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub enum Node {
    Leaf {
        /// Majority label of the training rows routed here.
        value: usize,
        /// Number of training rows routed here.
        n_samples: usize,
    },
    Branch {
        /// Index of the feature this node splits on.
        feature: usize,
        /// Number of training rows routed here.
        n_samples: usize,
        /// One child per observed value of the split feature.
        children: HashMap<u16, Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of training rows that reached this node.
    pub fn n_samples(&self) -> usize {
        match self {
            Node::Leaf { n_samples, .. } => *n_samples,
            Node::Branch { n_samples, .. } => *n_samples,
        }
    }

    /// Number of branch nodes along the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Branch { children, .. } => {
                1 + children.values().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Total number of leaves in the subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { children, .. } => children.values().map(Node::n_leaves).sum(),
        }
    }

    /// Total number of branch nodes in the subtree.
    pub fn n_branches(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Branch { children, .. } => {
                1 + children.values().map(Node::n_branches).sum::<usize>()
            }
        }
    }

    fn accumulate_importances(&self, root_samples: f64, importances: &mut [f64]) {
        if let Node::Branch {
            feature,
            n_samples,
            children,
        } = self
        {
            importances[*feature] += *n_samples as f64 / root_samples;
            for child in children.values() {
                child.accumulate_importances(root_samples, importances);
            }
        }
    }

    fn fmt_with_depth(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let pad = "      ".repeat(depth);
        match self {
            Node::Leaf { value, n_samples } => {
                writeln!(f, "{}leaf={},count={}", pad, value, n_samples)
            }
            Node::Branch {
                feature,
                n_samples,
                children,
            } => {
                writeln!(f, "{}[feature {}],count={}", pad, feature, n_samples)?;
                let mut values: Vec<&u16> = children.keys().collect();
                values.sort();
                for v in values {
                    writeln!(f, "{}={}:", pad, v)?;
                    children[v].fmt_with_depth(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// A single fitted multi-way decision tree.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Tree {
    pub root: Node,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree over all rows of `data`.
    ///
    /// * `y` - Labels, one per row of `data`.
    /// * `max_depth` - Optional hard depth limit; unlimited if `None`.
    /// * `min_samples_split` - Subsets smaller than this become leaves.
    pub fn fit(
        data: &Matrix<u16>,
        y: &[usize],
        max_depth: Option<usize>,
        min_samples_split: usize,
        criterion: Criterion,
    ) -> Self {
        let root = grow(data, &data.index, y, 0, max_depth, min_samples_split, criterion);
        let depth = root.depth();
        let n_leaves = root.n_leaves();
        Tree { root, depth, n_leaves }
    }

    /// Normalized per-feature contribution to the partitioning.
    ///
    /// Every branch adds its share of the training rows to its split
    /// feature; the totals are normalized to sum to one. A single-leaf tree
    /// yields all zeros.
    pub fn feature_importances(&self, n_features: usize) -> Vec<f64> {
        let mut importances = vec![0.0; n_features];
        self.root
            .accumulate_importances(self.root.n_samples() as f64, &mut importances);
        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for v in importances.iter_mut() {
                *v /= total;
            }
        }
        importances
    }
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.fmt_with_depth(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_row_tree() -> Tree {
        // feature 0 separates the classes, feature 1 is noise.
        let v: Vec<u16> = vec![0, 0, 1, 1, 1, 2, 1, 2];
        let data = Matrix::new(&v, 4, 2);
        let y = vec![0, 0, 1, 1];
        Tree::fit(&data, &y, None, 2, Criterion::Entropy)
    }

    #[test]
    fn test_tree_fit_perfect_split() {
        let tree = four_row_tree();
        assert_eq!(tree.depth, 1);
        assert_eq!(tree.n_leaves, 2);
        match &tree.root {
            Node::Branch {
                feature,
                n_samples,
                children,
            } => {
                assert_eq!(*feature, 0);
                assert_eq!(*n_samples, 4);
                assert_eq!(children.len(), 2);
                assert!(children.values().all(Node::is_leaf));
            }
            Node::Leaf { .. } => panic!("expected a branch at the root"),
        }
    }

    #[test]
    fn test_feature_importances_sum_to_one() {
        let tree = four_row_tree();
        let importances = tree.feature_importances(2);
        assert!((importances[0] - 1.0).abs() < 1e-9);
        assert_eq!(importances[1], 0.0);
        assert!((importances.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_feature_importances_single_leaf_all_zero() {
        let v: Vec<u16> = vec![0, 1, 0, 1];
        let data = Matrix::new(&v, 4, 1);
        let y = vec![1, 1, 1, 1];
        let tree = Tree::fit(&data, &y, None, 2, Criterion::Gini);
        assert!(tree.root.is_leaf());
        assert_eq!(tree.feature_importances(1), vec![0.0]);
    }

    #[test]
    fn test_node_sample_counts_are_consistent() {
        // Every node's count equals the sum over its descendant leaves.
        fn check(node: &Node) -> usize {
            match node {
                Node::Leaf { n_samples, .. } => *n_samples,
                Node::Branch {
                    n_samples, children, ..
                } => {
                    let total: usize = children.values().map(check).sum();
                    assert_eq!(total, *n_samples);
                    total
                }
            }
        }
        let v: Vec<u16> = vec![0, 0, 1, 1, 2, 2, 0, 1, 0, 1, 0, 1];
        let data = Matrix::new(&v, 6, 2);
        let y = vec![0, 1, 1, 0, 2, 2];
        let tree = Tree::fit(&data, &y, None, 2, Criterion::Entropy);
        assert_eq!(check(&tree.root), 6);
    }

    #[test]
    fn test_tree_serde_round_trip() {
        let tree = four_row_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let tree2: Tree = serde_json::from_str(&json).unwrap();
        assert_eq!(tree2.depth, tree.depth);
        assert_eq!(tree2.n_leaves, tree.n_leaves);
        assert_eq!(tree2.feature_importances(2), tree.feature_importances(2));
    }

    #[test]
    fn test_tree_display() {
        let tree = four_row_tree();
        let dump = format!("{}", tree);
        assert!(dump.contains("[feature 0]"));
        assert!(dump.contains("leaf=0"));
        assert!(dump.contains("leaf=1"));
    }
}
