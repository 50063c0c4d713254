//! Tree growing
//!
//! Recursive construction of the multi-way tree: pick the best split for the
//! current row subset, fan out one child per observed value, stop into a
//! majority-vote leaf when no further split is warranted.
use crate::data::Matrix;
use crate::impurity::Criterion;
use crate::splitter::{find_best_split, group_rows_by_value};
use crate::tree::Node;
use crate::utils::{label_counts, most_frequent_label};
use hashbrown::HashMap;

/// Grow a node from a row subset at the given depth.
///
/// Emits a leaf when the depth limit is reached, the subset is smaller than
/// `min_samples_split`, the subset is single-class, or no feature has two
/// distinct values left. Otherwise branches on the best feature and recurses
/// into the per-value row groups at `depth + 1`.
pub fn grow(
    data: &Matrix<u16>,
    rows: &[usize],
    y: &[usize],
    depth: usize,
    max_depth: Option<usize>,
    min_samples_split: usize,
    criterion: Criterion,
) -> Node {
    let subset_labels: Vec<usize> = rows.iter().map(|&i| y[i]).collect();
    let counts = label_counts(&subset_labels);

    let depth_reached = max_depth.is_some_and(|d| depth >= d);
    if depth_reached || rows.len() < min_samples_split || counts.len() == 1 {
        return leaf_from_counts(&counts, rows.len());
    }

    let split = match find_best_split(data, rows, y, criterion) {
        Some(split) => split,
        None => return leaf_from_counts(&counts, rows.len()),
    };

    let groups = group_rows_by_value(data, rows, split.split_feature);
    let mut children = HashMap::with_capacity(groups.len());
    for (value, group) in groups {
        children.insert(
            value,
            grow(data, &group, y, depth + 1, max_depth, min_samples_split, criterion),
        );
    }

    Node::Branch {
        feature: split.split_feature,
        n_samples: rows.len(),
        children,
    }
}

fn leaf_from_counts(counts: &HashMap<usize, usize>, n_samples: usize) -> Node {
    Node::Leaf {
        value: most_frequent_label(counts).unwrap_or(0),
        n_samples,
    }
}
