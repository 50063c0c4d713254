//! Split selection
//!
//! Finds the single best feature to partition a row subset on, where a split
//! fans out into one child per distinct value of the feature.
use crate::data::Matrix;
use crate::impurity::Criterion;
use hashbrown::HashMap;

/// The chosen split for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    /// Index of the feature the node splits on.
    pub split_feature: usize,
    /// Impurity reduction achieved by the split.
    pub split_gain: f64,
}

/// Group a row subset by the value it carries for one feature.
pub fn group_rows_by_value(
    data: &Matrix<u16>,
    rows: &[usize],
    feature: usize,
) -> HashMap<u16, Vec<usize>> {
    let col = data.get_col(feature);
    let mut groups: HashMap<u16, Vec<usize>> = HashMap::new();
    for &i in rows {
        groups.entry(col[i]).or_default().push(i);
    }
    groups
}

/// Find the feature with the greatest information gain for a row subset.
///
/// Every feature with at least two distinct values in the subset is a
/// candidate, even when its gain is non-positive; selection is by strictly
/// greater gain against a `-inf` floor, so the lowest feature index wins
/// ties. Returns `None` only when no feature can split the subset at all.
pub fn find_best_split(
    data: &Matrix<u16>,
    rows: &[usize],
    y: &[usize],
    criterion: Criterion,
) -> Option<SplitInfo> {
    let n_samples = rows.len() as f64;
    let subset_labels: Vec<usize> = rows.iter().map(|&i| y[i]).collect();
    let current_impurity = criterion.impurity(&subset_labels);

    let mut best_gain = f64::NEG_INFINITY;
    let mut best_split = None;

    for feature in 0..data.cols {
        let groups = group_rows_by_value(data, rows, feature);

        // A single-valued feature cannot partition the subset.
        if groups.len() < 2 {
            continue;
        }

        let weighted_child_impurity: f64 = groups
            .values()
            .map(|group| {
                let labels: Vec<usize> = group.iter().map(|&i| y[i]).collect();
                (group.len() as f64 / n_samples) * criterion.impurity(&labels)
            })
            .sum();

        let gain = current_impurity - weighted_child_impurity;
        if gain > best_gain {
            best_gain = gain;
            best_split = Some(SplitInfo {
                split_feature: feature,
                split_gain: gain,
            });
        }
    }

    best_split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_rows_by_value() {
        // col 0: [1, 1, 2, 2]
        let v: Vec<u16> = vec![1, 1, 2, 2];
        let data = Matrix::new(&v, 4, 1);
        let groups = group_rows_by_value(&data, &[0, 1, 2, 3], 0);
        assert_eq!(groups[&1], vec![0, 1]);
        assert_eq!(groups[&2], vec![2, 3]);

        let groups = group_rows_by_value(&data, &[0, 2], 0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&1], vec![0]);
    }

    #[test]
    fn test_best_split_separating_feature_wins() {
        // Feature 0 separates the classes perfectly, feature 1 carries no
        // information.
        let v: Vec<u16> = vec![
            0, 0, 1, 1, // feature 0: A A B B
            1, 2, 1, 2, // feature 1: 1 2 1 2
        ];
        let data = Matrix::new(&v, 4, 2);
        let y = vec![0, 0, 1, 1];
        let rows: Vec<usize> = (0..4).collect();

        let split = find_best_split(&data, &rows, &y, Criterion::Entropy).unwrap();
        assert_eq!(split.split_feature, 0);
        assert!(split.split_gain > 0.9);

        let split = find_best_split(&data, &rows, &y, Criterion::Gini).unwrap();
        assert_eq!(split.split_feature, 0);
    }

    #[test]
    fn test_best_split_none_when_all_features_constant() {
        let v: Vec<u16> = vec![3, 3, 3, 7, 7, 7];
        let data = Matrix::new(&v, 3, 2);
        let y = vec![0, 1, 0];
        let rows: Vec<usize> = (0..3).collect();
        assert!(find_best_split(&data, &rows, &y, Criterion::Entropy).is_none());
    }

    #[test]
    fn test_best_split_tie_takes_first_feature() {
        // Both features are copies of each other, gains are identical.
        let v: Vec<u16> = vec![0, 0, 1, 1, 0, 0, 1, 1];
        let data = Matrix::new(&v, 4, 2);
        let y = vec![0, 0, 1, 1];
        let rows: Vec<usize> = (0..4).collect();
        let split = find_best_split(&data, &rows, &y, Criterion::Gini).unwrap();
        assert_eq!(split.split_feature, 0);
    }

    #[test]
    fn test_best_split_zero_gain_still_selected() {
        // Splittable feature, but the labels are identical in every child;
        // the split is still reported, with zero gain.
        let v: Vec<u16> = vec![0, 1, 0, 1];
        let data = Matrix::new(&v, 4, 1);
        let y = vec![0, 0, 1, 1];
        let rows: Vec<usize> = (0..4).collect();
        let split = find_best_split(&data, &rows, &y, Criterion::Gini).unwrap();
        assert_eq!(split.split_feature, 0);
        assert!(split.split_gain.abs() < 1e-9);
    }

    #[test]
    fn test_best_split_respects_row_subset() {
        // Restricted to rows 0 and 1, feature 0 is constant and feature 1
        // splits.
        let v: Vec<u16> = vec![
            5, 5, 6, 6, // feature 0
            0, 1, 0, 1, // feature 1
        ];
        let data = Matrix::new(&v, 4, 2);
        let y = vec![0, 1, 0, 1];
        let split = find_best_split(&data, &[0, 1], &y, Criterion::Entropy).unwrap();
        assert_eq!(split.split_feature, 1);
    }
}
