use super::tree::{Node, Tree};
use crate::data::Matrix;
use crate::utils::most_frequent_label;
use hashbrown::HashMap;
use rayon::prelude::*;

/// Fallback label for a feature value with no matching child: a majority
/// vote over the branch's existing children, each leaf child voting with
/// its training sample count. Branch children carry no label of their own
/// and do not vote. An empty pool resolves to label 0.
fn sibling_vote(children: &HashMap<u16, Node>) -> usize {
    let mut votes: HashMap<usize, usize> = HashMap::new();
    for child in children.values() {
        if let Node::Leaf { value, n_samples } = child {
            *votes.entry(*value).or_insert(0) += *n_samples;
        }
    }
    most_frequent_label(&votes).unwrap_or(0)
}

impl Tree {
    /// Predict the label for a single feature vector.
    pub fn predict_row(&self, row: &[u16]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value, .. } => return *value,
                Node::Branch { feature, children, .. } => match children.get(&row[*feature]) {
                    Some(child) => node = child,
                    None => return sibling_vote(children),
                },
            }
        }
    }

    fn predict_single_threaded(&self, data: &Matrix<u16>) -> Vec<usize> {
        data.index.iter().map(|&i| self.predict_row(&data.get_row(i))).collect()
    }

    fn predict_parallel(&self, data: &Matrix<u16>) -> Vec<usize> {
        data.index
            .par_iter()
            .map(|&i| self.predict_row(&data.get_row(i)))
            .collect()
    }

    /// Predict a label for every row of `data`.
    pub fn predict(&self, data: &Matrix<u16>, parallel: bool) -> Vec<usize> {
        if parallel {
            self.predict_parallel(data)
        } else {
            self.predict_single_threaded(data)
        }
    }
}
