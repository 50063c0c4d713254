use hashbrown::HashMap;

/// Tally the occurrences of each label in a subset.
#[inline]
pub fn label_counts(y: &[usize]) -> HashMap<usize, usize> {
    let mut counts = HashMap::new();
    for label in y {
        *counts.entry(*label).or_insert(0) += 1;
    }
    counts
}

/// The most frequent label in a tally, ties resolved to the lowest label.
///
/// Both the leaf emission in the grower and the unseen-category fallback in
/// prediction route through here, so the tie-break cannot diverge between
/// the two sites.
#[inline]
pub fn most_frequent_label(counts: &HashMap<usize, usize>) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (&label, &count) in counts.iter() {
        best = match best {
            None => Some((label, count)),
            Some((b_label, b_count)) => {
                if count > b_count || (count == b_count && label < b_label) {
                    Some((label, count))
                } else {
                    Some((b_label, b_count))
                }
            }
        };
    }
    best.map(|(label, _)| label)
}

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}
