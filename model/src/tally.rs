use abstutil::Counter;

/// The most common key and how often it occurs. When several keys tie, the first one in key
/// order wins.
pub fn mode<T: Ord + PartialEq + Clone>(counter: &Counter<T>) -> Option<(T, usize)> {
    let mut best: Option<(&T, usize)> = None;
    for (key, count) in counter.borrow() {
        if best.map(|(_, max)| *count > max).unwrap_or(true) {
            best = Some((key, *count));
        }
    }
    best.map(|(key, count)| (key.clone(), count))
}

/// Sorted by descending count, ties in key order
pub fn descending<T: Ord + PartialEq + Clone>(counter: Counter<T>) -> Vec<(T, usize)> {
    let mut list: Vec<(T, usize)> = counter.consume().into_iter().collect();
    list.sort_by(|a, b| b.1.cmp(&a.1));
    list
}
