//! Cartesian product over candidate lists.

/// Returns every combination taking one element from each list.
///
/// Combinations are produced in odometer order: the last list varies
/// fastest. The product of no lists is a single empty combination, and any
/// empty list makes the whole product empty.
pub(crate) fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut combos: Vec<Vec<T>> = vec![Vec::with_capacity(lists.len())];
    for list in lists {
        let mut next = Vec::with_capacity(combos.len().saturating_mul(list.len()));
        for prefix in &combos {
            for item in list {
                let mut combo = Vec::with_capacity(lists.len());
                combo.extend_from_slice(prefix);
                combo.push(item.clone());
                next.push(combo);
            }
        }
        combos = next;
    }
    combos
}

/// Number of combinations [`cartesian_product`] would produce, saturating at `usize::MAX`.
pub(crate) fn product_len(lens: impl IntoIterator<Item = usize>) -> usize {
    lens.into_iter().fold(1, usize::saturating_mul)
}
