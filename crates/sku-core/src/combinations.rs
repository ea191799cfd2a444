//! Cartesian product over ordered axes.

/// Every combination of one value per axis, last axis varying fastest.
///
/// Axes are processed in order; each partial combination is expanded once
/// per value of the next axis. An empty axis list yields a single empty
/// combination, and any axis without values yields no combinations at all.
///
/// ```
/// use sku_core::generate_combinations;
///
/// let axes = vec![("color", vec!["RD", "BL"]), ("size", vec!["SM", "LG"])];
/// let combos = generate_combinations(&axes);
/// assert_eq!(combos[1], vec!["RD", "LG"]);
/// assert_eq!(combos.len(), 4);
/// ```
pub fn generate_combinations<K, T: Clone>(axes: &[(K, Vec<T>)]) -> Vec<Vec<T>> {
    let mut result: Vec<Vec<T>> = vec![Vec::with_capacity(axes.len())];
    for (_, values) in axes {
        let mut expanded = Vec::with_capacity(result.len().saturating_mul(values.len()));
        for partial in &result {
            for value in values {
                let mut combination = Vec::with_capacity(axes.len());
                combination.extend(partial.iter().cloned());
                combination.push(value.clone());
                expanded.push(combination);
            }
        }
        result = expanded;
    }
    result
}

/// Size of the product, or `None` when it does not fit in `usize`.
pub fn combination_count<K, T>(axes: &[(K, Vec<T>)]) -> Option<usize> {
    axes.iter()
        .try_fold(1usize, |count, (_, values)| count.checked_mul(values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_axis_set_yields_identity() {
        let axes: Vec<(&str, Vec<&str>)> = Vec::new();
        let combos = generate_combinations(&axes);
        assert_eq!(combos, vec![Vec::<&str>::new()]);
        assert_eq!(combination_count(&axes), Some(1));
    }

    #[test]
    fn axis_without_values_empties_the_product() {
        let axes = vec![("color", vec!["RD", "BL"]), ("size", Vec::new())];
        assert!(generate_combinations(&axes).is_empty());
        assert_eq!(combination_count(&axes), Some(0));
    }

    #[test]
    fn last_axis_varies_fastest() {
        let axes = vec![("a", vec![1, 2]), ("b", vec![10, 20, 30])];
        let combos = generate_combinations(&axes);
        assert_eq!(
            combos,
            vec![
                vec![1, 10],
                vec![1, 20],
                vec![1, 30],
                vec![2, 10],
                vec![2, 20],
                vec![2, 30],
            ]
        );
    }

    #[test]
    fn count_detects_overflow() {
        let wide: Vec<u8> = vec![0; 1 << 16];
        let axes: Vec<(usize, Vec<u8>)> = (0..5).map(|i| (i, wide.clone())).collect();
        assert_eq!(combination_count(&axes), None);
    }
}
