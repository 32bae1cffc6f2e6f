use crate::core::DecisionMatrix;

/// The Pareto-dominance relation between two alternatives when every
/// criterion is minimised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dominance {
    /// The first alternative dominates the second.
    First,
    /// The second alternative dominates the first.
    Second,
    /// Neither dominates the other. Identical vectors fall in this case: tie
    /// alternatives do not dominate each other.
    Neither,
}

/// Get the dominance relation between two criterion vectors. An alternative
/// dominates another if it is smaller or equal on every criterion and
/// strictly smaller on at least one.
///
/// # Arguments
///
/// * `first`: The criterion values of the first alternative.
/// * `second`: The criterion values of the second alternative.
///
/// returns: `Dominance`
pub fn compare(first: &[f64], second: &[f64]) -> Dominance {
    let mut relation = Dominance::Neither;
    for (a, b) in first.iter().zip(second) {
        if a < b {
            if relation == Dominance::Second {
                // each is better somewhere
                return Dominance::Neither;
            }
            relation = Dominance::First;
        } else if a > b {
            if relation == Dominance::First {
                return Dominance::Neither;
            }
            relation = Dominance::Second;
        }
    }
    relation
}

/// Calculate the Pareto front of the matrix: the indexes of the alternatives
/// that no other alternative dominates.
///
/// The front is found by pairwise comparison with complexity O(m²·n), which
/// is adequate for interactive-scale matrices (tens to low thousands of
/// alternatives) but not beyond.
///
/// # Arguments
///
/// * `matrix`: The decision matrix (minimised criteria).
///
/// returns: `Vec<usize>` The front, in ascending row order.
pub fn pareto_front(matrix: &DecisionMatrix) -> Vec<usize> {
    let all: Vec<usize> = (0..matrix.number_of_alternatives()).collect();
    pareto_front_among(matrix, &all)
}

/// Calculate the Pareto front within a subset of the matrix rows. Dominance
/// is only checked against other members of the subset.
///
/// # Arguments
///
/// * `matrix`: The decision matrix (minimised criteria).
/// * `indexes`: The row indexes forming the subset.
///
/// returns: `Vec<usize>` The non-dominated subset members, in the order they
/// appear in `indexes`.
pub fn pareto_front_among(matrix: &DecisionMatrix, indexes: &[usize]) -> Vec<usize> {
    indexes
        .iter()
        .copied()
        .filter(|i| {
            !indexes
                .iter()
                .any(|j| j != i && compare(matrix.row(*j), matrix.row(*i)) == Dominance::First)
        })
        .collect()
}

/// Sort all alternatives into Pareto layers: the first layer is the front of
/// the whole matrix, the second the front of the remainder once the first
/// layer is removed, and so on until every alternative is placed. The layers
/// are disjoint and exhaust all rows.
///
/// If an extracted front ever comes back empty while rows remain (it cannot
/// under the dominance semantics above, but the loop must not rely on that),
/// the remaining rows close the layering as a single final layer.
///
/// # Arguments
///
/// * `matrix`: The decision matrix (minimised criteria).
///
/// returns: `Vec<Vec<usize>>` The layers, best first.
pub fn pareto_layers(matrix: &DecisionMatrix) -> Vec<Vec<usize>> {
    let mut remaining: Vec<usize> = (0..matrix.number_of_alternatives()).collect();
    let mut layers: Vec<Vec<usize>> = Vec::new();

    while !remaining.is_empty() {
        let front = pareto_front_among(matrix, &remaining);
        if front.is_empty() {
            layers.push(remaining);
            break;
        }
        remaining.retain(|i| !front.contains(i));
        layers.push(front);
    }
    layers
}

#[cfg(test)]
mod test {
    use crate::core::DecisionMatrix;
    use crate::utils::{compare, pareto_front, pareto_layers, Dominance};

    #[test]
    fn test_compare() {
        assert_eq!(compare(&[1.0, 1.0], &[2.0, 2.0]), Dominance::First);
        assert_eq!(compare(&[2.0, 2.0], &[1.0, 1.0]), Dominance::Second);
        // equal on one criterion, strictly better on the other
        assert_eq!(compare(&[1.0, 1.0], &[1.0, 2.0]), Dominance::First);
        // each better somewhere
        assert_eq!(compare(&[1.0, 3.0], &[2.0, 1.0]), Dominance::Neither);
        // identical vectors do not dominate each other
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 2.0]), Dominance::Neither);
    }

    #[test]
    /// Row 0 dominates row 1 (strictly better on both criteria) and row 2
    /// (equal on the first, strictly better on the second).
    fn test_front() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![1.0, 2.0],
        ])
        .unwrap();
        assert_eq!(pareto_front(&matrix), vec![0]);
    }

    #[test]
    /// Mutually non-dominated rows all belong to the front.
    fn test_front_all_non_dominated() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
        ])
        .unwrap();
        assert_eq!(pareto_front(&matrix), vec![0, 1, 2]);
    }

    #[test]
    /// Layering on a 2-criteria staircase. The expected layers were manually
    /// calculated by plotting the criterion values.
    fn test_layers_2_criteria() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.1, 8.1],
            vec![2.1, 6.1],
            vec![3.1, 4.1],
            vec![3.1, 7.1],
            vec![5.1, 3.1],
            vec![5.1, 5.1],
            vec![7.1, 7.1],
            vec![8.1, 2.1],
            vec![10.1, 6.1],
            vec![11.1, 1.1],
            vec![11.1, 3.1],
        ])
        .unwrap();

        let layers = pareto_layers(&matrix);
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0], vec![0, 1, 2, 4, 7, 9]);
        assert_eq!(layers[1], vec![3, 5, 10]);
        assert_eq!(layers[2], vec![6, 8]);
    }

    #[test]
    /// Layering on 3 criteria. The expected layers were manually calculated
    /// by plotting the criterion values.
    fn test_layers_3_criteria() {
        let matrix = DecisionMatrix::new(vec![
            vec![2.1, 3.1, 4.1],
            vec![-1.1, 4.1, 8.1],
            vec![0.1, -1.1, -2.1],
            vec![0.1, 0.1, 0.1],
        ])
        .unwrap();

        let layers = pareto_layers(&matrix);
        assert_eq!(layers, vec![vec![1, 2], vec![3], vec![0]]);
    }

    #[test]
    /// The layering partitions all rows: disjoint layers whose union is the
    /// full index range.
    fn test_layers_partition_rows() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 0.5],
            vec![3.0, 3.0],
        ])
        .unwrap();

        let layers = pareto_layers(&matrix);
        let mut all: Vec<usize> = layers.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    #[test]
    /// Identical rows are one single layer: ties do not dominate each other.
    fn test_layers_identical_rows() {
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
        ])
        .unwrap();
        assert_eq!(pareto_layers(&matrix), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_single_row() {
        let matrix = DecisionMatrix::new(vec![vec![4.0, 2.0]]).unwrap();
        assert_eq!(pareto_front(&matrix), vec![0]);
        assert_eq!(pareto_layers(&matrix), vec![vec![0]]);
    }
}
