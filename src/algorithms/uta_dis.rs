use crate::core::ranking::sort_ranking;
use crate::core::{DecisionMatrix, RankedAlternative};

/// Rank alternatives with a simplified additive-utility method (UTA-DIS).
///
/// Each criterion value is mapped to a marginal utility in `[0, 1]` by
/// min-max rescaling over the whole column and inverting (criteria are
/// minimised, so the smallest raw value has utility 1). A column with no
/// spread keeps a divisor of 1.0 and contributes a constant full utility.
/// The alternative's score is the mean of its marginal utilities: equal
/// weights `1/n`, no preference elicitation, no monotonicity constraints
/// and no linear-programming fit. The method is a deliberate placeholder
/// for a full UTA-Star estimator and takes neither a weight vector nor a
/// normalisation convention.
pub struct UtaDis<'a> {
    matrix: &'a DecisionMatrix,
}

impl<'a> UtaDis<'a> {
    /// Set up the scorer.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The decision matrix (minimised criteria).
    ///
    /// returns: `UtaDis`
    pub fn new(matrix: &'a DecisionMatrix) -> Self {
        Self { matrix }
    }

    /// Rank the alternatives. Scores lie in `[0, 1]`, larger is better, and
    /// the result is sorted descending with ties in row order.
    ///
    /// returns: `Vec<RankedAlternative>`
    pub fn rank(&self) -> Vec<RankedAlternative> {
        let mins = self.matrix.column_min();
        let maxs = self.matrix.column_max();
        let divisors: Vec<f64> = maxs
            .iter()
            .zip(&mins)
            .map(|(max, min)| {
                let divisor = max - min;
                if divisor == 0.0 {
                    1.0
                } else {
                    divisor
                }
            })
            .collect();

        let weight = 1.0 / self.matrix.number_of_criteria() as f64;
        let scores = self
            .matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, value)| (1.0 - (value - mins[j]) / divisors[j]) * weight)
                    .sum()
            })
            .collect();

        sort_ranking(scores)
    }
}
