use serde::{Deserialize, Serialize};

use crate::core::RankError;
use crate::utils::{vector_max, vector_min};

/// An m×n matrix of criterion values where row `i` holds the values of
/// alternative `i` and column `j` holds criterion `j`. The row index is the
/// stable identity of an alternative throughout scoring. All criteria are
/// assumed to be minimised; columns whose criterion is maximised must be
/// inverted by the caller before the matrix is built.
///
/// Construction validates the shape once, so that every scorer can rely on a
/// rectangular matrix of finite numbers with at least one alternative and one
/// criterion. The matrix is never mutated by any scorer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Build the matrix from a vector of alternative rows. This returns an
    /// error if the matrix or its first row is empty, if any row has a
    /// different number of criteria than the first, or if any value is NaN
    /// or infinite.
    ///
    /// # Arguments
    ///
    /// * `rows`: The criterion values, one nested vector per alternative.
    ///
    /// returns: `Result<DecisionMatrix, RankError>`
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, RankError> {
        let number_of_criteria = match rows.first() {
            None => return Err(RankError::EmptyMatrix),
            Some(first) if first.is_empty() => return Err(RankError::EmptyMatrix),
            Some(first) => first.len(),
        };

        for (i, row) in rows.iter().enumerate() {
            if row.len() != number_of_criteria {
                return Err(RankError::JaggedMatrix(i, row.len(), number_of_criteria));
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(RankError::NonFiniteValue(i, j));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Get the number of alternatives (matrix rows).
    pub fn number_of_alternatives(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of criteria (matrix columns).
    pub fn number_of_criteria(&self) -> usize {
        self.rows[0].len()
    }

    /// Get the criterion values of one alternative.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Get all alternative rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Calculate the minimum of every criterion column over all alternatives.
    pub fn column_min(&self) -> Vec<f64> {
        (0..self.number_of_criteria())
            .map(|j| {
                self.rows
                    .iter()
                    .map(|row| row[j])
                    .fold(f64::INFINITY, f64::min)
            })
            .collect()
    }

    /// Calculate the maximum of every criterion column over all alternatives.
    pub fn column_max(&self) -> Vec<f64> {
        (0..self.number_of_criteria())
            .map(|j| {
                self.rows
                    .iter()
                    .map(|row| row[j])
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Calculate the minimum of every criterion column over a subset of
    /// alternatives. This returns an error if `indexes` is empty.
    ///
    /// # Arguments
    ///
    /// * `indexes`: The row indexes of the alternatives to scan.
    ///
    /// returns: `Result<Vec<f64>, RankError>`
    pub fn column_min_over(&self, indexes: &[usize]) -> Result<Vec<f64>, RankError> {
        (0..self.number_of_criteria())
            .map(|j| {
                let values: Vec<f64> = indexes.iter().map(|i| self.rows[*i][j]).collect();
                vector_min(&values)
            })
            .collect()
    }

    /// Calculate the maximum of every criterion column over a subset of
    /// alternatives. This returns an error if `indexes` is empty.
    ///
    /// # Arguments
    ///
    /// * `indexes`: The row indexes of the alternatives to scan.
    ///
    /// returns: `Result<Vec<f64>, RankError>`
    pub fn column_max_over(&self, indexes: &[usize]) -> Result<Vec<f64>, RankError> {
        (0..self.number_of_criteria())
            .map(|j| {
                let values: Vec<f64> = indexes.iter().map(|i| self.rows[*i][j]).collect();
                vector_max(&values)
            })
            .collect()
    }

    /// Calculate the centroid (per-column mean) of a subset of alternatives.
    /// This returns an error if `indexes` is empty.
    ///
    /// # Arguments
    ///
    /// * `indexes`: The row indexes of the alternatives to aggregate.
    ///
    /// returns: `Result<Vec<f64>, RankError>`
    pub fn centroid(&self, indexes: &[usize]) -> Result<Vec<f64>, RankError> {
        if indexes.is_empty() {
            return Err(RankError::Generic(
                "Cannot calculate the centroid of an empty set of alternatives".to_string(),
            ));
        }
        let centroid = (0..self.number_of_criteria())
            .map(|j| {
                indexes.iter().map(|i| self.rows[*i][j]).sum::<f64>() / indexes.len() as f64
            })
            .collect();
        Ok(centroid)
    }
}
