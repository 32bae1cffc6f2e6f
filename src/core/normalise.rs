use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{DecisionMatrix, RankError};
use crate::metrics::DistanceMetric;

/// The convention used to rescale the criterion columns of a decision matrix
/// so that criteria with different units become comparable. The convention
/// also dictates, via [`Norm::distance_metric`], the distance metric every
/// scorer must use downstream; the two choices are never independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Norm {
    /// Divide each column by the sum of its absolute values.
    L1,
    /// Divide each column by its Euclidean (root-sum-of-squares) norm.
    L2,
    /// Divide each column by its maximum absolute value.
    LInf,
    /// Shift each column by its minimum, then divide by its max-min spread.
    /// This is the only convention that shifts before scaling.
    Range,
}

impl Norm {
    /// Get the distance metric matched to this convention. The mapping is
    /// fixed: `Range` has no metric of its own and maps to the Euclidean
    /// distance, every other convention maps to its namesake.
    pub fn distance_metric(&self) -> DistanceMetric {
        match self {
            Norm::L1 => DistanceMetric::L1,
            Norm::L2 => DistanceMetric::L2,
            Norm::LInf => DistanceMetric::LInf,
            Norm::Range => DistanceMetric::L2,
        }
    }
}

impl FromStr for Norm {
    type Err = RankError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "l1" => Ok(Norm::L1),
            "l2" => Ok(Norm::L2),
            "linf" => Ok(Norm::LInf),
            "range" => Ok(Norm::Range),
            _ => Err(RankError::UnsupportedNorm(tag.to_string())),
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Norm::L1 => write!(f, "l1"),
            Norm::L2 => write!(f, "l2"),
            Norm::LInf => write!(f, "linf"),
            Norm::Range => write!(f, "range"),
        }
    }
}

/// Column-wise normalisation of a decision matrix under a [`Norm`]
/// convention, followed by per-criterion scaling weights.
///
/// A column whose divisor is exactly zero (an all-zero column for `L1`, `L2`
/// and `LInf`, a constant column for `Range`) keeps the divisor at 1.0 so
/// the column comes out exactly zero instead of raising a division error.
///
/// The same procedure normalises single reference vectors (ideal and nadir
/// points, reference centroids) by treating them as a one-row matrix. Point
/// normalisation is therefore matrix-relative: a vector normalised alone and
/// the same vector normalised as a row of a larger matrix do not agree, and
/// scorers rely on exactly this symmetry to keep their anchors in the same
/// normalised space convention as the full matrix.
pub struct Normaliser<'a> {
    norm: Norm,
    /// Scaling weights, one per criterion. The caller must resolve and
    /// validate the length against the matrix before building the struct.
    weights: &'a [f64],
}

impl<'a> Normaliser<'a> {
    /// Build the normaliser for a convention and a weight slice.
    ///
    /// # Arguments
    ///
    /// * `norm`: The normalisation convention.
    /// * `weights`: The scaling weights, one per criterion.
    ///
    /// returns: `Normaliser`
    pub fn new(norm: Norm, weights: &'a [f64]) -> Self {
        Self { norm, weights }
    }

    /// Normalise and weight all columns of a decision matrix.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The matrix to normalise. The input is not modified.
    ///
    /// returns: `Vec<Vec<f64>>` The normalised rows, in the input row order.
    pub fn normalise(&self, matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        self.normalise_rows(matrix.rows())
    }

    /// Normalise a single reference vector through the one-row-matrix path.
    ///
    /// # Arguments
    ///
    /// * `point`: The reference vector (for example an ideal point).
    ///
    /// returns: `Vec<f64>` The normalised and weighted vector.
    pub fn normalise_point(&self, point: &[f64]) -> Vec<f64> {
        let mut rows = self.normalise_rows(&[point.to_vec()]);
        rows.remove(0)
    }

    fn normalise_rows(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let number_of_criteria = rows.first().map_or(0, |row| row.len());

        let mut shifts = vec![0.0; number_of_criteria];
        let mut divisors = vec![1.0; number_of_criteria];
        for j in 0..number_of_criteria {
            let column: Vec<f64> = rows.iter().map(|row| row[j]).collect();
            let divisor = match self.norm {
                Norm::L1 => column.iter().map(|v| v.abs()).sum::<f64>(),
                Norm::L2 => column.iter().map(|v| v.powi(2)).sum::<f64>().sqrt(),
                Norm::LInf => column.iter().map(|v| v.abs()).fold(0.0, f64::max),
                Norm::Range => {
                    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    shifts[j] = min;
                    max - min
                }
            };
            // a zero divisor would blow up the division; keeping 1.0 turns the
            // column into an exact zero column instead
            if divisor != 0.0 {
                divisors[j] = divisor;
            }
        }
        debug!("Column shifts {:?}, divisors {:?}", shifts, divisors);

        rows.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, value)| (value - shifts[j]) / divisors[j] * self.weights[j])
                    .collect()
            })
            .collect()
    }
}
