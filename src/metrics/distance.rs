use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::RankError;

/// The metric used to measure the distance between two criterion vectors.
/// Scorers never pick a metric directly; they use the one matched to the
/// normalisation convention by [`crate::core::Norm::distance_metric`], so
/// normalisation and distance always follow the same convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Sum of absolute differences.
    L1,
    /// Euclidean norm of the difference.
    L2,
    /// Maximum absolute difference.
    LInf,
}

impl FromStr for DistanceMetric {
    type Err = RankError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "l1" => Ok(DistanceMetric::L1),
            "l2" => Ok(DistanceMetric::L2),
            "linf" => Ok(DistanceMetric::LInf),
            _ => Err(RankError::UnsupportedMetric(tag.to_string())),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::L1 => write!(f, "l1"),
            DistanceMetric::L2 => write!(f, "l2"),
            DistanceMetric::LInf => write!(f, "linf"),
        }
    }
}

/// Calculate the distance between two equal-length vectors under the chosen
/// metric. This returns an error if the vector lengths do not match.
///
/// # Arguments
///
/// * `a`: The first vector.
/// * `b`: The second vector.
/// * `metric`: The distance metric.
///
/// returns: `Result<f64, RankError>` A non-negative distance.
pub fn distance(a: &[f64], b: &[f64], metric: DistanceMetric) -> Result<f64, RankError> {
    if a.len() != b.len() {
        return Err(RankError::Generic(format!(
            "The length of vector a ({}) must match the length of vector b ({})",
            a.len(),
            b.len()
        )));
    }

    let distance = match metric {
        DistanceMetric::L1 => a.iter().zip(b).map(|(a_k, b_k)| (a_k - b_k).abs()).sum(),
        DistanceMetric::L2 => a
            .iter()
            .zip(b)
            .map(|(a_k, b_k)| (a_k - b_k).powi(2))
            .sum::<f64>()
            .sqrt(),
        DistanceMetric::LInf => a
            .iter()
            .zip(b)
            .map(|(a_k, b_k)| (a_k - b_k).abs())
            .fold(0.0, f64::max),
    };
    Ok(distance)
}
