use log::debug;

use crate::algorithms::resolve_weights;
use crate::core::ranking::sort_ranking;
use crate::core::{DecisionMatrix, Norm, Normaliser, RankError, RankedAlternative};
use crate::metrics::distance;
use crate::utils::pareto_front;

/// Rank alternatives with the Technique for Order of Preference by
/// Similarity to Ideal Solution (TOPSIS).
///
/// The ideal point is the per-criterion minimum and the nadir point the
/// per-criterion maximum over the Pareto front of the raw matrix. Anchoring
/// both points on the front, rather than on the whole matrix as classical
/// TOPSIS does, is the defining decision of this variant: dominated
/// alternatives cannot stretch the reference interval.
///
/// The matrix and both anchor points are normalised with the identical
/// procedure (the points through the one-row-matrix path), and the distance
/// metric is the one matched to the normalisation convention. The score of
/// alternative `i` is
///
/// `d_nadir / (d_star + d_nadir)`
///
/// where `d_star` and `d_nadir` are the distances of the normalised row to
/// the normalised ideal and nadir points. A zero denominator, or ideal and
/// nadir points that coincide (a single-member front), is a perfect match
/// and scores 1.0 instead of an undefined ratio.
pub struct Topsis<'a> {
    matrix: &'a DecisionMatrix,
    weights: Vec<f64>,
    norm: Norm,
}

impl<'a> Topsis<'a> {
    /// Set up the scorer. This returns an error if the weight vector length
    /// does not match the number of criteria.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The decision matrix (minimised criteria).
    /// * `weights`: The scaling weights, one per criterion. All ones when
    ///   `None`.
    /// * `norm`: The normalisation convention. Defaults to [`Norm::L2`].
    ///
    /// returns: `Result<Topsis, RankError>`
    pub fn new(
        matrix: &'a DecisionMatrix,
        weights: Option<Vec<f64>>,
        norm: Option<Norm>,
    ) -> Result<Self, RankError> {
        let weights = resolve_weights(matrix, weights)?;
        Ok(Self {
            matrix,
            weights,
            norm: norm.unwrap_or(Norm::L2),
        })
    }

    /// Rank the alternatives. Scores lie in `[0, 1]`, larger is better, and
    /// the result is sorted descending with ties in row order.
    ///
    /// returns: `Result<Vec<RankedAlternative>, RankError>`
    pub fn rank(&self) -> Result<Vec<RankedAlternative>, RankError> {
        let number_of_alternatives = self.matrix.number_of_alternatives();

        let mut front = pareto_front(self.matrix);
        if front.is_empty() {
            front = (0..number_of_alternatives).collect();
        }
        let ideal = self.matrix.column_min_over(&front)?;
        let nadir = self.matrix.column_max_over(&front)?;
        debug!("Ideal point {:?}, nadir point {:?}", ideal, nadir);

        // a single-member front collapses both anchors onto one point; every
        // alternative is then a perfect match by convention
        let anchors_coincide = ideal == nadir;

        let normaliser = Normaliser::new(self.norm, &self.weights);
        let normalised = normaliser.normalise(self.matrix);
        let ideal = normaliser.normalise_point(&ideal);
        let nadir = normaliser.normalise_point(&nadir);

        let metric = self.norm.distance_metric();
        let mut scores = Vec::with_capacity(number_of_alternatives);
        for row in &normalised {
            let d_star = distance(row, &ideal, metric)?;
            let d_nadir = distance(row, &nadir, metric)?;
            let denominator = d_star + d_nadir;
            let score = if anchors_coincide || denominator == 0.0 {
                1.0
            } else {
                d_nadir / denominator
            };
            scores.push(score);
        }

        Ok(sort_ranking(scores))
    }
}
