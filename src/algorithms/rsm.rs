use log::debug;

use crate::algorithms::resolve_weights;
use crate::core::ranking::sort_ranking;
use crate::core::{DecisionMatrix, Norm, Normaliser, RankError, RankedAlternative};
use crate::metrics::distance;
use crate::utils::{pareto_layers, rescale_unit};

/// Rank alternatives with the Reference Set Method (RSM).
///
/// The matrix is sorted into Pareto layers; the first layer is the best
/// reference set and the last layer the worst one. Each set is aggregated
/// into its centroid, the matrix and both centroids are normalised with the
/// identical procedure, and each alternative is scored by
///
/// `distance-to-worst-centroid − distance-to-best-centroid`
///
/// under the metric matched to the normalisation convention (far from the
/// worst set and close to the best set is good). The raw scores are min-max
/// rescaled to `[0, 1]`; a zero raw-score spread rescales every alternative
/// to the neutral 0.5.
///
/// A matrix with a single Pareto layer makes the best and worst reference
/// sets coincide; every raw score is then zero and the whole ranking comes
/// out at 0.5 in row order. This is tolerated, not rejected.
pub struct Rsm<'a> {
    matrix: &'a DecisionMatrix,
    weights: Vec<f64>,
    norm: Norm,
}

impl<'a> Rsm<'a> {
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
    /// returns: `Result<Rsm, RankError>`
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
        let layers = pareto_layers(self.matrix);
        let (best, worst) = match (layers.first(), layers.last()) {
            (Some(best), Some(worst)) => (best, worst),
            _ => {
                // cannot happen for a shape-valid matrix; score by the raw
                // criterion mean so the call stays total
                debug!("No Pareto layers found, falling back to criterion means");
                let scores = self
                    .matrix
                    .rows()
                    .iter()
                    .map(|row| row.iter().sum::<f64>() / row.len() as f64)
                    .collect();
                return Ok(sort_ranking(scores));
            }
        };

        let best_centroid = self.matrix.centroid(best)?;
        let worst_centroid = self.matrix.centroid(worst)?;
        debug!(
            "Best reference centroid {:?}, worst reference centroid {:?}",
            best_centroid, worst_centroid
        );

        let normaliser = Normaliser::new(self.norm, &self.weights);
        let normalised = normaliser.normalise(self.matrix);
        let best_centroid = normaliser.normalise_point(&best_centroid);
        let worst_centroid = normaliser.normalise_point(&worst_centroid);

        let metric = self.norm.distance_metric();
        let mut raw_scores = Vec::with_capacity(self.matrix.number_of_alternatives());
        for row in &normalised {
            let d_worst = distance(row, &worst_centroid, metric)?;
            let d_best = distance(row, &best_centroid, metric)?;
            raw_scores.push(d_worst - d_best);
        }

        let scores = rescale_unit(&raw_scores)?;
        Ok(sort_ranking(scores))
    }
}
