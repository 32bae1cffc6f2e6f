use log::debug;

use crate::algorithms::resolve_weights;
use crate::core::ranking::sort_ranking;
use crate::core::{DecisionMatrix, Norm, Normaliser, RankError, RankedAlternative};
use crate::metrics::distance;
use crate::utils::{dot_product, pareto_layers, rescale_unit};

/// Rank alternatives with a skeleton-line compromise method (SP-CS).
///
/// An aspiration point `a` and a status-quo point `b` span the compromise
/// segment `L(t) = a + t·(b − a)` with `t ∈ [0, 1]`: `a` is the centroid of
/// the first Pareto layer and `b` the centroid of the last one. When the
/// matrix has fewer than two layers, the global per-criterion minimum and
/// maximum vectors stand in for `a` and `b`.
///
/// The matrix and both points are normalised with the identical procedure.
/// Each alternative is projected onto the segment with the scalar
/// dot-product projection, clamped to `[0, 1]`: a projection falling outside
/// the segment snaps to the nearer endpoint, which deliberately rewards
/// direct distance to the segment over extrapolated position. A zero-length
/// segment fixes `t = 0` with projection `a` for every row.
///
/// The raw score `t + distance(row, projection)` is smaller-is-better
/// (close to the aspiration end and near the compromise line); it is min-max
/// rescaled and inverted so that larger is better, with the neutral 0.5
/// fallback when the raw spread is zero.
pub struct SpCs<'a> {
    matrix: &'a DecisionMatrix,
    weights: Vec<f64>,
    norm: Norm,
}

impl<'a> SpCs<'a> {
    /// Set up the scorer. This returns an error if the weight vector length
    /// does not match the number of criteria.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The decision matrix (minimised criteria).
    /// * `weights`: The scaling weights, one per criterion. All ones when
    ///   `None`.
    /// * `norm`: The normalisation convention. Defaults to [`Norm::LInf`].
    ///
    /// returns: `Result<SpCs, RankError>`
    pub fn new(
        matrix: &'a DecisionMatrix,
        weights: Option<Vec<f64>>,
        norm: Option<Norm>,
    ) -> Result<Self, RankError> {
        let weights = resolve_weights(matrix, weights)?;
        Ok(Self {
            matrix,
            weights,
            norm: norm.unwrap_or(Norm::LInf),
        })
    }

    /// Rank the alternatives. Scores lie in `[0, 1]`, larger is better, and
    /// the result is sorted descending with ties in row order.
    ///
    /// returns: `Result<Vec<RankedAlternative>, RankError>`
    pub fn rank(&self) -> Result<Vec<RankedAlternative>, RankError> {
        let layers = pareto_layers(self.matrix);
        let (aspiration, status_quo) = if layers.len() < 2 {
            (self.matrix.column_min(), self.matrix.column_max())
        } else {
            (
                self.matrix.centroid(&layers[0])?,
                self.matrix.centroid(&layers[layers.len() - 1])?,
            )
        };
        debug!(
            "Aspiration point {:?}, status-quo point {:?}",
            aspiration, status_quo
        );

        let normaliser = Normaliser::new(self.norm, &self.weights);
        let normalised = normaliser.normalise(self.matrix);
        let aspiration = normaliser.normalise_point(&aspiration);
        let status_quo = normaliser.normalise_point(&status_quo);

        let direction: Vec<f64> = status_quo
            .iter()
            .zip(&aspiration)
            .map(|(b, a)| b - a)
            .collect();
        let direction_sq = dot_product(&direction, &direction)?;

        let metric = self.norm.distance_metric();
        let mut raw_scores = Vec::with_capacity(self.matrix.number_of_alternatives());
        for row in &normalised {
            let (t, projection) = if direction_sq == 0.0 {
                // zero-length segment: everything projects onto the
                // aspiration point
                (0.0, aspiration.clone())
            } else {
                let offset: Vec<f64> = row.iter().zip(&aspiration).map(|(x, a)| x - a).collect();
                let t = (dot_product(&offset, &direction)? / direction_sq).clamp(0.0, 1.0);
                let projection = aspiration
                    .iter()
                    .zip(&direction)
                    .map(|(a, d)| a + t * d)
                    .collect();
                (t, projection)
            };
            raw_scores.push(t + distance(row, &projection, metric)?);
        }

        // smaller raw score is better; rescale and invert
        let scores = rescale_unit(&raw_scores)?
            .iter()
            .map(|s| 1.0 - s)
            .collect();
        Ok(sort_ranking(scores))
    }
}
