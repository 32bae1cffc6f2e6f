use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use rsm::Rsm;
pub use spcs::SpCs;
pub use topsis::Topsis;
pub use uta_dis::UtaDis;

use crate::core::{DecisionMatrix, Norm, RankError, RankedAlternative};

mod rsm;
mod spcs;
mod topsis;
mod uta_dis;

/// The selections a caller makes for one ranking call. There is no implicit
/// state anywhere in the library: whatever a presentation layer keeps (the
/// chosen convention, the weights typed by the user) travels through this
/// structure on every call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RankOptions {
    /// Scaling weights applied after normalisation, one per criterion. All
    /// ones when `None`. These are not preference weights in the classical
    /// MCDA sense.
    pub weights: Option<Vec<f64>>,
    /// The normalisation convention. Each method falls back to its own
    /// default when `None`: [`Norm::L2`] for TOPSIS and RSM, [`Norm::LInf`]
    /// for SP-CS. Ignored by UTA-DIS, which takes no convention.
    pub norm: Option<Norm>,
}

/// The closed set of ranking methods. Dispatching through this enum makes an
/// unsupported method unrepresentable in the typed API; the only place the
/// "unsupported method" error can arise is the [`FromStr`] string boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Topsis,
    Rsm,
    SpCs,
    UtaDis,
}

impl Method {
    /// Rank the alternatives of a matrix with this method.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The decision matrix (minimised criteria).
    /// * `options`: The caller's weight and convention selections.
    ///
    /// returns: `Result<Vec<RankedAlternative>, RankError>` One entry per
    /// alternative, sorted by score descending, ties in row order.
    pub fn rank(
        &self,
        matrix: &DecisionMatrix,
        options: RankOptions,
    ) -> Result<Vec<RankedAlternative>, RankError> {
        match self {
            Method::Topsis => Topsis::new(matrix, options.weights, options.norm)?.rank(),
            Method::Rsm => Rsm::new(matrix, options.weights, options.norm)?.rank(),
            Method::SpCs => SpCs::new(matrix, options.weights, options.norm)?.rank(),
            Method::UtaDis => Ok(UtaDis::new(matrix).rank()),
        }
    }
}

impl FromStr for Method {
    type Err = RankError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "topsis" => Ok(Method::Topsis),
            "rsm" => Ok(Method::Rsm),
            "sp-cs" => Ok(Method::SpCs),
            "uta-dis" => Ok(Method::UtaDis),
            _ => Err(RankError::UnsupportedMethod(tag.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Method::Topsis => write!(f, "topsis"),
            Method::Rsm => write!(f, "rsm"),
            Method::SpCs => write!(f, "sp-cs"),
            Method::UtaDis => write!(f, "uta-dis"),
        }
    }
}

/// Resolve the optional weight vector of a scorer against a matrix: all
/// ones when omitted, an error when the length does not match the number of
/// criteria.
///
/// # Arguments
///
/// * `matrix`: The decision matrix.
/// * `weights`: The caller-supplied weights, if any.
///
/// returns: `Result<Vec<f64>, RankError>`
pub(crate) fn resolve_weights(
    matrix: &DecisionMatrix,
    weights: Option<Vec<f64>>,
) -> Result<Vec<f64>, RankError> {
    let number_of_criteria = matrix.number_of_criteria();
    match weights {
        None => Ok(vec![1.0; number_of_criteria]),
        Some(weights) if weights.len() == number_of_criteria => Ok(weights),
        Some(weights) => Err(RankError::WeightCount(weights.len(), number_of_criteria)),
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use float_cmp::assert_approx_eq;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::algorithms::{Method, RankOptions};
    use crate::core::{DecisionMatrix, RankError};

    const METHODS: [Method; 4] = [Method::Topsis, Method::Rsm, Method::SpCs, Method::UtaDis];

    /// Rank the rows and return the score of each row in row order.
    fn scores_by_row(method: Method, rows: &[Vec<f64>]) -> Vec<f64> {
        let matrix = DecisionMatrix::new(rows.to_vec()).unwrap();
        let ranking = method.rank(&matrix, RankOptions::default()).unwrap();
        let mut scores = vec![0.0; rows.len()];
        for entry in ranking {
            scores[entry.index] = entry.score;
        }
        scores
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Method::from_str("topsis").unwrap(), Method::Topsis);
        assert_eq!(Method::from_str("rsm").unwrap(), Method::Rsm);
        assert_eq!(Method::from_str("sp-cs").unwrap(), Method::SpCs);
        assert_eq!(Method::from_str("uta-dis").unwrap(), Method::UtaDis);
        assert!(matches!(
            Method::from_str("electre"),
            Err(RankError::UnsupportedMethod(tag)) if tag == "electre"
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for method in METHODS {
            assert_eq!(Method::from_str(&method.to_string()).unwrap(), method);
        }
    }

    #[test]
    /// Every method returns one entry per alternative, a permutation of the
    /// row indexes with no duplicates and no gaps.
    fn test_every_method_returns_index_permutation() {
        let matrix = DecisionMatrix::new(vec![
            vec![3.0, -1.0, 4.0],
            vec![-1.0, 5.0, 9.0],
            vec![2.0, 6.0, -5.0],
            vec![3.0, 5.0, 8.0],
            vec![9.0, -7.0, 9.0],
        ])
        .unwrap();

        for method in METHODS {
            let ranking = method.rank(&matrix, RankOptions::default()).unwrap();
            let mut indexes: Vec<usize> = ranking.iter().map(|r| r.index).collect();
            indexes.sort_unstable();
            assert_eq!(indexes, vec![0, 1, 2, 3, 4], "failed for {method}");
        }
    }

    #[test]
    /// Per-alternative scores do not depend on the order the rows are
    /// supplied in: scoring a shuffled matrix assigns each alternative the
    /// same score it got in the original order.
    fn test_permutation_equivariance() {
        let rows = vec![
            vec![3.0, -1.0, 4.0],
            vec![-1.0, 5.0, 9.0],
            vec![2.0, 6.0, -5.0],
            vec![3.0, 5.0, 8.0],
            vec![9.0, -7.0, 9.0],
            vec![-2.0, -2.0, 1.0],
        ];

        let mut permutation: Vec<usize> = (0..rows.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        permutation.shuffle(&mut rng);
        let shuffled: Vec<Vec<f64>> = permutation.iter().map(|i| rows[*i].clone()).collect();

        for method in METHODS {
            let original_scores = scores_by_row(method, &rows);
            let shuffled_scores = scores_by_row(method, &shuffled);
            for (position, original_row) in permutation.iter().enumerate() {
                assert_approx_eq!(
                    f64,
                    shuffled_scores[position],
                    original_scores[*original_row],
                    epsilon = 0.000001
                );
            }
        }
    }

    #[test]
    /// UTA-DIS ignores the options entirely; the other methods accept them.
    fn test_uta_dis_ignores_options() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 1.0]]).unwrap();
        let options = RankOptions {
            // wrong length on purpose: UTA-DIS must not look at it
            weights: Some(vec![1.0, 2.0, 3.0]),
            norm: None,
        };
        assert!(Method::UtaDis.rank(&matrix, options.clone()).is_ok());
        assert!(matches!(
            Method::Topsis.rank(&matrix, options),
            Err(RankError::WeightCount(3, 2))
        ));
    }
}
