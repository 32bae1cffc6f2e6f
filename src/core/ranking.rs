use serde::{Deserialize, Serialize};

/// One entry of a ranking: the position of an alternative in the original
/// decision matrix and the score a method assigned to it. Every method maps
/// its internal sense of "better" onto the same convention: a larger score
/// is a better alternative, with scores in the `[0, 1]` interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// The zero-based row index of the alternative in the decision matrix.
    pub index: usize,
    /// The score, where larger means better.
    pub score: f64,
}

/// Pair each score with its row index and sort descending by score. The sort
/// is stable, so alternatives with equal scores keep their row order.
///
/// # Arguments
///
/// * `scores`: One score per alternative, in matrix row order.
///
/// returns: `Vec<RankedAlternative>`
pub(crate) fn sort_ranking(scores: Vec<f64>) -> Vec<RankedAlternative> {
    let mut ranking: Vec<RankedAlternative> = scores
        .into_iter()
        .enumerate()
        .map(|(index, score)| RankedAlternative { index, score })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
}

#[cfg(test)]
mod test {
    use crate::core::ranking::sort_ranking;
    use crate::core::RankedAlternative;

    #[test]
    /// The JSON shape is part of the contract with the presentation layer,
    /// which re-associates indexes with alternative identifiers.
    fn test_json_shape() {
        let entry = RankedAlternative {
            index: 2,
            score: 0.75,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"index":2,"score":0.75}"#);
    }

    #[test]
    fn test_sort_descending() {
        let ranking = sort_ranking(vec![0.2, 0.9, 0.5]);
        let indexes: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2, 0]);
    }

    #[test]
    /// Ties keep the original row order.
    fn test_stable_ties() {
        let ranking = sort_ranking(vec![0.5, 0.7, 0.5, 0.5]);
        let indexes: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 0, 2, 3]);
    }
}
