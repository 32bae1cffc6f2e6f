use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum RankError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,
    #[error("Alternative #{0} has {1} criterion values, but {2} were expected")]
    JaggedMatrix(usize, usize, usize),
    #[error("The value of criterion #{1} for alternative #{0} is not a finite number")]
    NonFiniteValue(usize, usize),
    #[error("The weight vector length ({0}) must match the number of criteria ({1})")]
    WeightCount(usize, usize),
    #[error("Unsupported norm '{0}': choose 'l1', 'l2', 'linf' or 'range'")]
    UnsupportedNorm(String),
    #[error("Unsupported metric '{0}': choose 'l1', 'l2' or 'linf'")]
    UnsupportedMetric(String),
    #[error("Unsupported method '{0}': choose 'topsis', 'rsm', 'sp-cs' or 'uta-dis'")]
    UnsupportedMethod(String),
}
