pub use error::RankError;
pub use matrix::DecisionMatrix;
pub use normalise::{Norm, Normaliser};
pub use ranking::RankedAlternative;

mod error;
mod matrix;
mod normalise;
pub(crate) mod ranking;
pub(crate) mod test_utils;
