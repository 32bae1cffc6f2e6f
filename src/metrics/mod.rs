pub use distance::{distance, DistanceMetric};

mod distance;
