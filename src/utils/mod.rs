pub use dominance::{compare, pareto_front, pareto_front_among, pareto_layers, Dominance};
pub use vectors::{dot_product, rescale_unit, vector_max, vector_min};

pub mod dominance;
mod vectors;
