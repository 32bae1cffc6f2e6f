use crate::core::RankError;

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, RankError>`
pub fn vector_min(v: &[f64]) -> Result<f64, RankError> {
    Ok(*v
        .iter()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(RankError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))?)
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, RankError>`
pub fn vector_max(v: &[f64]) -> Result<f64, RankError> {
    Ok(*v
        .iter()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(RankError::Generic(
            "Cannot calculate vector max value".to_string(),
        ))?)
}

/// Calculate the dot product between two vectors. This returns an error if
/// the size of the vectors does not match.
///
/// # Arguments
///
/// * `a`: The first vector.
/// * `b`: The second vector.
///
/// returns: `Result<f64, RankError>`
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64, RankError> {
    if a.len() != b.len() {
        return Err(RankError::Generic(format!(
            "The length of vector a ({:?}) must match the length of vector b ({:?})",
            a, b
        )));
    }

    Ok(a.iter().zip(b).map(|(v_a, v_b)| v_a * v_b).sum())
}

/// Min-max rescale the values to the unit interval. When all values
/// coincide, the spread is zero and every entry rescales to the neutral
/// value 0.5 instead of raising an error.
///
/// # Arguments
///
/// * `values`: The values to rescale.
///
/// returns: `Result<Vec<f64>, RankError>`
pub fn rescale_unit(values: &[f64]) -> Result<Vec<f64>, RankError> {
    let min = vector_min(values)?;
    let max = vector_max(values)?;
    if max - min == 0.0 {
        return Ok(vec![0.5; values.len()]);
    }
    Ok(values.iter().map(|v| (v - min) / (max - min)).collect())
}
