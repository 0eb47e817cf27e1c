use crate::models::Point;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationInputError {
    #[error("cannot average an empty set of values")]
    Empty,
}

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64, AggregationInputError> {
    if values.is_empty() {
        return Err(AggregationInputError::Empty);
    }

    let total: f64 = values.iter().sum();
    Ok(total / values.len() as f64)
}

/// Mean latitude and mean longitude of `points`, as `(lat, lng)`.
///
/// This is a plain average of the coordinates, not a geodesic center. It is
/// good enough to place the initial map view.
pub fn centroid(points: &[Point]) -> Result<(f64, f64), AggregationInputError> {
    let lats: Vec<f64> = points.iter().map(|p| p.lat).collect();
    let lngs: Vec<f64> = points.iter().map(|p| p.lng).collect();

    Ok((mean(&lats)?, mean(&lngs)?))
}
