use tracing::warn;

use crate::math::matrix::Matrix;

/// Column index of the first `1.0` in a one-hot label row.
///
/// Rows with more than one `1.0` are flagged, and the first column still wins.
/// Rows with none return `None`.
pub fn true_class(label_row: &[f64], row: usize) -> Option<usize> {
    let mut hot = label_row.iter().enumerate().filter(|(_, v)| **v == 1.0).map(|(j, _)| j);
    let first = hot.next();

    match first {
        None => warn!(row, "label row has no column equal to 1.0; counted as a miss"),
        Some(class) if hot.next().is_some() => {
            warn!(row, class, "label row has several columns equal to 1.0; using the first")
        }
        Some(_) => {}
    }

    first
}

/// Fraction of rows where the prediction at the true class equals the row
/// maximum. Ties with other columns still count as hits.
///
/// `predictions` and `labels` must have the same shape and at least one row.
pub fn accuracy(predictions: &Matrix, labels: &Matrix) -> f64 {
    let hits = (0..predictions.rows)
        .filter(|&i| {
            true_class(labels.row(i), i)
                .map_or(false, |class| predictions.data[i][class] == predictions.row_max(i))
        })
        .count();

    hits as f64 / predictions.rows as f64
}
