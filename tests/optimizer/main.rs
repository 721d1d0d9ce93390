mod builder;
mod objective;

#[path = "../../benches/test_functions.rs"]
#[allow(dead_code)]
mod test_functions;

use nalgebra::DMatrix;

pub(crate) fn column(values: &[f64]) -> DMatrix<f64> {
    DMatrix::from_column_slice(values.len(), 1, values)
}
