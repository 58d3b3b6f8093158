//! Adapter for two-dimensional `ndarray` arrays.
//!
//! Owned arrays and mutable views are backends. Products, transposes and
//! quotients are always materialized as owned [`Array2`] values.

use ndarray::{Array2, ArrayBase, DataMut, Ix2, LinalgScalar};
use num_traits::{Float, Zero};

use super::{
    Backend, Divide, DivideScalar, MatMul, Scale, ScalarStorage, Transpose, Zeros, out_of_range,
    solve::solve_right,
};

impl<S, T> Backend for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    T: Copy,
{
    type Raw = T;

    #[inline]
    fn element(&self, row: usize, column: usize) -> &T {
        let (rows, columns) = self.dim();
        self.get((row, column))
            .unwrap_or_else(|| out_of_range(row, column, rows, columns))
    }

    #[inline]
    fn element_mut(&mut self, row: usize, column: usize) -> &mut T {
        let (rows, columns) = self.dim();
        self.get_mut((row, column))
            .unwrap_or_else(|| out_of_range(row, column, rows, columns))
    }

    fn rows(&self) -> usize {
        self.nrows()
    }

    fn columns(&self) -> usize {
        self.ncols()
    }
}

impl<T: Zero + Copy> Zeros for Array2<T> {
    fn zeros(rows: usize, columns: usize) -> Self {
        Array2::zeros((rows, columns))
    }
}

impl<S, S2, T> MatMul<ArrayBase<S2, Ix2>> for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
    T: LinalgScalar,
{
    type Output = Array2<T>;

    fn matmul(&self, rhs: &ArrayBase<S2, Ix2>) -> Array2<T> {
        self.dot(rhs)
    }
}

impl<S, T> Transpose for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    T: Copy,
{
    type Output = Array2<T>;

    fn transpose(&self) -> Array2<T> {
        self.t().to_owned()
    }
}

impl<S, S2, T> Divide<ArrayBase<S2, Ix2>> for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    S2: DataMut<Elem = T>,
    T: Float,
{
    type Output = Array2<T>;

    fn divide(&self, rhs: &ArrayBase<S2, Ix2>) -> Array2<T> {
        assert_eq!(
            self.ncols(),
            rhs.ncols(),
            "dividend has {} columns, divisor has {}",
            self.ncols(),
            rhs.ncols()
        );
        let mut out = Array2::zeros((self.nrows(), rhs.nrows()));
        solve_right(self, rhs, &mut out);
        out
    }
}

impl<S, T> Scale<T> for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    T: LinalgScalar,
{
    fn scale(&mut self, factor: T) {
        self.map_inplace(|value| *value = *value * factor);
    }
}

impl<S, T> DivideScalar<T> for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    T: LinalgScalar,
{
    fn divide_scalar(&mut self, divisor: T) {
        self.map_inplace(|value| *value = *value / divisor);
    }
}

impl<S, T> ScalarStorage for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
    T: Float,
{
    type Storage = Array2<T>;

    fn from_scalar(value: T) -> Array2<T> {
        Array2::from_elem((1, 1), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Mat;
    use crate::quantity::{Acceleration, Dimensionless, Frequency, Length, M, S, Time, Velocity};
    use crate::{TypedColumnVector, TypedMatrix, transposed};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{ArrayViewMut2, array};

    type Units = (Length, Velocity, Acceleration);

    #[test]
    fn owned_arrays_are_backends() {
        let mut a = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!((Backend::rows(&a), Backend::columns(&a)), (2, 2));
        *a.element_mut(0, 1) = 20.0;
        assert_relative_eq!(*a.element(0, 1), 20.0);
        assert_eq!(<Array2<f64> as Zeros>::zeros(3, 1).dim(), (3, 1));
    }

    #[test]
    fn mutable_views_scale_in_place() {
        let mut a = array![[1.0, 2.0], [3.0, 4.0]];
        a.view_mut().scale(0.5);
        assert_eq!(a, array![[0.5, 1.0], [1.5, 2.0]]);
    }

    #[test]
    fn product_transpose_and_division() {
        let column = array![[3.0], [2.0], [1.0]];
        let row = Transpose::transpose(&column);
        let outer = column.matmul(&row);
        assert_relative_eq!(*outer.element(1, 2), 2.0);
        let back = outer.divide(&row);
        for (q, e) in back.iter().zip(&column) {
            assert_abs_diff_eq!(*q, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn scalar_division_divides_each_element() {
        let mut a = array![[7.0], [0.3], [1.0]];
        a.view_mut().divide_scalar(10.0);
        assert_eq!(a, array![[0.7], [0.03], [0.1]]);
    }

    #[test]
    fn typed_matrices_over_arrays() {
        let x = TypedColumnVector::<Array2<f64>, Units>::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
        assert_eq!(x.to_string(), "[[3 m], [2 m/s], [1 m/s²]]");

        let outer = x.clone() * transposed(&x);
        assert_eq!(outer.data().dim(), (3, 3));
        assert_eq!(outer.to_string(), "[[9 m², 6 m²/s, 3 m²/s²], [6 m²/s, 4 m²/s², 2 m²/s³], [3 m²/s², 2 m²/s³, 1 m²/s⁴]]");

        assert_eq!((x.clone() / 10.0).to_string(), "[[0.3 m], [0.2 m/s], [0.1 m/s²]]");

        let q = x.clone() / x.clone();
        let a: Dimensionless = q.at::<0, 0>();
        let b: Frequency = q.at::<1, 0>();
        let c: Time = q.at::<0, 1>();
        assert_relative_eq!(a.value(), 1.0);
        assert_relative_eq!(b.value(), 2.0 / 3.0);
        assert_abs_diff_eq!(c.value(), 0.0);

        assert_eq!((1.0 / x).to_string(), "[0.3333333333333333 1/m, 0 s/m, 0 s²/m]");
    }

    #[test]
    fn views_convert_into_owned_storage() {
        let mut raw = array![[3.0], [2.0], [1.0]];
        let view = TypedMatrix::<ArrayViewMut2<'_, f64>, Units, (crate::Identity,)>::from_storage(raw.view_mut());
        let owned = TypedColumnVector::<Mat<f64, 3, 1>, Units>::from_compatible(view);
        assert_eq!(owned.data(), &Mat::new([[3.0], [2.0], [1.0]]));
        let speed: Velocity = owned.at_index::<1>();
        assert_eq!(speed, 2.0 * M / S);

        let mut view = TypedColumnVector::<ArrayViewMut2<'_, f64>, Units>::from_storage(raw.view_mut());
        view.set::<2, 0>(4.0 * M / (S * S));
        assert_abs_diff_eq!(*raw.element(2, 0), 4.0);
    }
}
