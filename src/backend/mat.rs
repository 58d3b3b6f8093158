use std::ops::{Add, Sub};

use num_traits::{Float, Num, Zero};

use super::{
    Backend, Divide, DivideScalar, MatMul, Scale, ScalarStorage, Transpose, Zeros, out_of_range,
    solve::solve_right,
};

/// Stack-allocated, row-major `R × C` matrix of raw numbers.
///
/// The reference backend of the crate: every capability trait is implemented
/// so the whole typed algebra is available on it.
///
/// ```
/// use typed_linalg::backend::{Backend, Mat};
///
/// let m = Mat::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(*m.element(1, 0), 3.0);
/// assert_eq!((m.rows(), m.columns()), (2, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Mat<T, R, C> {
    /// Wrap row-major data.
    pub const fn new(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Borrow the rows.
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// Unwrap the rows.
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Mat<T, R, C> {
    /// Matrix of zeros.
    pub fn zero() -> Self {
        Self::new([[T::zero(); C]; R])
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Mat<T, R, C> {
    fn from(data: [[T; C]; R]) -> Self {
        Self::new(data)
    }
}

impl<T: Copy, const R: usize, const C: usize> Backend for Mat<T, R, C> {
    type Raw = T;

    #[inline]
    fn element(&self, row: usize, column: usize) -> &T {
        self.data
            .get(row)
            .and_then(|values| values.get(column))
            .unwrap_or_else(|| out_of_range(row, column, R, C))
    }

    #[inline]
    fn element_mut(&mut self, row: usize, column: usize) -> &mut T {
        self.data
            .get_mut(row)
            .and_then(|values| values.get_mut(column))
            .unwrap_or_else(|| out_of_range(row, column, R, C))
    }

    fn rows(&self) -> usize {
        R
    }

    fn columns(&self) -> usize {
        C
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Zeros for Mat<T, R, C> {
    fn zeros(rows: usize, columns: usize) -> Self {
        debug_assert_eq!((rows, columns), (R, C), "fixed-size storage requested with another shape");
        Self::zero()
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Add for Mat<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
            *lhs = *lhs + *rhs;
        }
        self
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Sub for Mat<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
            *lhs = *lhs - *rhs;
        }
        self
    }
}

impl<T, const R: usize, const K: usize, const C: usize> MatMul<Mat<T, K, C>> for Mat<T, R, K>
where
    T: Num + Copy,
{
    type Output = Mat<T, R, C>;

    fn matmul(&self, rhs: &Mat<T, K, C>) -> Mat<T, R, C> {
        let mut out = Mat::zero();
        for (out_row, lhs_row) in out.data.iter_mut().zip(&self.data) {
            for (factor, rhs_row) in lhs_row.iter().zip(&rhs.data) {
                for (value, term) in out_row.iter_mut().zip(rhs_row) {
                    *value = *value + *factor * *term;
                }
            }
        }
        out
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Transpose for Mat<T, R, C> {
    type Output = Mat<T, C, R>;

    fn transpose(&self) -> Mat<T, C, R> {
        let mut out = Mat::zero();
        for (i, row) in self.data.iter().enumerate() {
            for (out_row, value) in out.data.iter_mut().zip(row) {
                if let Some(slot) = out_row.get_mut(i) {
                    *slot = *value;
                }
            }
        }
        out
    }
}

impl<T, const R1: usize, const R2: usize, const C: usize> Divide<Mat<T, R2, C>> for Mat<T, R1, C>
where
    T: Float,
{
    type Output = Mat<T, R1, R2>;

    fn divide(&self, rhs: &Mat<T, R2, C>) -> Mat<T, R1, R2> {
        let mut out = Mat::zero();
        solve_right(self, rhs, &mut out);
        out
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Scale<T> for Mat<T, R, C> {
    fn scale(&mut self, factor: T) {
        for value in self.data.iter_mut().flatten() {
            *value = *value * factor;
        }
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> DivideScalar<T> for Mat<T, R, C> {
    fn divide_scalar(&mut self, divisor: T) {
        for value in self.data.iter_mut().flatten() {
            *value = *value / divisor;
        }
    }
}

impl<T: Float, const R: usize> ScalarStorage for Mat<T, R, 1> {
    type Storage = Mat<T, 1, 1>;

    fn from_scalar(value: T) -> Mat<T, 1, 1> {
        Mat::new([[value]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn random<const R: usize, const C: usize>(rng: &mut Xoshiro256PlusPlus) -> Mat<f64, R, C> {
        let mut m = Mat::zero();
        for value in m.data.iter_mut().flatten() {
            *value = rng.gen_range(-10.0..10.0);
        }
        m
    }

    #[test]
    fn zeros_and_shape() {
        let m = Mat::<f32, 2, 3>::zeros(2, 3);
        assert_eq!((m.rows(), m.columns()), (2, 3));
        assert!(m.as_rows().iter().flatten().all(|v| v.abs() < f32::EPSILON));
    }

    #[test]
    fn element_access_is_row_major() {
        let mut m = Mat::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(*m.element(0, 2), 3);
        assert_eq!(*m.element(1, 0), 4);
        *m.element_mut(1, 1) = 50;
        assert_eq!(m.into_rows(), [[1, 2, 3], [4, 50, 6]]);
    }

    #[test]
    fn addition_and_subtraction_are_elementwise() {
        let a = Mat::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat::new([[0.5, 0.5], [1.0, -1.0]]);
        assert_eq!(a + b, Mat::new([[1.5, 2.5], [4.0, 3.0]]));
        assert_eq!(a - a, Mat::zero());
    }

    #[test]
    fn product_of_column_and_row() {
        let column = Mat::new([[3.0], [2.0], [1.0]]);
        let row = Mat::new([[3.0, 2.0, 1.0]]);
        let outer = column.matmul(&row);
        assert_eq!(outer, Mat::new([[9.0, 6.0, 3.0], [6.0, 4.0, 2.0], [3.0, 2.0, 1.0]]));
        assert_eq!(row.matmul(&column), Mat::new([[14.0]]));
    }

    #[test]
    fn product_is_associative_on_random_matrices() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let a = random::<3, 4>(&mut rng);
        let b = random::<4, 2>(&mut rng);
        let c = random::<2, 5>(&mut rng);
        let left = a.matmul(&b).matmul(&c);
        let right = a.matmul(&b.matmul(&c));
        for (l, r) in left.as_rows().iter().flatten().zip(right.as_rows().iter().flatten()) {
            assert_abs_diff_eq!(*l, *r, epsilon = 1e-9);
        }
    }

    #[test]
    fn transpose_swaps_positions() {
        let m = Mat::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t, Mat::new([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn scale_multiplies_everything() {
        let mut m = Mat::new([[3.0], [2.0], [1.0]]);
        m.scale(2.0);
        assert_eq!(m, Mat::new([[6.0], [4.0], [2.0]]));
    }

    #[test]
    fn scalar_division_divides_each_element() {
        let mut m = Mat::new([[7.0], [0.3], [1.0]]);
        m.divide_scalar(10.0);
        // 7.0 * 0.1 would give 0.7000000000000001.
        assert_eq!(m, Mat::new([[0.7], [0.03], [0.1]]));
    }

    #[test]
    fn scalar_storage_divides_a_column() {
        let column = Mat::new([[3.0], [2.0], [1.0]]);
        let quotient = Mat::<f64, 3, 1>::from_scalar(1.0).divide(&column);
        assert_abs_diff_eq!(*quotient.element(0, 0), 1.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(*quotient.element(0, 1), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(*quotient.element(0, 2), 0.0, epsilon = 1e-15);
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 matrix")]
    fn out_of_range_access_panics() {
        let m = Mat::new([[1.0, 2.0], [3.0, 4.0]]);
        let _ = m.element(2, 0);
    }

    #[test]
    fn division_undoes_a_product_by_a_row() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let x = random::<3, 1>(&mut rng);
        let row = Mat::new([[1.0, -2.0, 0.5]]);
        let quotient = x.matmul(&row).divide(&row);
        for (q, e) in quotient.as_rows().iter().flatten().zip(x.as_rows().iter().flatten()) {
            assert_abs_diff_eq!(*q, *e, epsilon = 1e-12);
        }
    }
}
