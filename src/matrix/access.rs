//! Element accessors.
//!
//! Uniform matrices are indexed with plain runtime positions and hand out
//! their single element type. Every matrix can be accessed at compile-time
//! positions with [`TypedMatrix::at`], which yields the exact type of that
//! position and rejects positions past the end:
//!
//! ```compile_fail
//! use typed_linalg::{TypedColumnVector, backend::Mat};
//!
//! let v = TypedColumnVector::<Mat<f64, 3, 1>, (f64, f64, f64)>::zeros();
//! let _ = v.at::<3, 0>();
//! ```
//!
//! Runtime indexing of a matrix holding different element types does not
//! compile either:
//!
//! ```compile_fail
//! use typed_linalg::{TypedColumnVector, backend::Mat, quantity::{Length, Velocity}};
//!
//! let v = TypedColumnVector::<Mat<f64, 2, 1>, (Length, Velocity)>::zeros();
//! let _ = v[0];
//! ```

use std::ops::{Index, IndexMut};

use super::{TypedMatrix, vector_position};
use crate::backend::Backend;
use crate::cast::{ElementCast, ElementCastRef, cast};
use crate::index::{At, ElementAt, IndexAt, IndexList, OneDimension, Prod, Product, UniformOver};

impl<B, R, C, E> Index<(usize, usize)> for TypedMatrix<B, R, C>
where
    B: Backend,
    R: UniformOver<C, Element = E>,
    E: ElementCastRef<B::Raw>,
{
    type Output = E;

    fn index(&self, (row, column): (usize, usize)) -> &E {
        E::cast_ref(self.storage.element(row, column))
    }
}

impl<B, R, C, E> IndexMut<(usize, usize)> for TypedMatrix<B, R, C>
where
    B: Backend,
    R: UniformOver<C, Element = E>,
    E: ElementCastRef<B::Raw>,
{
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut E {
        E::cast_mut(self.storage.element_mut(row, column))
    }
}

impl<B, R, C, E> Index<usize> for TypedMatrix<B, R, C>
where
    Self: OneDimension,
    B: Backend,
    R: UniformOver<C, Element = E>,
    C: IndexList,
    E: ElementCastRef<B::Raw>,
{
    type Output = E;

    fn index(&self, index: usize) -> &E {
        let (row, column) = vector_position::<C>(index);
        E::cast_ref(self.storage.element(row, column))
    }
}

impl<B, R, C, E> IndexMut<usize> for TypedMatrix<B, R, C>
where
    Self: OneDimension,
    B: Backend,
    R: UniformOver<C, Element = E>,
    C: IndexList,
    E: ElementCastRef<B::Raw>,
{
    fn index_mut(&mut self, index: usize) -> &mut E {
        let (row, column) = vector_position::<C>(index);
        E::cast_mut(self.storage.element_mut(row, column))
    }
}

impl<B: Backend, R, C> TypedMatrix<B, R, C> {
    /// Copy of the uniform element at a runtime position.
    pub fn get<E>(&self, row: usize, column: usize) -> E
    where
        R: UniformOver<C, Element = E>,
        E: ElementCast<B::Raw>,
    {
        cast(*self.storage.element(row, column))
    }

    /// Copy of the `index`-th uniform element of a vector.
    pub fn get_index<E>(&self, index: usize) -> E
    where
        Self: OneDimension,
        R: UniformOver<C, Element = E>,
        C: IndexList,
        E: ElementCast<B::Raw>,
    {
        let (row, column) = vector_position::<C>(index);
        cast(*self.storage.element(row, column))
    }

    /// The element at the compile-time position `(I, J)`, of its exact type.
    pub fn at<const I: usize, const J: usize>(&self) -> ElementAt<R, C, I, J>
    where
        R: At<I>,
        C: At<J>,
        IndexAt<R, I>: Product<IndexAt<C, J>>,
        ElementAt<R, C, I, J>: ElementCast<B::Raw>,
    {
        cast(*self.storage.element(I, J))
    }

    /// Mutable reference to the element at the compile-time position `(I, J)`.
    pub fn at_mut<const I: usize, const J: usize>(&mut self) -> &mut ElementAt<R, C, I, J>
    where
        R: At<I>,
        C: At<J>,
        IndexAt<R, I>: Product<IndexAt<C, J>>,
        ElementAt<R, C, I, J>: ElementCastRef<B::Raw>,
    {
        <ElementAt<R, C, I, J>>::cast_mut(self.storage.element_mut(I, J))
    }

    /// Overwrite the element at the compile-time position `(I, J)`.
    pub fn set<const I: usize, const J: usize>(&mut self, value: ElementAt<R, C, I, J>)
    where
        R: At<I>,
        C: At<J>,
        IndexAt<R, I>: Product<IndexAt<C, J>>,
        B::Raw: ElementCast<ElementAt<R, C, I, J>>,
    {
        *self.storage.element_mut(I, J) = cast(value);
    }
}

impl<B: Backend, R, C0> TypedMatrix<B, R, (C0,)> {
    /// The `I`-th element of a column vector, of its exact type.
    pub fn at_index<const I: usize>(&self) -> Prod<IndexAt<R, I>, C0>
    where
        R: At<I>,
        IndexAt<R, I>: Product<C0>,
        Prod<IndexAt<R, I>, C0>: ElementCast<B::Raw>,
    {
        cast(*self.storage.element(I, 0))
    }

    /// Mutable reference to the `I`-th element of a column vector.
    pub fn at_index_mut<const I: usize>(&mut self) -> &mut Prod<IndexAt<R, I>, C0>
    where
        R: At<I>,
        IndexAt<R, I>: Product<C0>,
        Prod<IndexAt<R, I>, C0>: ElementCastRef<B::Raw>,
    {
        <Prod<IndexAt<R, I>, C0>>::cast_mut(self.storage.element_mut(I, 0))
    }
}

impl<B: Backend, R0, C0> TypedMatrix<B, (R0,), (C0,)>
where
    R0: Product<C0>,
{
    /// Mutable reference to the only element.
    pub fn value_mut(&mut self) -> &mut Prod<R0, C0>
    where
        Prod<R0, C0>: ElementCastRef<B::Raw>,
    {
        <Prod<R0, C0>>::cast_mut(self.storage.element_mut(0, 0))
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::Mat;
    use crate::quantity::{Acceleration, Area, Dimensionless, Frequency, Length, M, S, Time, Velocity};
    use crate::{TypedColumnVector, TypedMatrix, TypedRowVector};
    use itertools::iproduct;

    type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
    type Covariance = TypedMatrix<Mat<f64, 2, 2>, (Length, Velocity), (Length, Velocity)>;
    type Velocity3 = TypedColumnVector<Mat<f64, 3, 1>, (Velocity, Velocity, Velocity)>;
    type Position2 = TypedMatrix<Mat<f64, 2, 2>, (Length, Length), (Length, Length)>;

    #[test]
    fn compile_time_positions_have_exact_types() {
        let mut x = State::zeros();
        *x.at_mut::<0, 0>() = 3.0 * M;
        *x.at_index_mut::<1>() = 2.0 * M / S;
        x.set::<2, 0>(1.0 * M / (S * S));
        assert_eq!(x.at::<0, 0>(), 3.0 * M);
        assert_eq!(x.at_index::<1>(), 2.0 * M / S);
        let a: Acceleration = x.at_index::<2>();
        assert_eq!(a.value(), 1.0);
    }

    #[test]
    fn heterogeneous_matrix_positions() {
        let mut p = Covariance::zeros();
        p.set::<0, 0>(500.0 * M * M);
        p.set::<0, 1>(0.5 * M * M / S);
        p.set::<1, 1>(2.0 * M * M / (S * S));
        let area: Area = p.at::<0, 0>();
        assert_eq!(area.value(), 500.0);
        assert_eq!(p.at::<1, 0>().value(), 0.0);
        assert_eq!(p.at::<0, 1>(), 0.5 * M * M / S);
        assert_eq!(p.data(), &Mat::new([[500.0, 0.5], [0.0, 2.0]]));
    }

    #[test]
    fn uniform_vectors_index_with_one_position() {
        let mut v = Velocity3::from_array([1.0 * M / S, 2.0 * M / S, 3.0 * M / S]);
        v[1] = 4.0 * M / S;
        assert_eq!(v[1], 4.0 * M / S);
        assert_eq!(v.get_index(2), 3.0 * M / S);
        assert_eq!(v[(0, 0)], 1.0 * M / S);

        let mut r = TypedRowVector::<Mat<f64, 1, 2>, (f64, f64)>::from_array([5.0, 6.0]);
        r[1] += 1.0;
        assert_eq!(r.get_index(1), 7.0);
        assert_eq!(r[(0, 1)], 7.0);
    }

    #[test]
    fn uniform_matrices_index_with_two_positions() {
        let mut p = Position2::zeros();
        p[(0, 1)] = 9.0 * M * M;
        assert_eq!(p[(0, 1)], 9.0 * M * M);
        p[(0, 1)] = 16.0 * M * M;
        assert_eq!(p.get(0, 1), 16.0 * M * M);
        for (i, j) in iproduct!(0..2, 0..2) {
            if (i, j) != (0, 1) {
                assert_eq!(p.get(i, j), Area::default());
            }
        }
    }

    #[test]
    fn singleton_every_way() {
        type S11 = TypedMatrix<Mat<f64, 1, 1>, (Time,), (Frequency,)>;
        let mut s = S11::new(Dimensionless::new(1.0));
        *s.at_mut::<0, 0>() = Dimensionless::new(23.0);
        assert_eq!(s.at::<0, 0>().value(), 23.0);
        s[(0, 0)] = Dimensionless::new(21.0);
        assert_eq!(s[(0, 0)].value(), 21.0);
        *s.at_index_mut::<0>() = Dimensionless::new(13.0);
        assert_eq!(s.at_index::<0>().value(), 13.0);
        s[0] = Dimensionless::new(11.0);
        assert_eq!(s[0].value(), 11.0);
        *s.value_mut() = Dimensionless::new(1.0);
        assert_eq!(s.value(), Dimensionless::new(1.0));
    }
}
