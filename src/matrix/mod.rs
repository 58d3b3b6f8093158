//! The typed matrix container.
//!
//! [`TypedMatrix<B, R, C>`] pairs one backend value `B` with a row index list
//! `R` and a column index list `C`. The element at `(i, j)` is statically a
//! [`Prod<R_i, C_j>`](crate::index::Prod); the backend only ever sees raw
//! numbers, and every value crossing the boundary goes through the element
//! cast.
//!
//! Which constructors and accessors exist depends on the classification of
//! the index lists: a uniform matrix gets plain `[]` indexing, a column vector
//! gets single-position accessors, a singleton converts to its element.

mod access;

use std::fmt;
use std::marker::PhantomData;

use num_traits::One;

use crate::backend::{Backend, Zeros};
use crate::cast::{ElementCast, cast};
use crate::error::{MatrixError, Result};
use crate::index::{
    ElementGrid, IdentityIndex, IndexList, OneDimension, Prod, Product, UniformOver, same_shape,
};
use crate::tuples::for_each_tuple;

/// A matrix whose rows are indexed by the types of `R` and whose columns are
/// indexed by the types of `C`, stored in the backend `B`.
pub struct TypedMatrix<B, R, C> {
    storage: B,
    indexes: PhantomData<fn() -> (R, C)>,
}

/// A typed row vector: one row, columns indexed by `C`.
pub type TypedRowVector<B, C> = TypedMatrix<B, IdentityIndex, C>;

/// A typed column vector: rows indexed by `R`, one column.
pub type TypedColumnVector<B, R> = TypedMatrix<B, R, IdentityIndex>;

impl<B: Clone, R, C> Clone for TypedMatrix<B, R, C> {
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone())
    }
}

impl<B: Copy, R, C> Copy for TypedMatrix<B, R, C> {}

impl<B: fmt::Debug, R, C> fmt::Debug for TypedMatrix<B, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedMatrix").field("storage", &self.storage).finish()
    }
}

impl<B, R, C> TypedMatrix<B, R, C> {
    /// Wrap an existing backend value without any check.
    ///
    /// This is the escape hatch used by the algorithms to wrap raw results.
    /// Nothing verifies that the stored numbers mean what `R` and `C` say
    /// they mean, so prefer the typed constructors in client code.
    pub const fn from_storage(storage: B) -> Self {
        Self { storage, indexes: PhantomData }
    }

    /// The raw backend value.
    pub const fn data(&self) -> &B {
        &self.storage
    }

    /// The raw backend value, mutably. Bypasses all type checking.
    pub fn data_mut(&mut self) -> &mut B {
        &mut self.storage
    }

    /// Unwrap the backend value.
    pub fn into_data(self) -> B {
        self.storage
    }
}

impl<B, R: IndexList, C: IndexList> TypedMatrix<B, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R::LEN;

    /// Number of columns.
    pub const COLUMNS: usize = C::LEN;

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        R::LEN
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        C::LEN
    }
}

impl<B: Zeros, R: IndexList, C: IndexList> TypedMatrix<B, R, C> {
    /// Every element at the backend's zero.
    pub fn zeros() -> Self {
        Self::from_storage(B::zeros(R::LEN, C::LEN))
    }

    /// Raw one on the diagonal, zero elsewhere.
    ///
    /// Only square matrices have an identity:
    ///
    /// ```compile_fail
    /// use typed_linalg::{TypedMatrix, backend::Mat};
    ///
    /// let _ = TypedMatrix::<Mat<f64, 2, 3>, (f64, f64), (f64, f64, f64)>::identity();
    /// ```
    pub fn identity() -> Self
    where
        B::Raw: One,
    {
        const { assert!(R::LEN == C::LEN, "identity of a non-square matrix") };
        let mut storage = B::zeros(R::LEN, C::LEN);
        for i in 0..R::LEN {
            *storage.element_mut(i, i) = B::Raw::one();
        }
        Self::from_storage(storage)
    }

    /// Convert a matrix holding the same quantities at the same positions.
    ///
    /// The index lists may differ as long as every element type agrees, which
    /// is what algorithm results usually look like:
    ///
    /// ```
    /// use typed_linalg::{TypedMatrix, backend::Mat, quantity::{Frequency, Length, M, S}};
    ///
    /// type Rate = TypedMatrix<Mat<f64, 1, 1>, (Length,), (Frequency,)>;
    /// type Scaled = TypedMatrix<Mat<f64, 1, 1>, (Frequency,), (Length,)>;
    ///
    /// let rate = Rate::new(2.0 * M / S);
    /// let scaled = Scaled::from_compatible(rate);
    /// assert_eq!(scaled.value(), 2.0 * M / S);
    /// ```
    pub fn from_compatible<B2, R2, C2>(other: TypedMatrix<B2, R2, C2>) -> Self
    where
        B2: Backend,
        B::Raw: ElementCast<B2::Raw>,
        R: ElementGrid<C>,
        R2: IndexList + ElementGrid<C2, Grid = <R as ElementGrid<C>>::Grid>,
        C2: IndexList,
    {
        const { assert!(same_shape::<Self, TypedMatrix<B2, R2, C2>>(), "shapes differ") };
        let mut storage = B::zeros(R::LEN, C::LEN);
        for i in 0..R::LEN {
            for j in 0..C::LEN {
                *storage.element_mut(i, j) = cast(*other.storage.element(i, j));
            }
        }
        Self::from_storage(storage)
    }

    /// Uniform matrix from row-major nested arrays.
    ///
    /// The array dimensions must match the matrix:
    ///
    /// ```compile_fail
    /// use typed_linalg::{TypedMatrix, backend::Mat};
    ///
    /// let _ = TypedMatrix::<Mat<f64, 2, 2>, (f64, f64), (f64, f64)>::from_rows([[1.0, 2.0]]);
    /// ```
    pub fn from_rows<E, const NR: usize, const NC: usize>(rows: [[E; NC]; NR]) -> Self
    where
        R: UniformOver<C, Element = E>,
        B::Raw: ElementCast<E>,
    {
        const { assert!(NR == R::LEN && NC == C::LEN, "nested array dimensions differ from the matrix") };
        let mut storage = B::zeros(R::LEN, C::LEN);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                *storage.element_mut(i, j) = cast(value);
            }
        }
        Self::from_storage(storage)
    }

    /// Uniform matrix from row-major nested vectors of runtime length.
    ///
    /// # Errors
    ///
    /// [`MatrixError::RowCount`] or [`MatrixError::ColumnCount`] when the
    /// nesting does not match the matrix shape.
    pub fn try_from_rows<E>(rows: Vec<Vec<E>>) -> Result<Self>
    where
        R: UniformOver<C, Element = E>,
        B::Raw: ElementCast<E>,
    {
        if rows.len() != R::LEN {
            return Err(MatrixError::RowCount { expected: R::LEN, found: rows.len() });
        }
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, values)| values.len() != C::LEN) {
            return Err(MatrixError::ColumnCount { row, expected: C::LEN, found: values.len() });
        }
        let mut storage = B::zeros(R::LEN, C::LEN);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row.into_iter().enumerate() {
                *storage.element_mut(i, j) = cast(value);
            }
        }
        Ok(Self::from_storage(storage))
    }

    /// Uniform vector from a flat array.
    ///
    /// ```
    /// use typed_linalg::{TypedColumnVector, backend::Mat, quantity::{M, S, Velocity}};
    ///
    /// type Velocity3 = TypedColumnVector<Mat<f64, 3, 1>, (Velocity, Velocity, Velocity)>;
    ///
    /// let v = Velocity3::from_array([1.0 * M / S, 2.0 * M / S, 3.0 * M / S]);
    /// assert_eq!(v[1], 2.0 * M / S);
    /// ```
    pub fn from_array<E, const N: usize>(values: [E; N]) -> Self
    where
        Self: OneDimension,
        R: UniformOver<C, Element = E>,
        B::Raw: ElementCast<E>,
    {
        const { assert!(N == R::LEN * C::LEN, "array length differs from the element count") };
        let mut storage = B::zeros(R::LEN, C::LEN);
        for (k, value) in values.into_iter().enumerate() {
            let (i, j) = vector_position::<C>(k);
            *storage.element_mut(i, j) = cast(value);
        }
        Self::from_storage(storage)
    }

    /// Vector from one value per position, each of its own element type.
    ///
    /// ```
    /// use typed_linalg::{TypedColumnVector, backend::Mat, quantity::{Acceleration, Length, M, S, Velocity}};
    ///
    /// type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
    ///
    /// let x = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
    /// assert_eq!(x.at::<1, 0>(), 2.0 * M / S);
    /// ```
    pub fn from_values(values: <(R, C) as VectorValues<B>>::Values) -> Self
    where
        (R, C): VectorValues<B>,
    {
        let mut storage = B::zeros(R::LEN, C::LEN);
        <(R, C) as VectorValues<B>>::store(values, &mut storage);
        Self::from_storage(storage)
    }

    /// Overwrite from a matrix holding the same quantities at the same
    /// positions. See [`TypedMatrix::from_compatible`].
    pub fn assign_from<B2, R2, C2>(&mut self, other: TypedMatrix<B2, R2, C2>)
    where
        B2: Backend,
        B::Raw: ElementCast<B2::Raw>,
        R: ElementGrid<C>,
        R2: IndexList + ElementGrid<C2, Grid = <R as ElementGrid<C>>::Grid>,
        C2: IndexList,
    {
        *self = Self::from_compatible(other);
    }
}

impl<B: Zeros, R: IndexList, C: IndexList> Default for TypedMatrix<B, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Position of the `k`-th element of a vector whose column list is `C`.
pub(crate) fn vector_position<C: IndexList>(k: usize) -> (usize, usize) {
    if C::LEN == 1 { (k, 0) } else { (0, k) }
}

impl<B, R0, C0> TypedMatrix<B, (R0,), (C0,)>
where
    B: Backend,
    R0: Product<C0>,
{
    /// Singleton holding `value`.
    pub fn new(value: Prod<R0, C0>) -> Self
    where
        B: Zeros,
        B::Raw: ElementCast<Prod<R0, C0>>,
    {
        let mut storage = B::zeros(1, 1);
        *storage.element_mut(0, 0) = cast(value);
        Self::from_storage(storage)
    }

    /// The only element.
    pub fn value(&self) -> Prod<R0, C0>
    where
        Prod<R0, C0>: ElementCast<B::Raw>,
    {
        cast(*self.storage.element(0, 0))
    }

    /// Replace the only element.
    pub fn set_value(&mut self, value: Prod<R0, C0>)
    where
        B::Raw: ElementCast<Prod<R0, C0>>,
    {
        *self.storage.element_mut(0, 0) = cast(value);
    }
}

impl<B, R0, C0> From<TypedMatrix<B, (R0,), (C0,)>> for f64
where
    B: Backend<Raw = f64>,
    R0: Product<C0, Output = f64>,
{
    fn from(singleton: TypedMatrix<B, (R0,), (C0,)>) -> Self {
        *singleton.storage.element(0, 0)
    }
}

impl<B, R0, C0> From<TypedMatrix<B, (R0,), (C0,)>> for f32
where
    B: Backend<Raw = f32>,
    R0: Product<C0, Output = f32>,
{
    fn from(singleton: TypedMatrix<B, (R0,), (C0,)>) -> Self {
        *singleton.storage.element(0, 0)
    }
}

/// Per-position values of a one-dimensional matrix with index lists
/// `Self = (R, C)`, stored into the backend `B`.
///
/// Implemented for column vectors of any height and for row vectors of width
/// two and more; 2-D matrices have no implementation.
pub trait VectorValues<B: Backend> {
    /// Tuple of the element type of every position, in order.
    type Values;

    /// Cast every value into its position.
    fn store(values: Self::Values, storage: &mut B);
}

macro_rules! row_values_impl {
    (($i0:tt $A0:ident)) => {};
    ($(($idx:tt $A:ident))+) => {
        impl<Bk, R0, $($A),+> VectorValues<Bk> for ((R0,), ($($A,)+))
        where
            Bk: Backend,
            $(R0: Product<$A>, Bk::Raw: ElementCast<Prod<R0, $A>>,)+
        {
            type Values = ($(Prod<R0, $A>,)+);

            fn store(values: Self::Values, storage: &mut Bk) {
                $( *storage.element_mut(0, $idx) = cast(values.$idx); )+
            }
        }
    };
}

macro_rules! vector_values_impls {
    ($As:tt $Bs:tt $(($idx:tt $A:ident $B:ident))+) => {
        impl<Bk, C0, $($A),+> VectorValues<Bk> for (($($A,)+), (C0,))
        where
            Bk: Backend,
            $($A: Product<C0>, Bk::Raw: ElementCast<Prod<$A, C0>>,)+
        {
            type Values = ($(Prod<$A, C0>,)+);

            fn store(values: Self::Values, storage: &mut Bk) {
                $( *storage.element_mut($idx, 0) = cast(values.$idx); )+
            }
        }

        row_values_impl! { $(($idx $A))+ }
    };
}

for_each_tuple!(vector_values_impls);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Mat;
    use crate::index::Identity;
    use crate::quantity::{Acceleration, Area, Dimensionless, Length, M, S, Time, Velocity};

    type Vector3 = TypedColumnVector<Mat<f64, 3, 1>, (f64, f64, f64)>;
    type Row3 = TypedRowVector<Mat<f64, 1, 3>, (f64, f64, f64)>;
    type Square2 = TypedMatrix<Mat<f64, 2, 2>, (Length, Length), (Length, Length)>;
    type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
    type Scalar = TypedMatrix<Mat<f64, 1, 1>, (Length,), (Identity,)>;

    #[test]
    fn default_is_all_zeros() {
        let m = Square2::default();
        assert_eq!(m.into_data(), Mat::zero());
        assert_eq!((Square2::ROWS, Square2::COLUMNS), (2, 2));
        assert_eq!((Vector3::ROWS, Vector3::COLUMNS), (3, 1));
    }

    #[test]
    fn copies_are_independent_values() {
        let a = Vector3::from_array([1.0, 2.0, 3.0]);
        let mut b = a;
        b[0] = 10.0;
        assert_eq!(a[0], 1.0);
        assert_eq!(b.clone()[0], 10.0);
    }

    #[test]
    fn singleton_round_trips_its_value() {
        let mut s = Scalar::new(5.0 * M);
        assert_eq!(s.value(), 5.0 * M);
        s.set_value(-1.0 * M);
        assert_eq!(Length::from(s), -1.0 * M);

        let raw = TypedMatrix::<Mat<f64, 1, 1>, (f64,), (Identity,)>::new(2.5);
        assert_eq!(f64::from(raw), 2.5);
        let narrow = TypedMatrix::<Mat<f32, 1, 1>, (Identity,), (f32,)>::new(1.5);
        assert_eq!(f32::from(narrow), 1.5);
    }

    #[test]
    fn array_fills_columns_and_rows_in_order() {
        let v = Vector3::from_array([3.0, 2.0, 1.0]);
        assert_eq!(v.data(), &Mat::new([[3.0], [2.0], [1.0]]));
        let r = Row3::from_array([3.0, 2.0, 1.0]);
        assert_eq!(r.data(), &Mat::new([[3.0, 2.0, 1.0]]));
    }

    #[test]
    fn values_are_cast_per_position() {
        let x = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
        assert_eq!(x.data(), &Mat::new([[3.0], [2.0], [1.0]]));

        type Mixed = TypedRowVector<Mat<f64, 1, 3>, (Dimensionless, Time, Area)>;
        let h = Mixed::from_values((Dimensionless::new(1.0), 0.5 * S, 4.0 * M * M));
        assert_eq!(h.data(), &Mat::new([[1.0, 0.5, 4.0]]));
    }

    #[test]
    fn nested_arrays_fill_row_major() {
        let m = Square2::from_rows([[1.0 * M * M, 2.0 * M * M], [3.0 * M * M, 4.0 * M * M]]);
        assert_eq!(m.data(), &Mat::new([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn nested_vectors_are_validated() {
        let ok = TypedMatrix::<Mat<f64, 2, 2>, (f64, f64), (f64, f64)>::try_from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
        ]);
        assert_eq!(ok.map(TypedMatrix::into_data).ok(), Some(Mat::new([[1.0, 2.0], [3.0, 4.0]])));

        let short = TypedMatrix::<Mat<f64, 2, 2>, (f64, f64), (f64, f64)>::try_from_rows(vec![vec![1.0, 2.0]]);
        assert!(matches!(short, Err(MatrixError::RowCount { expected: 2, found: 1 })));

        let ragged = TypedMatrix::<Mat<f64, 2, 2>, (f64, f64), (f64, f64)>::try_from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0],
        ]);
        assert!(matches!(ragged, Err(MatrixError::ColumnCount { row: 1, expected: 2, found: 1 })));
    }

    #[test]
    fn identity_sets_the_raw_diagonal() {
        let i = TypedMatrix::<Mat<f64, 3, 3>, (f64, f64, f64), (f64, f64, f64)>::identity();
        assert_eq!(i.into_data(), Mat::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]));
    }

    #[test]
    fn compatible_conversion_keeps_the_numbers() {
        // (m, m/s) × (1) against (1, 1/s) × (m): the same quantities.
        type Left = TypedColumnVector<Mat<f64, 2, 1>, (Length, Velocity)>;
        type Right = TypedMatrix<Mat<f64, 2, 1>, (Dimensionless, crate::quantity::Frequency), (Length,)>;
        let left = Left::from_values((4.0 * M, 2.0 * M / S));
        let right = Right::from_compatible(left);
        assert_eq!(right.data(), left.data());

        let mut back = Left::zeros();
        back.assign_from(right);
        assert_eq!(back.data(), left.data());
    }
}
