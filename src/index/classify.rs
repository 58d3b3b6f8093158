//! Compile-time classification of typed matrices.
//!
//! Predicates are traits: a constructor or accessor that only makes sense for,
//! say, a uniform column vector is bounded on [`Uniform`] and [`Column`] and
//! simply does not exist for other matrices. Shape-only predicates are also
//! available as `const fn` for use in assertions.

use super::{IndexList, LeftProductEach, Product};
use crate::matrix::TypedMatrix;
use crate::tuples::for_each_tuple;

/// Row and column counts of a matrix type.
pub trait Shape {
    /// Number of rows.
    const ROWS: usize;
    /// Number of columns.
    const COLUMNS: usize;
}

impl<B, R: IndexList, C: IndexList> Shape for TypedMatrix<B, R, C> {
    const ROWS: usize = R::LEN;
    const COLUMNS: usize = C::LEN;
}

/// The matrix has a single column.
pub const fn is_column<M: Shape>() -> bool {
    M::COLUMNS == 1
}

/// The matrix has a single row.
pub const fn is_row<M: Shape>() -> bool {
    M::ROWS == 1
}

/// The matrix is a row or a column vector.
pub const fn is_one_dimension<M: Shape>() -> bool {
    is_row::<M>() || is_column::<M>()
}

/// The matrix holds exactly one element.
pub const fn is_singleton<M: Shape>() -> bool {
    is_row::<M>() && is_column::<M>()
}

/// Both matrices have the same row and column counts.
pub const fn same_shape<A: Shape, B: Shape>() -> bool {
    A::ROWS == B::ROWS && A::COLUMNS == B::COLUMNS
}

/// Every element of a row indexed by `Self` against the column list `C` has
/// the same type.
pub trait UniformRow<C> {
    /// The common element type of the row.
    type Element;
}

/// Every element of a matrix with row list `Self` and column list `C` has the
/// same type.
///
/// A matrix may be uniform with different row and column indexes, for example
/// rows `(m, m)` against columns `(1/s, 1/s)`.
pub trait UniformOver<C> {
    /// The common element type of the matrix.
    type Element;
}

/// The nested tuple of every element type of a matrix with row list `Self` and
/// column list `C`, row by row.
///
/// Two matrices with equal grids hold the same quantities at the same
/// positions even if their index lists differ.
pub trait ElementGrid<C> {
    /// `((E00, E01, …), (E10, E11, …), …)`.
    type Grid;
}

/// Every term `Self_k × Rhs_k` of a matrix product has the same type.
///
/// Implemented for column lists against row lists of the same length only, so
/// this also rejects products with mismatched inner dimensions.
pub trait Contraction<Rhs> {
    /// Type of every contraction term.
    type Output;
}

/// The typed matrix is uniform: a single element type everywhere.
pub trait Uniform {
    /// The element type.
    type Element;
}

/// The typed matrix is a single row.
pub trait Row {}

/// The typed matrix is a single column.
pub trait Column {}

/// The typed matrix is a row or a column vector.
pub trait OneDimension {}

/// The typed matrix holds exactly one element.
pub trait Singleton {}

impl<B, R, C> Uniform for TypedMatrix<B, R, C>
where
    R: UniformOver<C>,
{
    type Element = <R as UniformOver<C>>::Element;
}

impl<B, R0, C> Row for TypedMatrix<B, (R0,), C> {}

impl<B, R, C0> Column for TypedMatrix<B, R, (C0,)> {}

impl<B, R0, C0> Singleton for TypedMatrix<B, (R0,), (C0,)> {}

// Columns of any height; rows of width two and more so the singleton is not
// claimed twice.
impl<B, R, C0> OneDimension for TypedMatrix<B, R, (C0,)> {}

macro_rules! one_dimension_row_impl {
    (($i0:tt $A0:ident)) => {};
    ($(($idx:tt $A:ident))+) => {
        impl<Bk, R0, $($A),+> OneDimension for TypedMatrix<Bk, (R0,), ($($A,)+)> {}
    };
}

macro_rules! classify_impls {
    ($As:tt $Bs:tt $(($idx:tt $A:ident $B:ident))+) => {
        impl<E, R, $($A),+> UniformRow<($($A,)+)> for R
        where
            $(R: Product<$A, Output = E>,)+
        {
            type Element = E;
        }

        impl<C, E, $($A),+> UniformOver<C> for ($($A,)+)
        where
            $($A: UniformRow<C, Element = E>,)+
        {
            type Element = E;
        }

        impl<C, $($A),+> ElementGrid<C> for ($($A,)+)
        where
            $(C: LeftProductEach<$A>,)+
        {
            type Grid = ($(<C as LeftProductEach<$A>>::Output,)+);
        }

        impl<K, $($A,)+ $($B,)+> Contraction<($($B,)+)> for ($($A,)+)
        where
            $($A: Product<$B, Output = K>,)+
        {
            type Output = K;
        }

        one_dimension_row_impl! { $(($idx $A))+ }
    };
}

for_each_tuple!(classify_impls);
