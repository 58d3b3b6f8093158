//! Index types and index lists.
//!
//! # Motivation
//! A typed matrix does not store the type of its elements. Each row and each
//! column carries an *index type* instead, and the element type at `(i, j)` is
//! computed as the type-level product of the `i`-th row index and the `j`-th
//! column index. A covariance over `(position, velocity)` therefore holds
//! `m²`, `m²/s`, `m²/s` and `m²/s²` without spelling out four element types.
//!
//! Index lists are tuples. Their length is the row or column count of the
//! matrix, and positions are resolved at compile time through [`At`]: asking
//! for a position past the end of a list has no implementation and fails to
//! compile.

pub mod arithmetic;
pub mod classify;

pub use arithmetic::{
    LeftProductEach, LeftQuotientEach, Prod, Product, ProductEach, Quot, Quotient, QuotientEach,
};
pub use classify::{
    Column, Contraction, ElementGrid, OneDimension, Row, Shape, Singleton, Uniform, UniformOver,
    UniformRow, is_column, is_one_dimension, is_row, is_singleton, same_shape,
};

use crate::tuples::for_each_tuple;

/// Neutral index of the type-level arithmetic.
///
/// Vectors use `(Identity,)` for their absent axis: the elements of a column
/// vector are exactly its row index types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

/// Marker for types that may be used as a row or column index.
///
/// Products and quotients of two index types resolve through their `Mul` and
/// `Div` implementations. [`Identity`] deliberately does not implement this
/// trait: its arithmetic is defined separately so that it stays neutral.
pub trait IndexType {}

impl IndexType for f64 {}
impl IndexType for f32 {}

/// A compile-time list of index types.
pub trait IndexList {
    /// Number of index types in the list.
    const LEN: usize;
}

/// Type at position `I` of an index list.
///
/// Implemented only for `I < LEN`, which is how out-of-range accessors are
/// rejected at compile time.
pub trait At<const I: usize> {
    /// The index type at position `I`.
    type Output;
}

/// Type at position `I` of the list `L`.
pub type IndexAt<L, const I: usize> = <L as At<I>>::Output;

/// First index type of the list `L`.
pub type First<L> = IndexAt<L, 0>;

/// Element type at position `(I, J)` of a matrix with row list `R` and column
/// list `C`.
pub type ElementAt<R, C, const I: usize, const J: usize> = Prod<IndexAt<R, I>, IndexAt<C, J>>;

/// Index list of the absent axis of a vector.
pub type IdentityIndex = (Identity,);

macro_rules! at_impl {
    ([$($All:ident)+] $idx:tt $Out:ident) => {
        impl<$($All),+> At<$idx> for ($($All,)+) {
            type Output = $Out;
        }
    };
}

macro_rules! index_list_impls {
    ($As:tt $Bs:tt $(($idx:tt $A:ident $B:ident))+) => {
        impl<$($A),+> IndexList for ($($A,)+) {
            const LEN: usize = [$($idx),+].len();
        }

        $( at_impl!($As $idx $A); )+
    };
}

for_each_tuple!(index_list_impls);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn list_lengths() {
        assert_eq!(<(f64,) as IndexList>::LEN, 1);
        assert_eq!(<(f64, f32, f64) as IndexList>::LEN, 3);
        assert_eq!(
            <(f64, f64, f64, f64, f64, f64, f64, f64) as IndexList>::LEN,
            crate::tuples::MAX_INDEXES
        );
    }

    #[test]
    fn positions_resolve_to_their_type() {
        assert!(same::<IndexAt<(f64, f32, Identity), 0>, f64>());
        assert!(same::<IndexAt<(f64, f32, Identity), 1>, f32>());
        assert!(same::<IndexAt<(f64, f32, Identity), 2>, Identity>());
        assert!(same::<First<(f32, f64)>, f32>());
    }

    #[test]
    fn element_is_product_of_row_and_column_index() {
        assert!(same::<ElementAt<(f64, f64), IdentityIndex, 1, 0>, f64>());
        assert!(same::<ElementAt<(Identity,), (f32,), 0, 0>, f32>());
    }
}
