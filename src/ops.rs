//! Typed algebra.
//!
//! Every operator derives the index lists of its result at compile time and
//! hands the numbers to one backend capability. The dimensional rules:
//!
//! * `A + B`, `A - B`: both operands hold the same element type at every
//!   position; the result keeps the index lists of `A`.
//! * `A * B`: every term `C_A[k] × R_B[k]` of the contraction has one type.
//!   Rows become `R_A × C_A[0]`, columns `R_B[0] × C_B`.
//! * `A / B`: the `X` with `X * B = A`. Rows become
//!   `R_A × (C_A[0] ÷ C_B[0])`, columns `1 ÷ R_B`.
//! * `A * k`, `k * A`, `A / k` with a scalar index type `k` rescale the rows.
//! * `k / A` for a single-column `A` is the singleton `k` divided by `A`:
//!   one row `k ÷ C_A[0]`, columns `1 ÷ R_A`.
//!
//! Mismatched dimensions are compile errors:
//!
//! ```compile_fail
//! use typed_linalg::{TypedColumnVector, backend::Mat, quantity::{Acceleration, Velocity}};
//!
//! let v = TypedColumnVector::<Mat<f64, 2, 1>, (Velocity, Velocity)>::zeros();
//! let a = TypedColumnVector::<Mat<f64, 2, 1>, (Acceleration, Acceleration)>::zeros();
//! let _ = v + a;
//! ```

use std::ops::{Add, Div, Mul, Sub};

use crate::backend::{Backend, Divide, DivideScalar, MatMul, Scale, ScalarStorage, Transpose};
use crate::cast::{ElementCast, cast};
use crate::index::{
    At, Contraction, ElementGrid, First, Identity, IdentityIndex, IndexList, IndexType,
    LeftProductEach, LeftQuotientEach, ProductEach, Quot, Quotient, QuotientEach, UniformOver,
};
use crate::matrix::TypedMatrix;

impl<B: PartialEq, R, C> PartialEq for TypedMatrix<B, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<B, R1, C1, B2, R2, C2> Add<TypedMatrix<B2, R2, C2>> for TypedMatrix<B, R1, C1>
where
    B: Add<B2, Output = B>,
    R1: ElementGrid<C1>,
    R2: ElementGrid<C2, Grid = <R1 as ElementGrid<C1>>::Grid>,
{
    type Output = Self;

    fn add(self, rhs: TypedMatrix<B2, R2, C2>) -> Self {
        Self::from_storage(self.into_data() + rhs.into_data())
    }
}

impl<B, R1, C1, B2, R2, C2> Sub<TypedMatrix<B2, R2, C2>> for TypedMatrix<B, R1, C1>
where
    B: Sub<B2, Output = B>,
    R1: ElementGrid<C1>,
    R2: ElementGrid<C2, Grid = <R1 as ElementGrid<C1>>::Grid>,
{
    type Output = Self;

    fn sub(self, rhs: TypedMatrix<B2, R2, C2>) -> Self {
        Self::from_storage(self.into_data() - rhs.into_data())
    }
}

/// Row list of `A * B`.
pub type ProductRows<R1, C1> = <R1 as ProductEach<First<C1>>>::Output;
/// Column list of `A * B`.
pub type ProductColumns<R2, C2> = <C2 as LeftProductEach<First<R2>>>::Output;
/// Row list of `A / B`.
pub type QuotientRows<R1, C1, C2> = <R1 as ProductEach<Quot<First<C1>, First<C2>>>>::Output;
/// Column list of `A / B`.
pub type QuotientColumns<R2> = <R2 as LeftQuotientEach<Identity>>::Output;

impl<B1, R1, C1, B2, R2, C2> Mul<TypedMatrix<B2, R2, C2>> for TypedMatrix<B1, R1, C1>
where
    B1: MatMul<B2>,
    C1: Contraction<R2> + At<0>,
    R2: At<0>,
    R1: ProductEach<First<C1>>,
    C2: LeftProductEach<First<R2>>,
{
    type Output = TypedMatrix<<B1 as MatMul<B2>>::Output, ProductRows<R1, C1>, ProductColumns<R2, C2>>;

    fn mul(self, rhs: TypedMatrix<B2, R2, C2>) -> Self::Output {
        TypedMatrix::from_storage(self.data().matmul(rhs.data()))
    }
}

impl<B1, R1, C1, B2, R2, C2> Div<TypedMatrix<B2, R2, C2>> for TypedMatrix<B1, R1, C1>
where
    B1: Divide<B2>,
    C1: IndexList + At<0>,
    C2: IndexList + At<0>,
    First<C1>: Quotient<First<C2>>,
    R1: ProductEach<Quot<First<C1>, First<C2>>>,
    R2: LeftQuotientEach<Identity>,
{
    type Output = TypedMatrix<<B1 as Divide<B2>>::Output, QuotientRows<R1, C1, C2>, QuotientColumns<R2>>;

    fn div(self, rhs: TypedMatrix<B2, R2, C2>) -> Self::Output {
        const { assert!(C1::LEN == C2::LEN, "dividend and divisor column counts differ") };
        TypedMatrix::from_storage(self.data().divide(rhs.data()))
    }
}

impl<B, R, C, K> Mul<K> for TypedMatrix<B, R, C>
where
    K: IndexType,
    B: Backend + Scale<<B as Backend>::Raw>,
    B::Raw: ElementCast<K>,
    R: ProductEach<K>,
{
    type Output = TypedMatrix<B, <R as ProductEach<K>>::Output, C>;

    fn mul(self, factor: K) -> Self::Output {
        let mut storage = self.into_data();
        storage.scale(cast(factor));
        TypedMatrix::from_storage(storage)
    }
}

impl<B, R, C, K> Div<K> for TypedMatrix<B, R, C>
where
    K: IndexType,
    B: Backend + DivideScalar<<B as Backend>::Raw>,
    B::Raw: ElementCast<K>,
    R: QuotientEach<K>,
{
    type Output = TypedMatrix<B, <R as QuotientEach<K>>::Output, C>;

    fn div(self, divisor: K) -> Self::Output {
        let mut storage = self.into_data();
        storage.divide_scalar(cast(divisor));
        TypedMatrix::from_storage(storage)
    }
}

macro_rules! left_scalar_mul_impl {
    ($($scalar:ty)+) => {
        $(
            impl<B, R, C> Mul<TypedMatrix<B, R, C>> for $scalar
            where
                B: Backend + Scale<<B as Backend>::Raw>,
                B::Raw: ElementCast<$scalar>,
                R: LeftProductEach<$scalar>,
            {
                type Output = TypedMatrix<B, <R as LeftProductEach<$scalar>>::Output, C>;

                fn mul(self, matrix: TypedMatrix<B, R, C>) -> Self::Output {
                    let mut storage = matrix.into_data();
                    storage.scale(cast(self));
                    TypedMatrix::from_storage(storage)
                }
            }
        )+
    };
}

left_scalar_mul_impl!(f64 f32);

/// Storage of `k / A` for a divisor stored in `B`.
pub type ScalarQuotientStorage<B> = <<B as ScalarStorage>::Storage as Divide<B>>::Output;

macro_rules! left_scalar_div_impl {
    ($($scalar:ty)+) => {
        $(
            impl<B, R, C0> Div<TypedMatrix<B, R, (C0,)>> for $scalar
            where
                B: ScalarStorage,
                B::Raw: ElementCast<$scalar>,
                Identity: Quotient<C0>,
                ($scalar,): ProductEach<Quot<Identity, C0>>,
                R: LeftQuotientEach<Identity>,
            {
                type Output = TypedMatrix<
                    ScalarQuotientStorage<B>,
                    QuotientRows<($scalar,), IdentityIndex, (C0,)>,
                    QuotientColumns<R>,
                >;

                fn div(self, matrix: TypedMatrix<B, R, (C0,)>) -> Self::Output {
                    TypedMatrix::<B::Storage, ($scalar,), IdentityIndex>::from_storage(B::from_scalar(cast(self)))
                        / matrix
                }
            }
        )+
    };
}

left_scalar_div_impl!(f64 f32);

/// Transpose: rows and columns swap places with their index lists.
pub fn transposed<B: Transpose, R, C>(matrix: &TypedMatrix<B, R, C>) -> TypedMatrix<B::Output, C, R> {
    TypedMatrix::from_storage(matrix.data().transpose())
}

/// Multiply every element by `factor` through the backend.
///
/// Only factors that leave every row index type unchanged are accepted, so a
/// plain number scales a matrix of lengths but a time does not.
pub fn scale<B, R, C, K>(matrix: &mut TypedMatrix<B, R, C>, factor: K)
where
    K: IndexType,
    B: Backend + Scale<<B as Backend>::Raw>,
    B::Raw: ElementCast<K>,
    R: ProductEach<K, Output = R>,
{
    matrix.data_mut().scale(cast(factor));
}

impl<B, R, C> TypedMatrix<B, R, C> {
    /// Method form of [`transposed`].
    pub fn transpose(&self) -> TypedMatrix<B::Output, C, R>
    where
        B: Transpose,
    {
        transposed(self)
    }

    /// Method form of [`scale`].
    pub fn scale<K>(&mut self, factor: K)
    where
        K: IndexType,
        B: Backend + Scale<<B as Backend>::Raw>,
        B::Raw: ElementCast<K>,
        R: ProductEach<K, Output = R>,
    {
        scale(self, factor);
    }

    /// Multiply every element of a uniform matrix by `factor` with the
    /// element type's own `*`, one element at a time.
    pub fn scale_elements<E, K>(&mut self, factor: K)
    where
        B: Backend,
        R: UniformOver<C, Element = E> + IndexList,
        C: IndexList,
        E: ElementCast<B::Raw> + Mul<K, Output = E>,
        K: Copy,
        B::Raw: ElementCast<E>,
    {
        for i in 0..R::LEN {
            for j in 0..C::LEN {
                let value: E = cast(*self.data().element(i, j));
                *self.data_mut().element_mut(i, j) = cast(value * factor);
            }
        }
    }
}
