//! Type-level product and quotient of index types.
//!
//! Nothing here exists at runtime: the traits only carry an associated
//! `Output` type. A combination without an implementation is a compile error.

use std::ops::{Div, Mul};

use super::{Identity, IndexType};
use crate::tuples::for_each_tuple;

/// Type of the product `Self × Rhs`.
///
/// * `X × Identity = X` and `Identity × X = X`.
/// * Two index types multiply through their `Mul` implementation.
/// * Two lists of the same length multiply elementwise.
pub trait Product<Rhs> {
    /// The resulting index type.
    type Output;
}

/// Type of the quotient `Self ÷ Rhs`.
///
/// * `X ÷ Identity = X`, `Identity ÷ Identity = Identity`.
/// * `Identity ÷ B` is `(B ÷ B) ÷ B`, the inverse of `B` obtained without an
///   inverse operator on `B`.
/// * Two index types divide through their `Div` implementation.
/// * Two lists of the same length divide elementwise.
pub trait Quotient<Rhs> {
    /// The resulting index type.
    type Output;
}

/// `A × B`.
pub type Prod<A, B> = <A as Product<B>>::Output;

/// `A ÷ B`.
pub type Quot<A, B> = <A as Quotient<B>>::Output;

impl<A: IndexType, B: IndexType> Product<B> for A
where
    A: Mul<B>,
{
    type Output = <A as Mul<B>>::Output;
}

impl<A: IndexType> Product<Identity> for A {
    type Output = A;
}

impl<B: IndexType> Product<B> for Identity {
    type Output = B;
}

impl Product<Identity> for Identity {
    type Output = Identity;
}

impl<A: IndexType, B: IndexType> Quotient<B> for A
where
    A: Div<B>,
{
    type Output = <A as Div<B>>::Output;
}

impl<A: IndexType> Quotient<Identity> for A {
    type Output = A;
}

impl Quotient<Identity> for Identity {
    type Output = Identity;
}

impl<B: IndexType> Quotient<B> for Identity
where
    B: Quotient<B>,
    Quot<B, B>: Quotient<B>,
{
    type Output = Quot<Quot<B, B>, B>;
}

/// Every index of the list multiplied on the right by `K`: `(A0 × K, A1 × K, …)`.
pub trait ProductEach<K> {
    /// The resulting index list.
    type Output;
}

/// Every index of the list multiplied on the left by `K`: `(K × A0, K × A1, …)`.
pub trait LeftProductEach<K> {
    /// The resulting index list.
    type Output;
}

/// Every index of the list divided by `K`: `(A0 ÷ K, A1 ÷ K, …)`.
pub trait QuotientEach<K> {
    /// The resulting index list.
    type Output;
}

/// `K` divided by every index of the list: `(K ÷ A0, K ÷ A1, …)`.
pub trait LeftQuotientEach<K> {
    /// The resulting index list.
    type Output;
}

macro_rules! list_arithmetic_impls {
    ($As:tt $Bs:tt $(($idx:tt $A:ident $B:ident))+) => {
        impl<$($A,)+ $($B,)+> Product<($($B,)+)> for ($($A,)+)
        where
            $($A: Product<$B>,)+
        {
            type Output = ($(Prod<$A, $B>,)+);
        }

        impl<$($A,)+ $($B,)+> Quotient<($($B,)+)> for ($($A,)+)
        where
            $($A: Quotient<$B>,)+
        {
            type Output = ($(Quot<$A, $B>,)+);
        }

        impl<K, $($A),+> ProductEach<K> for ($($A,)+)
        where
            $($A: Product<K>,)+
        {
            type Output = ($(Prod<$A, K>,)+);
        }

        impl<K, $($A),+> LeftProductEach<K> for ($($A,)+)
        where
            $(K: Product<$A>,)+
        {
            type Output = ($(Prod<K, $A>,)+);
        }

        impl<K, $($A),+> QuotientEach<K> for ($($A,)+)
        where
            $($A: Quotient<K>,)+
        {
            type Output = ($(Quot<$A, K>,)+);
        }

        impl<K, $($A),+> LeftQuotientEach<K> for ($($A,)+)
        where
            $(K: Quotient<$A>,)+
        {
            type Output = ($(Quot<K, $A>,)+);
        }
    };
}

for_each_tuple!(list_arithmetic_impls);
