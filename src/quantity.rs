//! A small length/time unit system with compile-time exponents.
//!
//! [`Quantity<L, T>`] is an `f64` tagged with the exponents of metre and
//! second. It is an [`IndexType`], so it can index rows and columns, and it
//! plugs into the element cast in both directions, including in-place
//! references into `f64` storage.
//!
//! ```
//! use typed_linalg::quantity::{Acceleration, M, S, Velocity};
//!
//! let v: Velocity = 2.5 * M / S;
//! let a: Acceleration = v / (2.0 * S);
//! assert_eq!(a.value(), 1.25);
//! assert_eq!(a.to_string(), "1.25 m/s²");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use bytemuck::TransparentWrapper;

use crate::backend::{Backend, ScalarStorage, Scale};
use crate::cast::{ElementCast, ElementCastRef};
use crate::index::{
    Identity, IdentityIndex, IndexType, LeftProductEach, LeftQuotientEach, Product, ProductEach,
    Quot, Quotient,
};
use crate::matrix::TypedMatrix;
use crate::ops::{QuotientColumns, QuotientRows, ScalarQuotientStorage};

/// Exponent of a base unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exp<const N: i8>;

/// Runtime value of an exponent marker.
pub trait Exponent {
    /// The exponent.
    const VALUE: i8;
}

impl<const N: i8> Exponent for Exp<N> {
    const VALUE: i8 = N;
}

/// Sum of two exponents.
pub trait ExpAdd<Rhs> {
    /// The resulting exponent.
    type Output: Exponent;
}

/// Difference of two exponents.
pub trait ExpSub<Rhs> {
    /// The resulting exponent.
    type Output: Exponent;
}

macro_rules! exponent_arithmetic {
    ($($a:literal)+) => {
        exponent_arithmetic!(@rows [$($a)+] $($a)+);
    };
    (@rows $all:tt $($a:literal)+) => {
        $( exponent_arithmetic!(@row $a $all); )+
    };
    (@row $a:literal [$($b:literal)+]) => {
        $(
            impl ExpAdd<Exp<{ $b }>> for Exp<{ $a }> {
                type Output = Exp<{ $a + $b }>;
            }

            impl ExpSub<Exp<{ $b }>> for Exp<{ $a }> {
                type Output = Exp<{ $a - $b }>;
            }
        )+
    };
}

exponent_arithmetic!(-8 -7 -6 -5 -4 -3 -2 -1 0 1 2 3 4 5 6 7 8);

/// A value in metre<sup>L</sup> · second<sup>T</sup>.
#[repr(transparent)]
pub struct Quantity<L, T> {
    value: f64,
    dimension: PhantomData<fn() -> (L, T)>,
}

// SAFETY: `repr(transparent)` over `f64`; the only other field is a
// zero-sized marker.
unsafe impl<L, T> TransparentWrapper<f64> for Quantity<L, T> {}

/// Pure number.
pub type Dimensionless = Quantity<Exp<0>, Exp<0>>;
/// Metres.
pub type Length = Quantity<Exp<1>, Exp<0>>;
/// Square metres.
pub type Area = Quantity<Exp<2>, Exp<0>>;
/// Seconds.
pub type Time = Quantity<Exp<0>, Exp<1>>;
/// Per second.
pub type Frequency = Quantity<Exp<0>, Exp<-1>>;
/// Metres per second.
pub type Velocity = Quantity<Exp<1>, Exp<-1>>;
/// Metres per square second.
pub type Acceleration = Quantity<Exp<1>, Exp<-2>>;

/// One metre.
pub const M: Length = Quantity::new(1.0);
/// One second.
pub const S: Time = Quantity::new(1.0);

impl<L, T> Quantity<L, T> {
    /// Wrap a raw value.
    pub const fn new(value: f64) -> Self {
        Self { value, dimension: PhantomData }
    }

    /// The raw value.
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

impl<L, T> Clone for Quantity<L, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, T> Copy for Quantity<L, T> {}

impl<L, T> Default for Quantity<L, T> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<L, T> PartialEq for Quantity<L, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<L, T> PartialOrd for Quantity<L, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<L: Exponent, T: Exponent> fmt::Debug for Quantity<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?} m^{} s^{})", self.value, L::VALUE, T::VALUE)
    }
}

impl<L: Exponent, T: Exponent> fmt::Display for Quantity<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        let symbol = unit_symbol(L::VALUE, T::VALUE);
        if symbol.is_empty() {
            Ok(())
        } else {
            write!(f, " {symbol}")
        }
    }
}

fn superscript(power: i8) -> String {
    power
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

fn power_of(symbol: &str, power: i8) -> String {
    if power == 1 {
        symbol.to_owned()
    } else {
        format!("{symbol}{}", superscript(power))
    }
}

/// `m²/s`, `1/s`, `s/m`; two denominators use negative powers: `m⁻¹ s⁻¹`.
fn unit_symbol(length: i8, time: i8) -> String {
    let units = [("m", length), ("s", time)];
    let numerator: Vec<String> = units
        .iter()
        .filter(|(_, power)| *power > 0)
        .map(|(symbol, power)| power_of(symbol, *power))
        .collect();
    let denominator: Vec<(&str, i8)> = units.iter().copied().filter(|(_, power)| *power < 0).collect();

    match denominator.as_slice() {
        [] => numerator.join(" "),
        [(symbol, power)] if numerator.is_empty() => format!("1/{}", power_of(symbol, -power)),
        [(symbol, power)] => format!("{}/{}", numerator.join(" "), power_of(symbol, -power)),
        _ => units
            .iter()
            .filter(|(_, power)| *power != 0)
            .map(|(symbol, power)| power_of(symbol, *power))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

impl<L, T> IndexType for Quantity<L, T> {}

impl<L, T> ElementCast<f64> for Quantity<L, T> {
    #[inline(always)]
    fn cast(value: f64) -> Self {
        Self::new(value)
    }
}

impl<L, T> ElementCast<Quantity<L, T>> for f64 {
    #[inline(always)]
    fn cast(value: Quantity<L, T>) -> Self {
        value.value
    }
}

impl<L, T> ElementCastRef<f64> for Quantity<L, T> {
    #[inline(always)]
    fn cast_ref(value: &f64) -> &Self {
        Self::wrap_ref(value)
    }

    #[inline(always)]
    fn cast_mut(value: &mut f64) -> &mut Self {
        Self::wrap_mut(value)
    }
}

impl<B, R0, C0, L, T> From<TypedMatrix<B, (R0,), (C0,)>> for Quantity<L, T>
where
    B: Backend<Raw = f64>,
    R0: Product<C0, Output = Quantity<L, T>>,
{
    fn from(singleton: TypedMatrix<B, (R0,), (C0,)>) -> Self {
        Self::new(*singleton.data().element(0, 0))
    }
}

impl<L, T, B, R, C> Mul<TypedMatrix<B, R, C>> for Quantity<L, T>
where
    B: Backend<Raw = f64> + Scale<f64>,
    R: LeftProductEach<Quantity<L, T>>,
{
    type Output = TypedMatrix<B, <R as LeftProductEach<Self>>::Output, C>;

    fn mul(self, matrix: TypedMatrix<B, R, C>) -> Self::Output {
        let mut storage = matrix.into_data();
        storage.scale(self.value);
        TypedMatrix::from_storage(storage)
    }
}

/// A quantity divided by a single-column matrix, see [`crate::ops`].
impl<L, T, B, R, C0> Div<TypedMatrix<B, R, (C0,)>> for Quantity<L, T>
where
    B: ScalarStorage<Raw = f64>,
    Identity: Quotient<C0>,
    (Quantity<L, T>,): ProductEach<Quot<Identity, C0>>,
    R: LeftQuotientEach<Identity>,
{
    type Output = TypedMatrix<
        ScalarQuotientStorage<B>,
        QuotientRows<(Self,), IdentityIndex, (C0,)>,
        QuotientColumns<R>,
    >;

    fn div(self, matrix: TypedMatrix<B, R, (C0,)>) -> Self::Output {
        TypedMatrix::<B::Storage, (Self,), IdentityIndex>::from_storage(B::from_scalar(self.value)) / matrix
    }
}

impl<L1, T1, L2, T2> Mul<Quantity<L2, T2>> for Quantity<L1, T1>
where
    L1: ExpAdd<L2>,
    T1: ExpAdd<T2>,
{
    type Output = Quantity<<L1 as ExpAdd<L2>>::Output, <T1 as ExpAdd<T2>>::Output>;

    fn mul(self, rhs: Quantity<L2, T2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<L1, T1, L2, T2> Div<Quantity<L2, T2>> for Quantity<L1, T1>
where
    L1: ExpSub<L2>,
    T1: ExpSub<T2>,
{
    type Output = Quantity<<L1 as ExpSub<L2>>::Output, <T1 as ExpSub<T2>>::Output>;

    fn div(self, rhs: Quantity<L2, T2>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<L, T> Mul<f64> for Quantity<L, T> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<L, T> Div<f64> for Quantity<L, T> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<L, T> Mul<Quantity<L, T>> for f64 {
    type Output = Quantity<L, T>;

    fn mul(self, rhs: Quantity<L, T>) -> Quantity<L, T> {
        Quantity::new(self * rhs.value)
    }
}

impl<L, T> Div<Quantity<L, T>> for f64
where
    Exp<0>: ExpSub<L> + ExpSub<T>,
{
    type Output = Quantity<<Exp<0> as ExpSub<L>>::Output, <Exp<0> as ExpSub<T>>::Output>;

    fn div(self, rhs: Quantity<L, T>) -> Self::Output {
        Quantity::new(self / rhs.value)
    }
}

impl<L, T> Add for Quantity<L, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<L, T> Sub for Quantity<L, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<L, T> AddAssign for Quantity<L, T> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<L, T> SubAssign for Quantity<L, T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<L, T> Neg for Quantity<L, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Prod, Quot};
    use approx::assert_relative_eq;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn exponents_add_and_subtract() {
        assert!(same::<<Exp<1> as ExpAdd<Exp<-1>>>::Output, Exp<0>>());
        assert!(same::<<Exp<-8> as ExpSub<Exp<8>>>::Output, Exp<-16>>());
        assert_eq!(<<Exp<2> as ExpAdd<Exp<2>>>::Output as Exponent>::VALUE, 4);
    }

    #[test]
    fn units_compose() {
        let v: Velocity = 2.0 * M / S;
        let d: Length = v * (3.0 * S);
        assert_relative_eq!(d.value(), 6.0);
        let ratio: Dimensionless = d / (2.0 * M);
        assert_relative_eq!(ratio.value(), 3.0);
        let f: Frequency = 1.0 / (4.0 * S);
        assert_relative_eq!(f.value(), 0.25);
        assert!(same::<Prod<Velocity, Time>, Length>());
        assert!(same::<Quot<Area, Length>, Length>());
    }

    #[test]
    fn additive_operators_keep_the_unit() {
        let mut x = 3.0 * M;
        x += 1.0 * M;
        x -= 0.5 * M;
        assert_eq!(x, 3.5 * M);
        assert_eq!(-x + x, Length::default());
        assert!(x > 3.0 * M);
        assert_eq!((-x).abs(), x);
    }

    #[test]
    fn symbols() {
        assert_eq!((3.0 * M).to_string(), "3 m");
        assert_eq!((2.0 * M / S).to_string(), "2 m/s");
        assert_eq!((1.0 * M / (S * S)).to_string(), "1 m/s²");
        assert_eq!((6.0 * M * M / S).to_string(), "6 m²/s");
        assert_eq!(Dimensionless::new(1.5).to_string(), "1.5");
        assert_eq!(Frequency::new(1.0).to_string(), "1 1/s");
        assert_eq!(Quantity::<Exp<-1>, Exp<1>>::new(0.0).to_string(), "0 s/m");
        assert_eq!(Quantity::<Exp<2>, Exp<-4>>::new(500.0).to_string(), "500 m²/s⁴");
        assert_eq!(Quantity::<Exp<-1>, Exp<-1>>::new(2.0).to_string(), "2 m⁻¹ s⁻¹");
        assert_eq!(format!("{:.2}", 2.0 / 3.0 * M), "0.67 m");
    }

    #[test]
    fn raw_casts_both_ways() {
        let v: Velocity = crate::cast(4.0_f64);
        assert_eq!(v, 4.0 * M / S);
        assert_eq!(crate::cast::<f64, _>(v), 4.0);
    }

    #[test]
    fn typed_factor_on_the_left_of_a_matrix() {
        type State = crate::TypedColumnVector<crate::backend::Mat<f64, 2, 1>, (Length, Velocity)>;
        let x = State::from_values((3.0 * M, 2.0 * M / S));
        let scaled = (0.5 / M) * x;
        let first: Dimensionless = scaled.at::<0, 0>();
        let second: Frequency = scaled.at::<1, 0>();
        assert_relative_eq!(first.value(), 1.5);
        assert_relative_eq!(second.value(), 1.0);
    }

    #[test]
    fn quantity_over_a_column() {
        type State = crate::TypedColumnVector<crate::backend::Mat<f64, 2, 1>, (Length, Velocity)>;
        let x = State::from_values((3.0 * M, 2.0 * M / S));
        let q = (6.0 * M * M) / x;
        assert_eq!((q.rows(), q.columns()), (1, 2));
        let first: Length = q.at::<0, 0>();
        let second: Prod<Length, Time> = q.at::<0, 1>();
        assert_relative_eq!(first.value(), 2.0);
        assert_relative_eq!(second.value(), 0.0);

        let ratio = (1.0 * M) / x;
        assert_eq!(ratio.to_string(), "[0.3333333333333333, 0 s]");
    }

    #[test]
    fn reference_cast_aliases_raw_storage() {
        let mut raw = 1.0_f64;
        *<Length as ElementCastRef<f64>>::cast_mut(&mut raw) += 2.0 * M;
        assert_eq!(raw, 3.0);
        assert_eq!(*<Length as ElementCastRef<f64>>::cast_ref(&raw), 3.0 * M);
    }
}
