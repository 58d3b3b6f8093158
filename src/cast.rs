//! Element conversion customization point.
//!
//! Backends store raw numbers; typed matrices hand out richer element types.
//! Every crossing between the two goes through [`ElementCast`], which is the
//! only place a units library has to plug into. Implement it for your own
//! `(To, From)` pairs:
//!
//! ```
//! use typed_linalg::ElementCast;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Meters(f64);
//!
//! impl ElementCast<f64> for Meters {
//!     fn cast(value: f64) -> Self {
//!         Meters(value)
//!     }
//! }
//!
//! impl ElementCast<Meters> for f64 {
//!     fn cast(value: Meters) -> Self {
//!         value.0
//!     }
//! }
//!
//! assert_eq!(typed_linalg::cast::<Meters, f64>(2.5), Meters(2.5));
//! ```

/// Convert a value of type `From` into `Self`.
///
/// The identity conversion is always available.
pub trait ElementCast<From>: Sized {
    /// Perform the conversion.
    fn cast(value: From) -> Self;
}

impl<T> ElementCast<T> for T {
    #[inline(always)]
    fn cast(value: T) -> Self {
        value
    }
}

/// View a stored `From` in place as `Self`.
///
/// This is the reference form of [`ElementCast`]: mutable and borrowed
/// accessors return references into the backend storage instead of copies.
/// Only layout-compatible types can implement it; the identity is always
/// available.
pub trait ElementCastRef<From> {
    /// Borrow `value` as `Self`.
    fn cast_ref(value: &From) -> &Self;

    /// Mutably borrow `value` as `Self`.
    fn cast_mut(value: &mut From) -> &mut Self;
}

impl<T> ElementCastRef<T> for T {
    #[inline(always)]
    fn cast_ref(value: &T) -> &Self {
        value
    }

    #[inline(always)]
    fn cast_mut(value: &mut T) -> &mut Self {
        value
    }
}

/// Convert `value` into `To` through [`ElementCast`].
#[inline(always)]
pub fn cast<To, From>(value: From) -> To
where
    To: ElementCast<From>,
{
    To::cast(value)
}
