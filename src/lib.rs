//! Strongly typed matrices.
//!
//! Every row and every column of a [`TypedMatrix`] carries an index type, and
//! the element at `(i, j)` has the type-level product of the two as its type.
//! The numbers live in an ordinary backend matrix; the index lists only exist
//! at compile time, so mixing up a velocity and an acceleration is a type
//! error rather than a wrong answer.
//!
//! ```
//! use typed_linalg::{TypedColumnVector, TypedMatrix, backend::Mat, transposed};
//! use typed_linalg::quantity::{Acceleration, Area, Length, M, S, Velocity};
//!
//! type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
//!
//! let x = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
//! let p = x * transposed(&x);
//! let corner: Area = p.at::<0, 0>();
//! assert_eq!(corner, 9.0 * M * M);
//! assert_eq!(x.to_string(), "[[3 m], [2 m/s], [1 m/s²]]");
//! ```
//!
//! Adding quantities of different kinds does not compile:
//!
//! ```compile_fail
//! use typed_linalg::{TypedColumnVector, backend::Mat};
//! use typed_linalg::quantity::{Acceleration, Velocity};
//!
//! let v = TypedColumnVector::<Mat<f64, 2, 1>, (Velocity, Velocity)>::zeros();
//! let a = TypedColumnVector::<Mat<f64, 2, 1>, (Acceleration, Acceleration)>::zeros();
//! let _ = v + a;
//! ```
//!
//! Numeric work is delegated to the capability traits of [`backend`]; the
//! bundled [`backend::Mat`] is a small stack-allocated matrix, and the
//! `ndarray` feature adapts `ndarray` arrays.

mod tuples;

pub mod backend;
pub mod cast;
pub mod display;
pub mod error;
pub mod index;
pub mod matrix;
pub mod ops;
pub mod quantity;
pub mod read;
pub mod serialize;

pub use cast::{ElementCast, ElementCastRef, cast};
pub use error::{MatrixError, Result};
pub use index::{Identity, IdentityIndex, IndexList, IndexType, Prod, Quot};
pub use matrix::{TypedColumnVector, TypedMatrix, TypedRowVector};
pub use ops::{scale, transposed};
pub use tuples::MAX_INDEXES;

#[cfg(test)]
use criterion as _;
#[cfg(test)]
use env_logger as _;
