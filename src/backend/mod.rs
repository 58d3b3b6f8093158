//! Linear algebra backend contract.
//!
//! A typed matrix owns exactly one backend value and delegates every number
//! crunching step to it. The only hard requirement is positional access and
//! shape information ([`Backend`]); each algorithm additionally asks for the
//! single capability it needs, so a backend without, say, a transpose still
//! works for everything else.

mod mat;
#[cfg(feature = "ndarray")]
mod ndarray_backend;
mod solve;

pub use mat::Mat;

/// Positional storage of raw numbers.
///
/// Positions are `(row, column)`. Out-of-range positions are the backend's
/// business; the typed layer never checks them at runtime.
pub trait Backend {
    /// The raw numeric type of the stored elements.
    type Raw: Copy;

    /// Borrow the element at `(row, column)`.
    fn element(&self, row: usize, column: usize) -> &Self::Raw;

    /// Mutably borrow the element at `(row, column)`.
    fn element_mut(&mut self, row: usize, column: usize) -> &mut Self::Raw;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn columns(&self) -> usize;
}

/// Zero-initialized construction.
pub trait Zeros: Backend + Sized {
    /// A `rows × columns` storage filled with the raw zero.
    fn zeros(rows: usize, columns: usize) -> Self;
}

/// Matrix product `self · rhs`.
pub trait MatMul<Rhs> {
    /// Storage of the product.
    type Output: Backend;

    /// Compute the product.
    fn matmul(&self, rhs: &Rhs) -> Self::Output;
}

/// Transposition.
pub trait Transpose {
    /// Storage of the transpose.
    type Output: Backend;

    /// Compute the transpose.
    fn transpose(&self) -> Self::Output;
}

/// Matrix division: the `X` solving `X · rhs = lhs`.
///
/// Dividing an `R1 × C` matrix by an `R2 × C` matrix results in an `R1 × R2`
/// matrix. Division is not inversion: how `X` is found (and what happens
/// when `rhs` is singular) is entirely up to the backend. The bundled
/// backends solve in the least-squares sense.
pub trait Divide<Rhs> {
    /// Storage of the quotient.
    type Output: Backend;

    /// Compute the quotient.
    fn divide(&self, rhs: &Rhs) -> Self::Output;
}

/// In-place scaling by a scalar factor.
pub trait Scale<F> {
    /// Multiply every stored element by `factor`.
    fn scale(&mut self, factor: F);
}

/// In-place division by a scalar divisor.
///
/// Kept apart from [`Scale`]: multiplying by the reciprocal rounds
/// differently, `7.0 * (1.0 / 10.0)` is not `7.0 / 10.0`.
pub trait DivideScalar<F> {
    /// Divide every stored element by `divisor`.
    fn divide_scalar(&mut self, divisor: F);
}

/// Divisors that can wrap a single raw number in a `1 × 1` storage of their
/// own family.
///
/// A scalar divided by a matrix is the quotient of that storage and the
/// matrix, so the storage must [`Divide`] by `Self`.
pub trait ScalarStorage: Backend + Sized {
    /// The `1 × 1` storage.
    type Storage: Backend<Raw = Self::Raw> + Divide<Self>;

    /// Wrap `value`.
    fn from_scalar(value: Self::Raw) -> Self::Storage;
}

#[cold]
#[track_caller]
pub(crate) fn out_of_range(row: usize, column: usize, rows: usize, columns: usize) -> ! {
    panic!("position ({row}, {column}) is outside a {rows}x{columns} matrix")
}
