//! One step of a one-dimensional vehicle location Kalman filter.
//!
//! The state holds position, velocity and acceleration; every matrix of the
//! filter carries the units of its rows and columns, so each equation below
//! is checked dimensionally by the compiler.
//!
//! Run with `RUST_LOG=debug` to see the backend solve.

use typed_linalg::backend::Mat;
use typed_linalg::quantity::{
    Acceleration, Area, Dimensionless, Exp, Frequency, Length, M, Quantity, S, Time, Velocity,
};
use typed_linalg::{Identity, TypedColumnVector, TypedMatrix, TypedRowVector, transposed};

type PerLength = Quantity<Exp<-1>, Exp<0>>;
type TimePerLength = Quantity<Exp<-1>, Exp<1>>;
type SquareTimePerLength = Quantity<Exp<-1>, Exp<2>>;
type SquareTime = Quantity<Exp<0>, Exp<2>>;
type PerSquareTime = Quantity<Exp<0>, Exp<-2>>;

type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
type EstimateUncertainty =
    TypedMatrix<Mat<f64, 3, 3>, (Length, Velocity, Acceleration), (Length, Velocity, Acceleration)>;
type ProcessUncertainty = EstimateUncertainty;
type StateTransition = TypedMatrix<
    Mat<f64, 3, 3>,
    (Length, Velocity, Acceleration),
    (PerLength, TimePerLength, SquareTimePerLength),
>;
type OutputModel = TypedRowVector<Mat<f64, 1, 3>, (Dimensionless, Time, SquareTime)>;
type Output = TypedColumnVector<Mat<f64, 1, 1>, (Length,)>;
type OutputUncertainty = TypedMatrix<Mat<f64, 1, 1>, (Area,), (Identity,)>;
type InnovationUncertainty = OutputUncertainty;
type Gain = TypedColumnVector<Mat<f64, 3, 1>, (Dimensionless, Frequency, PerSquareTime)>;
type GainOutput = TypedMatrix<Mat<f64, 3, 3>, (Dimensionless, Frequency, PerSquareTime), (Dimensionless, Time, SquareTime)>;

fn main() {
    env_logger::init();

    let mut x = State::from_values((0.0 * M, 0.0 * M / S, 0.0 * M / (S * S)));
    println!("X: {x}");

    let mut p = EstimateUncertainty::zeros();
    p.set::<0, 0>(500.0 * M * M);
    p.set::<1, 1>(500.0 * M * M / (S * S));
    p.set::<2, 2>(500.0 * M * M / (S * S * S * S));
    println!("P: {p}");

    let mut q = ProcessUncertainty::zeros();
    q.set::<0, 0>(0.01 * M * M);
    q.set::<0, 1>(0.02 * M * M / S);
    q.set::<0, 2>(0.02 * M * M / (S * S));
    q.set::<1, 0>(0.02 * M * M / S);
    q.set::<1, 1>(0.04 * M * M / (S * S));
    q.set::<1, 2>(0.04 * M * M / (S * S * S));
    q.set::<2, 0>(0.02 * M * M / (S * S));
    q.set::<2, 1>(0.04 * M * M / (S * S * S));
    q.set::<2, 2>(0.04 * M * M / (S * S * S * S));
    println!("Q: {q}");

    let r = OutputUncertainty::new(9.0 * M * M);
    println!("R: {r}");

    let h = OutputModel::from_values((Dimensionless::new(1.0), 0.0 * S, 0.0 * S * S));
    println!("H: {h}");

    let mut f = StateTransition::identity();
    f.set::<0, 1>(1.0 * S);
    f.set::<0, 2>(0.5 * S * S);
    f.set::<1, 2>(1.0 * S);
    println!("F: {f}");

    // Predict.
    x = State::from_compatible(f * x);
    p = EstimateUncertainty::from_compatible(f * p * transposed(&f) + q);

    // Update.
    let z = Output::new(-393.66 * M);
    let s = InnovationUncertainty::from_compatible(h * p * transposed(&h) + r);
    let k = Gain::from_compatible(p * transposed(&h) / s);
    let y = z - h * x;
    x = x + k * y;
    println!("X: {x:.2}");

    let i = GainOutput::identity();
    let correction = i - k * h;
    p = EstimateUncertainty::from_compatible(
        correction * p * transposed(&correction) + k * r * transposed(&k),
    );
    println!("P: {p:.2}");
    println!("{}", p.display_table());
}
