//! A tour of unit-typed matrices: construction, access, arithmetic and I/O.

use typed_linalg::backend::Mat;
use typed_linalg::quantity::{Acceleration, Dimensionless, Frequency, Length, M, S, Velocity};
use typed_linalg::{TypedColumnVector, TypedMatrix, TypedRowVector, transposed};

type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
type StateTranspose = TypedRowVector<Mat<f64, 1, 3>, (Length, Velocity, Acceleration)>;
type Vector3 = TypedColumnVector<Mat<f64, 3, 1>, (f64, f64, f64)>;
type Velocity3 = TypedColumnVector<Mat<f64, 3, 1>, (Velocity, Velocity, Velocity)>;
type Position2Uncertainty = TypedMatrix<Mat<f64, 2, 2>, (Length, Length), (Length, Length)>;
type Rate = TypedMatrix<Mat<f64, 1, 1>, (Length,), (Frequency,)>;

fn main() -> typed_linalg::Result<()> {
    env_logger::init();

    let mut x0 = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
    println!("x0 = {x0}");
    assert_eq!(x0.to_string(), "[[3 m], [2 m/s], [1 m/s²]]");

    *x0.at_index_mut::<1>() = 2.5 * M / S;
    assert_eq!(x0.at_index::<1>().to_string(), "2.5 m/s");

    let x1 = x0 * 3.0;
    assert_eq!(x1.to_string(), "[[9 m], [7.5 m/s], [3 m/s²]]");
    let x2 = x1 / 2.0;
    assert_eq!(x2.to_string(), "[[4.5 m], [3.75 m/s], [1.5 m/s²]]");
    let x3 = x2 - x0;
    assert_eq!(x3.to_string(), "[[1.5 m], [1.25 m/s], [0.5 m/s²]]");
    let x4 = x3 + x3;
    assert_eq!(x4.to_string(), "[[3 m], [2.5 m/s], [1 m/s²]]");

    let x5 = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
    assert_eq!((x5 * (2.0 * M)).to_string(), "[[6 m²], [4 m²/s], [2 m²/s²]]");
    assert_eq!(((2.0 * M) * x5).to_string(), "[[6 m²], [4 m²/s], [2 m²/s²]]");
    assert_eq!(((0.5 / M) * x5).to_string(), "[[1.5], [1 1/s], [0.5 1/s²]]");
    assert_eq!((2.0 * x5).to_string(), "[[6 m], [4 m/s], [2 m/s²]]");
    assert_eq!((x5 / (2.0 * M)).to_string(), "[[1.5], [1 1/s], [0.5 1/s²]]");

    let xt5 = StateTranspose::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
    assert_eq!(xt5.to_string(), "[3 m, 2 m/s, 1 m/s²]");
    assert_eq!(xt5, transposed(&x5));
    assert_eq!((xt5 * 2.0).to_string(), "[6 m, 4 m/s, 2 m/s²]");
    assert_eq!((xt5 * (2.0 * M)).to_string(), "[6 m², 4 m²/s, 2 m²/s²]");

    let outer = x5 * xt5;
    assert_eq!(
        outer.to_string(),
        "[[9 m², 6 m²/s, 3 m²/s²], [6 m²/s, 4 m²/s², 2 m²/s³], [3 m²/s², 2 m²/s³, 1 m²/s⁴]]"
    );
    println!("x5 * xt5 =\n{}", outer.display_table());

    let mut s1 = Rate::new(1.0 * M / S);
    assert_eq!(s1.to_string(), "1 m/s");
    s1.set::<0, 0>(23.0 * M / S);
    s1[(0, 0)] = 21.0 * M / S;
    s1[0] = 11.0 * M / S;
    s1.set_value(1.0 * M / S);
    let element: Velocity = s1.value();
    assert_eq!(element, 1.0 * M / S);
    assert_eq!((x5 * s1).to_string(), "[[3 m²/s], [2 m²/s²], [1 m²/s³]]");
    assert_eq!((s1 / s1).to_string(), "1");
    println!("x5 / x5 = {:.3}", x5 / x5);
    assert_eq!((1.0 / x5).to_string(), "[0.3333333333333333 1/m, 0 s/m, 0 s²/m]");
    assert_eq!(((1.0 * M) / x5).to_string(), "[0.3333333333333333, 0 s, 0 s²]");

    let v = Vector3::from_array([1.0, 2.0, 3.0]);
    let mut v0 = Velocity3::from_compatible(v * M / S);
    assert_eq!(v0.to_string(), "[[1 m/s], [2 m/s], [3 m/s]]");
    let v1 = Velocity3::from_array([1.0 * M / S, 2.0 * M / S, 3.0 * M / S]);
    assert_eq!(v0, v1);
    v0[1] = 3.0 * M / S;
    assert_eq!(v0.get_index(1), 3.0 * M / S);
    assert_eq!((v0 + v0).to_string(), "[[2 m/s], [6 m/s], [6 m/s]]");
    assert_eq!((v0 - v0).to_string(), "[[0 m/s], [0 m/s], [0 m/s]]");

    let mut p0 = Position2Uncertainty::zeros();
    p0[(0, 1)] = 9.0 * M * M;
    p0[(0, 1)] = 16.0 * M * M;
    assert_eq!(p0.get(0, 1), 16.0 * M * M);

    let json = serde_json::to_string(&x5).map_err(std::io::Error::other)?;
    println!("x5 as JSON: {json}");
    let mut csv = Vec::new();
    outer.to_csv_writer(&mut csv)?;
    print!("x5 * xt5 as CSV:\n{}", String::from_utf8_lossy(&csv));

    let ratio: Dimensionless = (x5 / (3.0 * M)).at::<0, 0>();
    println!("first state component over 3 m: {ratio}");
    Ok(())
}
