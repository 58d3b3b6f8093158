//! Loading and storing raw matrix values.
//!
//! A CSV file holds one matrix row per record, no header, raw backend values
//! only. Like [`TypedMatrix::from_storage`], loading trusts the numbers to
//! mean what the index lists say; only the shape is checked.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{Backend, Zeros};
use crate::error::{MatrixError, Result};
use crate::index::IndexList;
use crate::matrix::TypedMatrix;

impl<B: Zeros, R: IndexList, C: IndexList> TypedMatrix<B, R, C> {
    /// Matrix from row-major raw values.
    ///
    /// # Errors
    ///
    /// [`MatrixError::RowCount`] or [`MatrixError::ColumnCount`] when the
    /// nesting does not match the matrix shape.
    pub fn from_raw_rows(rows: Vec<Vec<B::Raw>>) -> Result<Self> {
        if rows.len() != R::LEN {
            return Err(MatrixError::RowCount { expected: R::LEN, found: rows.len() });
        }
        let mut storage = B::zeros(R::LEN, C::LEN);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != C::LEN {
                return Err(MatrixError::ColumnCount { row: i, expected: C::LEN, found: row.len() });
            }
            for (j, value) in row.into_iter().enumerate() {
                *storage.element_mut(i, j) = value;
            }
        }
        Ok(Self::from_storage(storage))
    }

    /// Read a matrix from a header-less CSV file.
    ///
    /// # Errors
    ///
    /// I/O and CSV failures, [`MatrixError::Empty`] for a file without
    /// records and the shape errors of [`TypedMatrix::from_raw_rows`].
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        B::Raw: DeserializeOwned,
    {
        let path = path.as_ref();
        log::debug!("reading {}x{} matrix from {}", R::LEN, C::LEN, path.display());
        Self::from_csv_reader(File::open(path)?)
    }

    /// Read a matrix from any CSV source.
    ///
    /// ```
    /// use typed_linalg::{TypedMatrix, backend::Mat, quantity::{Length, Velocity}};
    ///
    /// type P = TypedMatrix<Mat<f64, 2, 2>, (Length, Velocity), (Length, Velocity)>;
    ///
    /// let p = P::from_csv_reader("500, 0\n0, 20\n".as_bytes()).unwrap();
    /// assert_eq!(p.at::<1, 1>().value(), 20.0);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`TypedMatrix::read_csv`].
    pub fn from_csv_reader<Rd: io::Read>(reader: Rd) -> Result<Self>
    where
        B::Raw: DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.deserialize::<Vec<B::Raw>>() {
            rows.push(record?);
        }

        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }

        Self::from_raw_rows(rows)
    }
}

impl<B: Backend, R: IndexList, C: IndexList> TypedMatrix<B, R, C> {
    /// Raw values, row by row.
    pub fn to_raw_rows(&self) -> Vec<Vec<B::Raw>> {
        (0..R::LEN)
            .map(|i| (0..C::LEN).map(|j| *self.data().element(i, j)).collect())
            .collect()
    }

    /// Write the raw values as a header-less CSV file.
    ///
    /// # Errors
    ///
    /// I/O and CSV failures.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        B::Raw: Serialize,
    {
        let path = path.as_ref();
        log::debug!("writing {}x{} matrix to {}", R::LEN, C::LEN, path.display());
        self.to_csv_writer(File::create(path)?)
    }

    /// Write the raw values to any CSV sink.
    ///
    /// # Errors
    ///
    /// I/O and CSV failures.
    pub fn to_csv_writer<W: io::Write>(&self, writer: W) -> Result<()>
    where
        B::Raw: Serialize,
    {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        for row in self.to_raw_rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::MatrixError;
    use crate::backend::Mat;
    use crate::quantity::{Acceleration, Length, M, S, Time, Velocity};
    use crate::{TypedColumnVector, TypedMatrix};
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
    type Transition = TypedMatrix<Mat<f64, 3, 3>, (Length, Velocity, Acceleration), (Length, Time, Time)>;

    #[test]
    fn reads_one_row_per_record() {
        let x = State::from_csv_reader("-390.53\n -260.36 \n-86.79\n".as_bytes()).unwrap();
        assert_relative_eq!(x.at::<0, 0>().value(), -390.53);
        assert_eq!(x.at_index::<1>(), -260.36 * M / S);
        assert_relative_eq!(x.at_index::<2>().value(), -86.79);
    }

    #[test]
    fn shape_mismatches_are_reported() {
        let err = State::from_csv_reader("1\n2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::RowCount { expected: 3, found: 2 }));

        let err = State::from_csv_reader("1\n2,3\n4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::ColumnCount { row: 1, expected: 1, found: 2 }));

        let err = State::from_csv_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Empty));
    }

    #[test]
    fn unparsable_values_are_csv_errors() {
        let err = State::from_csv_reader("1\nfast\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Csv(_)));
        assert!(err.to_string().starts_with("CSV parsing error"));
    }

    #[test]
    fn written_csv_reads_back() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut raw = [[0.0; 3]; 3];
        for value in raw.iter_mut().flatten() {
            *value = rng.gen_range(-100.0..100.0);
        }
        let f = Transition::from_storage(Mat::new(raw));

        let mut buffer = Vec::new();
        f.to_csv_writer(&mut buffer).unwrap();
        assert_eq!(String::from_utf8_lossy(&buffer).lines().count(), 3);

        let back = Transition::from_csv_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn files_round_trip() {
        let path = std::env::temp_dir().join(format!("typed-linalg-read-{}.csv", std::process::id()));
        let x = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
        x.write_csv(&path).unwrap();
        let back = State::read_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back, x);

        assert!(matches!(State::read_csv(&path), Err(MatrixError::Io(_))));
    }

    #[test]
    fn raw_rows_keep_row_order() {
        let x = State::from_raw_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        assert_eq!(x.to_raw_rows(), vec![vec![1.0], vec![2.0], vec![3.0]]);
    }
}
