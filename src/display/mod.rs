//! Printable typed matrices.
//!
//! Every element is cast to its own type before it is formatted, so a
//! quantity prints with its unit. A singleton prints as its element, a row
//! vector as one bracketed list and anything else as a list of rows:
//!
//! ```
//! use typed_linalg::{TypedColumnVector, backend::Mat};
//! use typed_linalg::quantity::{Acceleration, Length, M, S, Velocity};
//!
//! type State = TypedColumnVector<Mat<f64, 3, 1>, (Length, Velocity, Acceleration)>;
//!
//! let x = State::from_values((3.0 * M, 2.0 * M / S, 1.0 * M / (S * S)));
//! assert_eq!(x.to_string(), "[[3 m], [2 m/s], [1 m/s²]]");
//! ```
//!
//! A precision in the format string applies to every element.

use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::backend::Backend;
use crate::cast::{ElementCast, cast};
use crate::index::{IndexList, Prod, Product};
use crate::matrix::TypedMatrix;
use crate::tuples::for_each_tuple;

/// Formats one row of elements, the row index being `Self`.
pub trait RowCells<C, B: Backend> {
    /// Format every element of `row`.
    fn row_cells(storage: &B, row: usize, precision: Option<usize>) -> Vec<String>;
}

/// Formats every element of a matrix, the row list being `Self`.
pub trait GridCells<C, B: Backend> {
    /// Format every element, row by row.
    fn grid_cells(storage: &B, precision: Option<usize>) -> Vec<Vec<String>>;
}

fn format_cell<E: Display>(value: E, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

macro_rules! display_impls {
    ($As:tt $Bs:tt $(($idx:tt $A:ident $B:ident))+) => {
        impl<Bk, Ri, $($A),+> RowCells<($($A,)+), Bk> for Ri
        where
            Bk: Backend,
            $(Ri: Product<$A>, Prod<Ri, $A>: Display + ElementCast<Bk::Raw>,)+
        {
            fn row_cells(storage: &Bk, row: usize, precision: Option<usize>) -> Vec<String> {
                vec![$(format_cell::<Prod<Ri, $A>>(cast(*storage.element(row, $idx)), precision)),+]
            }
        }

        impl<Bk, C, $($A),+> GridCells<C, Bk> for ($($A,)+)
        where
            Bk: Backend,
            $($A: RowCells<C, Bk>,)+
        {
            fn grid_cells(storage: &Bk, precision: Option<usize>) -> Vec<Vec<String>> {
                vec![$(<$A as RowCells<C, Bk>>::row_cells(storage, $idx, precision)),+]
            }
        }
    };
}

for_each_tuple!(display_impls);

impl<B, R, C> TypedMatrix<B, R, C>
where
    B: Backend,
    R: IndexList + GridCells<C, B>,
    C: IndexList,
{
    /// Every element formatted with its own `Display`, row by row.
    pub fn cells(&self, precision: Option<usize>) -> Vec<Vec<String>> {
        R::grid_cells(self.data(), precision)
    }

    /// Render as a box-drawn table with row and column positions.
    pub fn display_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                std::iter::once(Cell::new(""))
                    .chain((0..C::LEN).map(|j| Cell::new(j).set_alignment(CellAlignment::Center))),
            );

        for (i, row) in self.cells(None).into_iter().enumerate() {
            table.add_row(
                std::iter::once(Cell::new(i).set_alignment(CellAlignment::Left))
                    .chain(row.into_iter().map(|cell| Cell::new(cell).set_alignment(CellAlignment::Right))),
            );
        }

        table.to_string()
    }
}

impl<B, R, C> Display for TypedMatrix<B, R, C>
where
    B: Backend,
    R: IndexList + GridCells<C, B>,
    C: IndexList,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.cells(f.precision());
        let bracket = |row: &Vec<String>| format!("[{}]", row.join(", "));

        match (R::LEN, C::LEN, cells.first()) {
            (1, 1, Some(row)) => write!(f, "{}", row.join("")),
            (1, _, Some(row)) => write!(f, "{}", bracket(row)),
            _ => {
                let rows: Vec<String> = cells.iter().map(bracket).collect();
                write!(f, "[{}]", rows.join(", "))
            }
        }
    }
}
