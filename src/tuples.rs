//! Tuple arity driver.
//!
//! Index lists are plain tuples. Every trait that has to look at each position
//! of a list is implemented once per arity by a callee macro invoked through
//! [`for_each_tuple`]. The callee receives the two type-parameter lists as
//! bracketed groups followed by one `(position A B)` triple per position:
//!
//! ```text
//! callee! { [A0 A1] [B0 B1] (0 A0 B0) (1 A1 B1) }
//! ```

/// Largest index list supported by the tuple implementations.
pub const MAX_INDEXES: usize = 8;

macro_rules! for_each_tuple {
    ($m:ident) => {
        $m! { [A0] [B0] (0 A0 B0) }
        $m! { [A0 A1] [B0 B1] (0 A0 B0) (1 A1 B1) }
        $m! { [A0 A1 A2] [B0 B1 B2] (0 A0 B0) (1 A1 B1) (2 A2 B2) }
        $m! {
            [A0 A1 A2 A3] [B0 B1 B2 B3]
            (0 A0 B0) (1 A1 B1) (2 A2 B2) (3 A3 B3)
        }
        $m! {
            [A0 A1 A2 A3 A4] [B0 B1 B2 B3 B4]
            (0 A0 B0) (1 A1 B1) (2 A2 B2) (3 A3 B3) (4 A4 B4)
        }
        $m! {
            [A0 A1 A2 A3 A4 A5] [B0 B1 B2 B3 B4 B5]
            (0 A0 B0) (1 A1 B1) (2 A2 B2) (3 A3 B3) (4 A4 B4) (5 A5 B5)
        }
        $m! {
            [A0 A1 A2 A3 A4 A5 A6] [B0 B1 B2 B3 B4 B5 B6]
            (0 A0 B0) (1 A1 B1) (2 A2 B2) (3 A3 B3) (4 A4 B4) (5 A5 B5)
            (6 A6 B6)
        }
        $m! {
            [A0 A1 A2 A3 A4 A5 A6 A7] [B0 B1 B2 B3 B4 B5 B6 B7]
            (0 A0 B0) (1 A1 B1) (2 A2 B2) (3 A3 B3) (4 A4 B4) (5 A5 B5)
            (6 A6 B6) (7 A7 B7)
        }
    };
}

pub(crate) use for_each_tuple;
