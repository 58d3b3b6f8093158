//! Right division `X · rhs = lhs` shared by the bundled backends.

use std::cmp::Ordering;

use num_traits::Float;

use super::Backend;

/// Solve `X · rhs = lhs` in the least-squares sense and write `X` into `out`.
///
/// `lhs` is `m × c`, `rhs` is `n × c` and `out` is `m × n`. The transposed
/// system `rhsᵀ · Xᵀ = lhsᵀ` is reduced by a Householder QR factorization of
/// `rhsᵀ` with column pivoting, so the conditioning of `rhs` is not squared.
/// Unknowns beyond the numerical rank stay at zero: a rank-deficient divisor
/// yields the basic solution, an all-zero divisor a zero quotient.
pub(crate) fn solve_right<T, L, D, O>(lhs: &L, rhs: &D, out: &mut O)
where
    T: Float,
    L: Backend<Raw = T>,
    D: Backend<Raw = T>,
    O: Backend<Raw = T>,
{
    let n = rhs.rows();
    let m = lhs.rows();
    let c = rhs.columns();
    debug_assert_eq!(lhs.columns(), c, "dividend and divisor column counts differ");

    // Columns of rhsᵀ (the rows of rhs) and of lhsᵀ, each of length c.
    let mut factors: Vec<Vec<T>> = (0..n).map(|j| row_of(rhs, j, c)).collect();
    let mut targets: Vec<Vec<T>> = (0..m).map(|j| row_of(lhs, j, c)).collect();
    let mut permutation: Vec<usize> = (0..n).collect();

    let mut rank = 0;
    let mut tolerance = T::zero();
    for k in 0..c.min(n) {
        let Some(best) = (k..n).max_by(|&a, &b| {
            tail_norm(&factors, a, k)
                .partial_cmp(&tail_norm(&factors, b, k))
                .unwrap_or(Ordering::Equal)
        }) else {
            break;
        };
        factors.swap(k, best);
        permutation.swap(k, best);

        let norm = tail_norm(&factors, k, k);
        if k == 0 {
            tolerance = norm * T::epsilon() * T::from(c.max(n)).unwrap_or_else(T::one);
        }
        if norm <= tolerance {
            break;
        }

        // A single remaining row is already triangular.
        if k + 1 < c {
            let mut reflector: Vec<T> = factors
                .get(k)
                .map(|column| column.iter().skip(k).copied().collect())
                .unwrap_or_default();
            if let Some(head) = reflector.first_mut() {
                let alpha = if *head > T::zero() { -norm } else { norm };
                *head = *head - alpha;
            }
            let weight = reflector.iter().fold(T::zero(), |acc, v| acc + *v * *v);
            for column in factors.iter_mut().skip(k).chain(targets.iter_mut()) {
                reflect(column, &reflector, weight, k);
            }
        }
        rank = k + 1;
    }

    if rank == 0 && n > 0 {
        log::warn!("division by a zero {n}x{c} matrix, quotient left at zero");
    } else if rank < n {
        log::debug!("rank-deficient divisor: rank {rank} of {n}");
    }

    for (i, target) in targets.iter().enumerate() {
        let mut solution = vec![T::zero(); rank];
        for row in (0..rank).rev() {
            let mut acc = target.get(row).copied().unwrap_or_else(T::zero);
            for (j, known) in solution.iter().enumerate().skip(row + 1) {
                acc = acc - entry(&factors, row, j) * *known;
            }
            if let Some(slot) = solution.get_mut(row) {
                *slot = acc / entry(&factors, row, row);
            }
        }
        for column in 0..n {
            *out.element_mut(i, column) = T::zero();
        }
        for (value, &column) in solution.iter().zip(&permutation) {
            *out.element_mut(i, column) = *value;
        }
    }
}

fn row_of<T: Copy, B: Backend<Raw = T>>(matrix: &B, row: usize, columns: usize) -> Vec<T> {
    (0..columns).map(|column| *matrix.element(row, column)).collect()
}

/// Euclidean norm of `columns[j]` from position `from` on.
fn tail_norm<T: Float>(columns: &[Vec<T>], j: usize, from: usize) -> T {
    columns
        .get(j)
        .map_or_else(T::zero, |column| column.iter().skip(from).fold(T::zero(), |acc, v| acc + *v * *v))
        .sqrt()
}

/// `R[row][column]` of the factorization stored column by column.
fn entry<T: Float>(columns: &[Vec<T>], row: usize, column: usize) -> T {
    columns.get(column).and_then(|values| values.get(row)).copied().unwrap_or_else(T::zero)
}

/// Apply `I - 2·v·vᵀ / (vᵀ·v)` to the tail of `column` starting at `from`.
fn reflect<T: Float>(column: &mut [T], reflector: &[T], weight: T, from: usize) {
    if weight <= T::zero() {
        return;
    }
    let dot = column.iter().skip(from).zip(reflector).fold(T::zero(), |acc, (x, v)| acc + *x * *v);
    let factor = (dot + dot) / weight;
    for (x, v) in column.iter_mut().skip(from).zip(reflector) {
        *x = *x - factor * *v;
    }
}
