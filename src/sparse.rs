/**
 * RecoSplit
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use fnv::FnvHashSet;
use sprs::{CsMat, TriMat};

use crate::errors::{PrepareError, Result};
use crate::types::InteractionMatrix;

/// Assembles a compressed-row matrix from parallel coordinate sequences. Values at repeated
/// positions are summed, entries that sum up to zero are not stored.
pub fn build_matrix(
    shape: (usize, usize),
    rows: &[usize],
    cols: &[usize],
    values: &[f64],
) -> Result<InteractionMatrix> {

    if rows.len() != values.len() || cols.len() != values.len() {
        return Err(PrepareError::ShapeMismatch {
            rows: rows.len(),
            cols: cols.len(),
            values: values.len(),
        });
    }

    let (num_rows, num_cols) = shape;

    // sprs panics on out of bounds triplets, so we have to check beforehand
    if let Some((row, col)) = rows.iter().zip(cols.iter())
        .find(|&(row, col)| *row >= num_rows || *col >= num_cols) {

        return Err(PrepareError::IndexOutOfBounds {
            row: *row,
            col: *col,
            num_rows,
            num_cols,
        });
    }

    let triplets = TriMat::from_triplets(shape, rows.to_vec(), cols.to_vec(), values.to_vec());
    let matrix: InteractionMatrix = triplets.to_csr();

    if matrix.data().iter().any(|value| *value == 0.0) {
        Ok(eliminate(&matrix, &[]))
    } else {
        Ok(matrix)
    }
}

/// All stored non-zero positions as (row, col) pairs, in row-major order.
pub fn nonzero_pairs(matrix: &InteractionMatrix) -> Vec<(usize, usize)> {

    let mut pairs = Vec::with_capacity(matrix.nnz());

    with_csr(matrix, |csr| {
        for (row, row_vector) in csr.outer_iterator().enumerate() {
            for (col, value) in row_vector.iter() {
                if *value != 0.0 {
                    pairs.push((row, col));
                }
            }
        }
    });

    pairs
}

/// Rebuilds the compressed storage of `matrix` without the entries at `positions` and
/// without any explicit zeros.
pub fn eliminate(matrix: &InteractionMatrix, positions: &[(usize, usize)]) -> InteractionMatrix {

    let removed: FnvHashSet<(usize, usize)> = positions.iter().cloned().collect();

    let mut indptr: Vec<usize> = Vec::with_capacity(matrix.rows() + 1);
    let mut indices: Vec<usize> = Vec::with_capacity(matrix.nnz().saturating_sub(removed.len()));
    let mut data: Vec<f64> = Vec::with_capacity(indices.capacity());

    indptr.push(0);

    with_csr(matrix, |csr| {
        for (row, row_vector) in csr.outer_iterator().enumerate() {
            for (col, value) in row_vector.iter() {
                if *value != 0.0 && !removed.contains(&(row, col)) {
                    indices.push(col);
                    data.push(*value);
                }
            }
            indptr.push(indices.len());
        }
    });

    CsMat::new(matrix.shape(), indptr, indices, data)
}

/// Same support as `matrix`, with every stored value replaced by one.
pub fn binarize(matrix: &InteractionMatrix) -> InteractionMatrix {
    eliminate(matrix, &[]).map(|_| 1.0)
}

fn with_csr<F>(matrix: &InteractionMatrix, mut visit: F)
    where F: FnMut(&InteractionMatrix) {

    if matrix.is_csr() {
        visit(matrix)
    } else {
        visit(&matrix.to_csr())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn duplicates_are_summed() {
        let matrix = build_matrix(
            (2, 3),
            &[0, 1, 0, 1],
            &[2, 0, 2, 1],
            &[1.0, 4.0, 2.5, 3.0],
        ).unwrap();

        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.get(0, 2), Some(&3.5));
        assert_eq!(matrix.get(1, 0), Some(&4.0));
        assert_eq!(matrix.get(1, 1), Some(&3.0));
        assert_eq!(matrix.get(0, 0), None);
    }

    #[test]
    fn zero_sums_are_not_stored() {
        let matrix = build_matrix((1, 2), &[0, 0, 0], &[0, 0, 1], &[2.0, -2.0, 1.0]).unwrap();

        assert_eq!(matrix.nnz(), 1);
        assert_eq!(nonzero_pairs(&matrix), vec![(0, 1)]);
    }

    #[test]
    fn rejects_out_of_bounds_indices() {
        match build_matrix((2, 2), &[0, 2], &[1, 1], &[1.0, 1.0]) {
            Err(PrepareError::IndexOutOfBounds { row, col, num_rows, num_cols }) => {
                assert_eq!((row, col, num_rows, num_cols), (2, 1, 2, 2));
            },
            other => panic!("unexpected result {:?}", other),
        }

        assert!(build_matrix((2, 2), &[0], &[5], &[1.0]).is_err());
    }

    #[test]
    fn rejects_mismatched_lengths() {
        match build_matrix((2, 2), &[0, 1], &[1], &[1.0, 1.0]) {
            Err(PrepareError::ShapeMismatch { rows, cols, values }) => {
                assert_eq!((rows, cols, values), (2, 1, 2));
            },
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn empty_matrix() {
        let matrix = build_matrix((0, 0), &[], &[], &[]).unwrap();

        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.nnz(), 0);
        assert!(nonzero_pairs(&matrix).is_empty());
        assert_eq!(binarize(&matrix).nnz(), 0);
    }

    #[test]
    fn eliminate_drops_marked_entries() {
        let matrix = build_matrix(
            (3, 3),
            &[0, 0, 1, 2, 2],
            &[0, 2, 1, 0, 2],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
        ).unwrap();

        let compacted = eliminate(&matrix, &[(0, 2), (2, 0)]);

        assert_eq!(compacted.shape(), (3, 3));
        assert_eq!(compacted.nnz(), 3);
        assert_eq!(nonzero_pairs(&compacted), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(compacted.data(), &[1.0, 3.0, 5.0]);
        assert_eq!(compacted.get(0, 2), None);
    }

    #[test]
    fn binarize_keeps_support() {
        let matrix = build_matrix((2, 2), &[0, 1, 1], &[1, 0, 1], &[7.0, 3.0, 10.0]).unwrap();
        let binary = binarize(&matrix);

        assert_eq!(nonzero_pairs(&binary), nonzero_pairs(&matrix));
        assert!(binary.data().iter().all(|value| *value == 1.0));
    }

    fn triplets_strategy(
        num_rows: usize,
        num_cols: usize,
        max_nnz: usize,
    ) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
        prop::collection::vec(
            (0..num_rows, 0..num_cols, (1..=10u32).prop_map(|rating| rating as f64)),
            0..=max_nnz,
        )
    }

    proptest! {
        #[test]
        fn matches_dense_reference(triplets in triplets_strategy(6, 5, 40)) {
            let rows: Vec<usize> = triplets.iter().map(|t| t.0).collect();
            let cols: Vec<usize> = triplets.iter().map(|t| t.1).collect();
            let values: Vec<f64> = triplets.iter().map(|t| t.2).collect();

            let matrix = build_matrix((6, 5), &rows, &cols, &values).unwrap();

            let mut dense = vec![vec![0.0; 5]; 6];
            for &(row, col, value) in &triplets {
                dense[row][col] += value;
            }

            let distinct: FnvHashSet<(usize, usize)> =
                triplets.iter().map(|t| (t.0, t.1)).collect();

            prop_assert!(matrix.nnz() <= distinct.len());

            for (row, dense_row) in dense.iter().enumerate() {
                for (col, expected) in dense_row.iter().enumerate() {
                    let actual = matrix.get(row, col).cloned().unwrap_or(0.0);
                    prop_assert_eq!(actual, *expected);
                }
            }
        }
    }
}
