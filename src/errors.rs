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

use std::io;

use thiserror::Error;

/// Everything that can abort a preparation run. There are no partial results, a run either
/// yields a complete split or one of these.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("{name} must be between 0 and 100, found {value}")]
    InvalidPercentage { name: &'static str, value: u32 },
    #[error("coordinate sequences differ in length ({rows} rows, {cols} cols, {values} values)")]
    ShapeMismatch { rows: usize, cols: usize, values: usize },
    #[error("entry ({row}, {col}) lies outside of a {num_rows}x{num_cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },
    #[error("malformed matrix market file: {0:?}")]
    MatrixMarket(sprs::io::IoError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PrepareError>;

/// Rejects percentages above 100, negative ones are ruled out by the type.
pub fn check_percentage(name: &'static str, value: u32) -> Result<u32> {
    if value > 100 {
        return Err(PrepareError::InvalidPercentage { name, value });
    }
    Ok(value)
}
